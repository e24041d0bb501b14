//! stepdeck outline - List the slides of a deck

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::DeckOutline;
use crate::cli::output::emit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Deck file, or a deck name found on the configured search paths
    pub deck: String,
}

pub fn run(ctx: &AppContext, args: &OutlineArgs) -> Result<()> {
    let (path, deck) = ctx.load_deck(&args.deck)?;
    emit(&DeckOutline::new(&path, &deck), ctx.output_format)
}
