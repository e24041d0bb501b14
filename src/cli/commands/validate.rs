//! stepdeck validate - Check that a deck file loads

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::ValidationReport;
use crate::cli::output::emit;
use crate::error::Result;
use crate::loader::DeckFormat;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Deck file, or a deck name found on the configured search paths
    pub deck: String,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let (path, deck) = ctx.load_deck(&args.deck)?;
    let format = DeckFormat::from_path(&path)?;
    let report = ValidationReport::new(&path, format, &deck);
    if !report.warnings.is_empty() {
        tracing::info!(warnings = report.warnings.len(), "deck loaded with warnings");
    }
    emit(&report, ctx.output_format)
}
