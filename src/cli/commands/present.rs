//! stepdeck present - Present a deck interactively in the terminal

use std::num::NonZeroUsize;

use clap::Args;

use crate::app::AppContext;
use crate::error::{DeckError, Result};
use crate::tui::{PresenterOptions, run_presenter};

#[derive(Args, Debug)]
pub struct PresentArgs {
    /// Deck file, or a deck name found on the configured search paths
    pub deck: String,

    /// Slide number to open at, starting at 1 (default: presenter.start_slide)
    #[arg(long)]
    pub start: Option<NonZeroUsize>,

    /// Show transition and background identifiers in the status line
    #[arg(long)]
    pub metadata: bool,
}

pub fn run(ctx: &AppContext, args: &PresentArgs) -> Result<()> {
    if ctx.robot_mode {
        return Err(DeckError::TerminalRequired(
            "present cannot run with JSON output".to_string(),
        ));
    }

    let (path, mut engine) = ctx.open_engine(&args.deck)?;
    let start = args
        .start
        .map_or(ctx.config.presenter.start_slide, NonZeroUsize::get);
    engine.jump_to_slide(start.saturating_sub(1))?;

    let presenter = &ctx.config.presenter;
    let options = PresenterOptions {
        tick_ms: presenter.tick_ms,
        show_progress: presenter.show_progress,
        progress_style: presenter
            .progress_style
            .unwrap_or(engine.deck().meta().progress),
        show_metadata: args.metadata || presenter.show_metadata,
    };
    tracing::debug!(path = %path.display(), start, "presenting deck");

    let finished = run_presenter(engine, options)?;
    tracing::info!(
        slide = finished.slide_index + 1,
        step = finished.reveal_step,
        "presentation closed"
    );
    Ok(())
}
