//! stepdeck show - Print what is visible at one position of a deck

use std::num::NonZeroUsize;

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::SlideView;
use crate::cli::output::emit;
use crate::core::{PresentationEngine, ProgressStyle};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Deck file, or a deck name found on the configured search paths
    pub deck: String,

    /// Slide number, starting at 1
    #[arg(long, short = 's', default_value = "1")]
    pub slide: NonZeroUsize,

    /// Number of reveal units to show (clamped to the slide's count)
    #[arg(long, short = 'k', conflicts_with = "all")]
    pub step: Option<usize>,

    /// Reveal every unit of the slide
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Also print transition and background identifiers
    #[arg(long)]
    pub metadata: bool,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let (path, mut engine) = ctx.open_engine(&args.deck)?;
    tracing::debug!(path = %path.display(), slide = args.slide.get(), step = ?args.step, "show");

    seek(&mut engine, args.slide.get() - 1, args.step, args.all)?;

    let presenter = &ctx.config.presenter;
    let mut view = SlideView::new(&engine).with_metadata(args.metadata || presenter.show_metadata);
    if !presenter.show_progress {
        view = view.with_progress_style(ProgressStyle::None);
    } else if let Some(style) = presenter.progress_style {
        view = view.with_progress_style(style);
    }
    emit(&view, ctx.output_format)
}

/// Walk the engine to `(slide, min(step, count))` using only its public
/// navigation operations.
pub fn seek(
    engine: &mut PresentationEngine,
    slide: usize,
    step: Option<usize>,
    all: bool,
) -> Result<()> {
    engine.jump_to_slide(slide)?;
    let count = engine.current_slide().reveal_unit_count();
    let steps = if all {
        count
    } else {
        step.unwrap_or(0).min(count)
    };
    for _ in 0..steps {
        engine.advance();
    }
    Ok(())
}
