//! Output formatters for CLI commands
//!
//! Each formatter renders to every [`crate::cli::OutputFormat`] through
//! [`crate::cli::output::Formattable`].

mod outline;
mod report;
mod slide;

pub use outline::{DeckOutline, OutlineEntry};
pub use report::ValidationReport;
pub use slide::{SlideView, fragment_lines, text_bar};
