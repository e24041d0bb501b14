//! Text rendering of the currently visible part of a slide.

use colored::Colorize;
use serde_json::json;

use crate::cli::output::Formattable;
use crate::core::{Fragment, PresentationEngine, ProgressStyle, VisibleContent};
use crate::error::Result;

const BAR_WIDTH: usize = 20;

/// Snapshot of one engine position, ready for printing.
#[derive(Debug, Clone)]
pub struct SlideView<'a> {
    deck_title: Option<&'a str>,
    visible: VisibleContent<'a>,
    state_ordinal: usize,
    total_states: usize,
    progress: f64,
    is_first: bool,
    is_last: bool,
    progress_style: ProgressStyle,
    show_metadata: bool,
}

impl<'a> SlideView<'a> {
    /// Capture the engine's current position.
    #[must_use]
    pub fn new(engine: &'a PresentationEngine) -> Self {
        let deck = engine.deck();
        Self {
            deck_title: deck.meta().title.as_deref(),
            visible: engine.current_visible_content(),
            state_ordinal: engine.state_ordinal(),
            total_states: engine.total_states(),
            progress: engine.progress(),
            is_first: engine.is_at_first_state(),
            is_last: engine.is_at_last_state(),
            progress_style: deck.meta().progress,
            show_metadata: false,
        }
    }

    #[must_use]
    pub const fn with_progress_style(mut self, style: ProgressStyle) -> Self {
        self.progress_style = style;
        self
    }

    /// Also print transition and background identifiers.
    #[must_use]
    pub const fn with_metadata(mut self, show: bool) -> Self {
        self.show_metadata = show;
        self
    }

    fn position(&self) -> String {
        let position = format!(
            "slide {}/{}, step {}/{}",
            self.visible.slide_index + 1,
            self.visible.slide_count,
            self.visible.reveal_step,
            self.visible.reveal_unit_count
        );
        match self.deck_title {
            Some(title) => format!("{title}: {position}"),
            None => position,
        }
    }

    fn render(&self, styled: bool) -> String {
        let header = self.position();
        let mut lines = vec![
            if styled {
                header.bold().to_string()
            } else {
                header
            },
            String::new(),
        ];

        for (i, fragment) in self.visible.fragments().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(fragment_lines(fragment, styled));
        }

        if self.visible.hidden > 0 {
            let pending = format!("({} more to reveal)", self.visible.hidden);
            lines.push(String::new());
            lines.push(if styled {
                pending.dimmed().to_string()
            } else {
                pending
            });
        }

        if self.show_metadata {
            let mut meta = Vec::new();
            if !self.visible.transition.is_empty() {
                meta.push(format!("transition: {}", self.visible.transition.join(", ")));
            }
            if let Some(background) = self.visible.background {
                meta.push(format!("background: {background}"));
            }
            if !meta.is_empty() {
                lines.push(String::new());
                lines.extend(meta);
            }
        }

        let footer = match self.progress_style {
            ProgressStyle::Bar => Some(text_bar(self.progress, BAR_WIDTH)),
            ProgressStyle::Number => Some(format!("{}/{}", self.state_ordinal + 1, self.total_states)),
            ProgressStyle::None => None,
        };
        if let Some(footer) = footer {
            lines.push(String::new());
            lines.push(if styled {
                footer.cyan().to_string()
            } else {
                footer
            });
        }

        lines.join("\n")
    }
}

impl Formattable for SlideView<'_> {
    fn format_human(&self) -> String {
        self.render(true)
    }

    fn format_plain(&self) -> String {
        self.render(false)
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(json!({
            "deck": self.deck_title,
            "position": {
                "slide": self.visible.slide_index + 1,
                "step": self.visible.reveal_step,
            },
            "state_ordinal": self.state_ordinal,
            "total_states": self.total_states,
            "progress": self.progress,
            "is_first": self.is_first,
            "is_last": self.is_last,
            "visible": serde_json::to_value(&self.visible)?,
        }))
    }
}

/// Text lines for one fragment.
///
/// Headings use markdown-style `#` prefixes in plain mode and bold in
/// styled mode; media fragments render as bracketed references.
#[must_use]
pub fn fragment_lines(fragment: &Fragment, styled: bool) -> Vec<String> {
    match fragment {
        Fragment::Heading { text, level } => {
            if styled {
                vec![text.bold().to_string()]
            } else {
                vec![format!("{} {text}", "#".repeat(usize::from(*level)))]
            }
        }
        Fragment::Text { text } => text.lines().map(str::to_string).collect(),
        Fragment::Code { source, lang } => {
            let mut lines = vec![format!("```{}", lang.as_deref().unwrap_or_default())];
            lines.extend(source.lines().map(|line| {
                if styled {
                    line.yellow().to_string()
                } else {
                    line.to_string()
                }
            }));
            lines.push("```".to_string());
            lines
        }
        Fragment::Image { src, alt } => vec![match alt {
            Some(alt) => format!("[image: {alt}] {src}"),
            None => format!("[image] {src}"),
        }],
        Fragment::Video { src } => vec![format!("[video] {src}")],
        Fragment::Link { href, text } => {
            let href = if styled {
                href.underline().to_string()
            } else {
                href.clone()
            };
            vec![match text {
                Some(text) => format!("{text} <{href}>"),
                None => format!("<{href}>"),
            }]
        }
    }
}

/// Fixed-width ASCII progress bar with a percentage, e.g. `[#####-----]  50%`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn text_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        (progress * 100.0).round() as u32
    )
}
