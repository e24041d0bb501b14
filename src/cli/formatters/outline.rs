//! Slide-by-slide outline of a deck.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::output::Formattable;
use crate::core::Deck;
use crate::error::Result;

const UNTITLED: &str = "(untitled)";

#[derive(Debug, Clone, Serialize)]
pub struct OutlineEntry {
    /// 1-based slide number.
    pub number: usize,
    pub title: Option<String>,
    pub reveal_units: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transition: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeckOutline {
    pub path: String,
    pub title: Option<String>,
    pub total_states: usize,
    pub slides: Vec<OutlineEntry>,
}

impl DeckOutline {
    #[must_use]
    pub fn new(path: &Path, deck: &Deck) -> Self {
        let slides = deck
            .slides()
            .iter()
            .enumerate()
            .map(|(i, slide)| OutlineEntry {
                number: i + 1,
                title: slide.title(),
                reveal_units: slide.reveal_unit_count(),
                transition: slide.transition().to_vec(),
                background: slide.background().map(str::to_string),
            })
            .collect();
        Self {
            path: path.display().to_string(),
            title: deck.meta().title.clone(),
            total_states: deck.total_states(),
            slides,
        }
    }

    fn entry_line(entry: &OutlineEntry, styled: bool) -> String {
        let title = entry.title.as_deref().unwrap_or(UNTITLED);
        let reveal = match entry.reveal_units {
            0 => String::new(),
            1 => " (+1 step)".to_string(),
            n => format!(" (+{n} steps)"),
        };
        if styled {
            format!(
                "{} {}{}",
                format!("{:>3}.", entry.number).dimmed(),
                title,
                reveal.cyan()
            )
        } else {
            format!("{:>3}. {title}{reveal}", entry.number)
        }
    }
}

impl Formattable for DeckOutline {
    fn format_human(&self) -> String {
        let heading = self.title.as_deref().unwrap_or(&self.path);
        let mut lines = vec![heading.bold().to_string(), String::new()];
        lines.extend(self.slides.iter().map(|e| Self::entry_line(e, true)));
        lines.push(String::new());
        lines.push(
            format!("{} slides, {} states", self.slides.len(), self.total_states)
                .dimmed()
                .to_string(),
        );
        lines.join("\n")
    }

    fn format_plain(&self) -> String {
        self.slides
            .iter()
            .map(|e| Self::entry_line(e, false))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
