//! Result of loading a deck for validation.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::cli::output::{Formattable, HumanLayout};
use crate::core::Deck;
use crate::error::Result;
use crate::loader::DeckFormat;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub path: String,
    pub format: &'static str,
    pub title: Option<String>,
    pub slides: usize,
    pub reveal_units: usize,
    pub total_states: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn new(path: &Path, format: DeckFormat, deck: &Deck) -> Self {
        let warnings = deck
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.content().is_empty() && slide.reveal_unit_count() == 0)
            .map(|(i, _)| format!("slide {} has no content", i + 1))
            .collect();
        Self {
            path: path.display().to_string(),
            format: format.name(),
            title: deck.meta().title.clone(),
            slides: deck.len(),
            reveal_units: deck.total_reveal_units(),
            total_states: deck.total_states(),
            warnings,
        }
    }

    fn counts(&self) -> String {
        format!(
            "{} slides, {} reveal units, {} states",
            self.slides, self.reveal_units, self.total_states
        )
    }
}

impl Formattable for ValidationReport {
    fn format_human(&self) -> String {
        let mut layout = HumanLayout::new(true);
        layout.title(&format!("{} {}", "✓".green().bold(), self.path));
        if let Some(title) = &self.title {
            layout.kv("Title", title);
        }
        layout
            .kv("Format", self.format)
            .kv("Slides", &self.slides.to_string())
            .kv("Reveal units", &self.reveal_units.to_string())
            .kv("States", &self.total_states.to_string());
        for warning in &self.warnings {
            layout.push_line(format!("{} {warning}", "warning:".yellow()));
        }
        layout.build()
    }

    fn format_plain(&self) -> String {
        let mut lines = vec![format!("ok {}: {}", self.path, self.counts())];
        lines.extend(self.warnings.iter().map(|w| format!("warning: {w}")));
        lines.join("\n")
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fragment, Slide};

    #[test]
    fn plain_report_summarizes_counts_and_warnings() {
        let deck = Deck::new(vec![
            Slide::new(vec![Fragment::heading("Hi")], vec![Fragment::text("a")]),
            Slide::new(Vec::new(), Vec::new()),
        ])
        .unwrap();
        let report = ValidationReport::new(Path::new("talk.yaml"), DeckFormat::Yaml, &deck);
        assert_eq!(
            report.format_plain(),
            "ok talk.yaml: 2 slides, 1 reveal units, 4 states\nwarning: slide 2 has no content"
        );
        assert_eq!(report.to_json().unwrap()["format"], "yaml");
    }
}
