//! Deck file loading.
//!
//! Decks are authored as TOML, YAML or JSON; the format is picked from the
//! file extension. All three share one schema:
//!
//! ```toml
//! title = "Testing the front-end"
//! transition = ["zoom", "slide"]
//! progress = "bar"
//!
//! [[slides]]
//! background = "primary"
//! content = [{ kind = "heading", text = "Why test?" }]
//! reveal = [{ kind = "text", text = "When doing refactoring" }]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::core::deck::{Deck, DeckMeta, Fragment, ProgressStyle, Slide};
use crate::error::{DeckError, Result};

/// Supported deck file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Toml,
    Yaml,
    Json,
}

impl DeckFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(DeckError::UnsupportedFormat(format!(
                "{} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    title: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    transition: Vec<String>,
    transition_duration_ms: Option<u64>,
    progress: Option<ProgressStyle>,
    #[serde(default)]
    slides: Vec<SlideFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SlideFile {
    #[serde(default)]
    content: Vec<Fragment>,
    #[serde(default)]
    reveal: Vec<Fragment>,
    #[serde(default, deserialize_with = "string_or_list")]
    transition: Vec<String>,
    background: Option<String>,
}

/// Accepts `transition = "slide"` as well as `transition = ["zoom", "slide"]`.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl DeckFile {
    fn into_deck(self) -> Result<Deck> {
        let defaults = DeckMeta::default();
        let meta = DeckMeta {
            title: self.title,
            transition: self.transition,
            transition_duration_ms: self
                .transition_duration_ms
                .unwrap_or(defaults.transition_duration_ms),
            progress: self.progress.unwrap_or(defaults.progress),
        };
        let slides = self
            .slides
            .into_iter()
            .map(|raw| {
                let mut slide = Slide::new(raw.content, raw.reveal);
                if !raw.transition.is_empty() {
                    slide = slide.with_transition(raw.transition);
                }
                if let Some(background) = raw.background {
                    slide = slide.with_background(background);
                }
                slide
            })
            .collect();
        Deck::with_meta(meta, slides)
    }
}

/// Parse deck source text in the given format.
pub fn parse_deck(raw: &str, format: DeckFormat) -> Result<Deck> {
    let file: DeckFile = match format {
        DeckFormat::Toml => toml::from_str(raw).map_err(|err| DeckError::Parse(err.to_string()))?,
        DeckFormat::Yaml => {
            serde_yaml::from_str(raw).map_err(|err| DeckError::Parse(err.to_string()))?
        }
        DeckFormat::Json => {
            serde_json::from_str(raw).map_err(|err| DeckError::Parse(err.to_string()))?
        }
    };
    file.into_deck()
}

/// Read and parse a deck file.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let format = DeckFormat::from_path(path)?;
    let raw = std::fs::read_to_string(path)?;
    let deck = parse_deck(&raw, format).map_err(|err| match err {
        DeckError::Parse(message) => DeckError::Parse(format!("{}: {message}", path.display())),
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        format = format.name(),
        slides = deck.len(),
        reveal_units = deck.total_reveal_units(),
        "loaded deck"
    );
    Ok(deck)
}

/// Locate a deck from a CLI argument.
///
/// An existing path wins; otherwise each search path is tried with the
/// name as given and with `default_extension` appended. Relative paths are
/// taken from `base`.
pub fn resolve_deck_path(
    input: &str,
    base: &Path,
    search_paths: &[String],
    default_extension: &str,
) -> Result<PathBuf> {
    let direct = base.join(expand_path(input));
    if direct.is_file() {
        return Ok(direct);
    }

    let with_ext = format!("{input}.{}", default_extension.trim_start_matches('.'));
    for root in search_paths.iter().map(|p| base.join(expand_path(p))) {
        for candidate in [root.join(input), root.join(&with_ext)] {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "resolved deck");
                return Ok(candidate);
            }
        }
    }

    Err(DeckError::DeckNotFound(input.to_string()))
}

fn expand_path(input: &str) -> PathBuf {
    if let Some(stripped) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(input)
}
