//! Deck, slide and reveal-unit data model.
//!
//! A [`Deck`] is authored content: it is built once (usually by the loader
//! from a deck file) and never mutated afterwards. Navigation lives entirely
//! in [`super::engine::PresentationEngine`].

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

// =============================================================================
// CONTENT
// =============================================================================

/// One piece of slide content.
///
/// The engine never looks inside a fragment; only renderers do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Text {
        text: String,
    },
    Code {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Image {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Video {
        src: String,
    },
    Link {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

const fn default_heading_level() -> u8 {
    1
}

impl Fragment {
    /// Convenience constructor for a plain text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Convenience constructor for a level-1 heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading {
            text: text.into(),
            level: 1,
        }
    }

    /// Serialized `kind` tag of this fragment.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Text { .. } => "text",
            Self::Code { .. } => "code",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Link { .. } => "link",
        }
    }

    /// Short single-line label, used by outlines and overviews.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Heading { text, .. } | Self::Text { text } => {
                text.lines().next().unwrap_or_default().trim().to_string()
            }
            Self::Code { lang, .. } => match lang {
                Some(lang) => format!("<{lang} code>"),
                None => "<code>".to_string(),
            },
            Self::Image { src, alt } => alt.clone().unwrap_or_else(|| format!("<image {src}>")),
            Self::Video { src } => format!("<video {src}>"),
            Self::Link { href, text } => text.clone().unwrap_or_else(|| href.clone()),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        match self {
            Self::Heading { level, .. } if !(1..=6).contains(level) => {
                Err(format!("heading level {level} outside 1-6"))
            }
            Self::Image { src, .. } | Self::Video { src } if src.trim().is_empty() => {
                Err(format!("{} fragment has an empty src", self.kind()))
            }
            Self::Link { href, .. } if href.trim().is_empty() => {
                Err("link fragment has an empty href".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// A fragment that becomes visible on one reveal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealUnit {
    ordinal: usize,
    content: Fragment,
}

impl RevealUnit {
    /// Position of this unit within its slide, starting at 0.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub const fn content(&self) -> &Fragment {
        &self.content
    }
}

// =============================================================================
// SLIDE
// =============================================================================

/// One screen of content.
///
/// `content` is always visible; `reveal` units appear one per step.
/// Transition and background identifiers are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    content: Vec<Fragment>,
    reveal: Vec<RevealUnit>,
    transition: Vec<String>,
    background: Option<String>,
}

impl Slide {
    /// Build a slide, assigning reveal ordinals in authoring order.
    #[must_use]
    pub fn new(content: Vec<Fragment>, reveal: Vec<Fragment>) -> Self {
        let reveal = reveal
            .into_iter()
            .enumerate()
            .map(|(ordinal, content)| RevealUnit { ordinal, content })
            .collect();
        Self {
            content,
            reveal,
            transition: Vec::new(),
            background: None,
        }
    }

    #[must_use]
    pub fn with_transition<I, S>(mut self, transition: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transition = transition.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Content shown regardless of the reveal step.
    #[must_use]
    pub fn content(&self) -> &[Fragment] {
        &self.content
    }

    #[must_use]
    pub fn reveal_units(&self) -> &[RevealUnit] {
        &self.reveal
    }

    #[must_use]
    pub fn reveal_unit_count(&self) -> usize {
        self.reveal.len()
    }

    #[must_use]
    pub fn transition(&self) -> &[String] {
        &self.transition
    }

    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Best label for this slide: the first heading, else the first text.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let all = || {
            self.content
                .iter()
                .chain(self.reveal.iter().map(RevealUnit::content))
        };
        all()
            .find(|f| matches!(f, Fragment::Heading { .. }))
            .or_else(|| all().next())
            .map(Fragment::summary)
    }

    fn validate(&self, index: usize) -> Result<()> {
        let fragments = self
            .content
            .iter()
            .chain(self.reveal.iter().map(RevealUnit::content));
        for fragment in fragments {
            fragment
                .validate()
                .map_err(|reason| DeckError::InvalidDeck(format!("slide {}: {reason}", index + 1)))?;
        }
        Ok(())
    }
}

// =============================================================================
// DECK
// =============================================================================

/// How a renderer should indicate progress through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStyle {
    #[default]
    Bar,
    Number,
    None,
}

impl ProgressStyle {
    /// Parse from a config or CLI string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "bar" => Some(Self::Bar),
            "number" | "numbers" => Some(Self::Number),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Number => "number",
            Self::None => "none",
        }
    }
}

/// Deck-level presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckMeta {
    pub title: Option<String>,
    /// Applied to slides that do not name their own transition.
    pub transition: Vec<String>,
    pub transition_duration_ms: u64,
    pub progress: ProgressStyle,
}

impl Default for DeckMeta {
    fn default() -> Self {
        Self {
            title: None,
            transition: Vec::new(),
            transition_duration_ms: 500,
            progress: ProgressStyle::Bar,
        }
    }
}

/// An ordered, non-empty, immutable sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck with default metadata.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        Self::with_meta(DeckMeta::default(), slides)
    }

    /// Build a deck, filling in the deck-level default transition on slides
    /// that have none.
    pub fn with_meta(meta: DeckMeta, mut slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for (index, slide) in slides.iter_mut().enumerate() {
            slide.validate(index)?;
            if slide.transition.is_empty() {
                slide.transition.clone_from(&meta.transition);
            }
        }
        Ok(Self { meta, slides })
    }

    #[must_use]
    pub const fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at `index`, if any.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Number of slides; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Sum of reveal units over all slides.
    #[must_use]
    pub fn total_reveal_units(&self) -> usize {
        self.slides.iter().map(Slide::reveal_unit_count).sum()
    }

    /// Number of reachable navigation states: one per slide plus one per
    /// reveal unit.
    #[must_use]
    pub fn total_states(&self) -> usize {
        self.len() + self.total_reveal_units()
    }
}
