//! Sequential presentation engine with stepwise progressive reveal.
//!
//! Navigation is a linear chain of `(slide_index, reveal_step)` states from
//! `(0, 0)` to `(last, last_slide.reveal_unit_count())`. `advance` and
//! `retreat` walk the chain one state at a time and saturate at both ends;
//! `jump_to_slide` is the only fallible operation.

use serde::Serialize;

use super::deck::{Deck, Fragment, RevealUnit, Slide};
use super::visibility::{hidden_count, visible_units};
use crate::error::{DeckError, Result};

/// Current position in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct NavigationState {
    pub slide_index: usize,
    pub reveal_step: usize,
}

impl NavigationState {
    #[must_use]
    pub const fn new(slide_index: usize, reveal_step: usize) -> Self {
        Self {
            slide_index,
            reveal_step,
        }
    }
}

impl From<(usize, usize)> for NavigationState {
    fn from((slide_index, reveal_step): (usize, usize)) -> Self {
        Self::new(slide_index, reveal_step)
    }
}

/// The three inputs an input surface may send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    JumpToSlide(usize),
}

/// What a renderer should draw for the current state.
#[derive(Debug, Clone, Serialize)]
pub struct VisibleContent<'a> {
    pub slide_index: usize,
    pub slide_count: usize,
    pub reveal_step: usize,
    pub reveal_unit_count: usize,
    /// Units still hidden on this slide.
    pub hidden: usize,
    /// Always-visible slide content.
    pub content: &'a [Fragment],
    /// Revealed prefix of the slide's reveal units.
    pub revealed: &'a [RevealUnit],
    pub transition: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<&'a str>,
}

impl VisibleContent<'_> {
    /// All visible fragments in draw order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.content
            .iter()
            .chain(self.revealed.iter().map(RevealUnit::content))
    }
}

/// Owns a [`Deck`] and the navigation state over it.
#[derive(Debug, Clone)]
pub struct PresentationEngine {
    deck: Deck,
    state: NavigationState,
    /// Ordinal of `(i, 0)` in the linear state chain, per slide.
    slide_offsets: Vec<usize>,
}

impl PresentationEngine {
    /// Start a session at `(0, 0)`.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let slide_offsets = deck
            .slides()
            .iter()
            .scan(0usize, |next, slide| {
                let offset = *next;
                *next += slide.reveal_unit_count() + 1;
                Some(offset)
            })
            .collect();
        Self {
            deck,
            state: NavigationState::default(),
            slide_offsets,
        }
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub const fn slide_index(&self) -> usize {
        self.state.slide_index
    }

    #[must_use]
    pub const fn reveal_step(&self) -> usize {
        self.state.reveal_step
    }

    /// The slide at the current index.
    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        // slide_index < deck.len() and the deck is never empty
        &self.deck.slides()[self.state.slide_index]
    }

    fn last_index(&self) -> usize {
        self.deck.len() - 1
    }

    /// Reveal the next unit, or move to the next slide fully hidden.
    ///
    /// No-op at the last state.
    pub fn advance(&mut self) {
        let before = self.state;
        if self.state.reveal_step < self.current_slide().reveal_unit_count() {
            self.state.reveal_step += 1;
        } else if self.state.slide_index < self.last_index() {
            self.state = NavigationState::new(self.state.slide_index + 1, 0);
        } else {
            tracing::trace!(?before, "advance at last state");
            return;
        }
        tracing::trace!(?before, after = ?self.state, "advance");
    }

    /// Hide the last revealed unit, or move to the previous slide fully
    /// revealed.
    ///
    /// No-op at `(0, 0)`.
    pub fn retreat(&mut self) {
        let before = self.state;
        if self.state.reveal_step > 0 {
            self.state.reveal_step -= 1;
        } else if self.state.slide_index > 0 {
            let previous = self.state.slide_index - 1;
            let count = self.deck.slides()[previous].reveal_unit_count();
            self.state = NavigationState::new(previous, count);
        } else {
            tracing::trace!("retreat at first state");
            return;
        }
        tracing::trace!(?before, after = ?self.state, "retreat");
    }

    /// Move to `(index, 0)`.
    ///
    /// # Errors
    ///
    /// [`DeckError::OutOfRange`] when `index` is not a slide of the deck; the
    /// state is left untouched.
    pub fn jump_to_slide(&mut self, index: usize) -> Result<()> {
        let len = self.deck.len();
        if index >= len {
            tracing::debug!(index, len, "jump out of range");
            return Err(DeckError::OutOfRange { index, len });
        }
        tracing::debug!(from = ?self.state, to = index, "jump to slide");
        self.state = NavigationState::new(index, 0);
        Ok(())
    }

    /// Dispatch an input command.
    ///
    /// # Errors
    ///
    /// Only [`Command::JumpToSlide`] can fail, see [`Self::jump_to_slide`].
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Advance => self.advance(),
            Command::Retreat => self.retreat(),
            Command::JumpToSlide(index) => self.jump_to_slide(index)?,
        }
        Ok(())
    }

    /// Return to `(0, 0)`.
    pub fn reset(&mut self) {
        tracing::debug!(from = ?self.state, "reset");
        self.state = NavigationState::default();
    }

    /// Content a renderer should draw right now.
    #[must_use]
    pub fn current_visible_content(&self) -> VisibleContent<'_> {
        let slide = self.current_slide();
        let step = self.state.reveal_step;
        VisibleContent {
            slide_index: self.state.slide_index,
            slide_count: self.deck.len(),
            reveal_step: step,
            reveal_unit_count: slide.reveal_unit_count(),
            hidden: hidden_count(slide, step),
            content: slide.content(),
            revealed: visible_units(slide, step),
            transition: slide.transition(),
            background: slide.background(),
        }
    }

    #[must_use]
    pub fn is_at_first_state(&self) -> bool {
        self.state == NavigationState::default()
    }

    #[must_use]
    pub fn is_at_last_state(&self) -> bool {
        self.state.slide_index == self.last_index()
            && self.state.reveal_step == self.current_slide().reveal_unit_count()
    }

    /// Number of reachable states in the chain.
    #[must_use]
    pub fn total_states(&self) -> usize {
        self.deck.total_states()
    }

    /// 0-based position of the current state in the chain.
    #[must_use]
    pub fn state_ordinal(&self) -> usize {
        self.slide_offsets[self.state.slide_index] + self.state.reveal_step
    }

    /// Fraction of the chain already walked, in `[0, 1]`.
    ///
    /// A deck with a single state reports `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let last = self.total_states() - 1;
        if last == 0 {
            return 1.0;
        }
        self.state_ordinal() as f64 / last as f64
    }
}
