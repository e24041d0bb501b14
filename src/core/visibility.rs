//! Prefix-visibility rule for progressive reveal.

use super::deck::{RevealUnit, Slide};

/// Reveal units visible on `slide` at `step`: the first `step` units.
///
/// Steps past the end saturate to the full sequence.
#[must_use]
pub fn visible_units(slide: &Slide, step: usize) -> &[RevealUnit] {
    let units = slide.reveal_units();
    &units[..step.min(units.len())]
}

/// Reveal units still hidden on `slide` at `step`.
#[must_use]
pub fn hidden_count(slide: &Slide, step: usize) -> usize {
    slide.reveal_unit_count().saturating_sub(step)
}
