//! stepdeck - sequential slide decks with stepwise progressive reveal.
//!
//! The navigation core lives in [`core`]: a [`core::Deck`] of slides, each
//! with always-visible content and an ordered list of reveal units, driven
//! by a [`core::PresentationEngine`]. Decks are loaded from TOML, YAML or
//! JSON by [`loader`]; [`tui`] and [`cli`] are the input and rendering
//! surfaces.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod test_utils;
pub mod tui;

pub use error::{DeckError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
