//! Core deck types and navigation logic

pub mod deck;
pub mod engine;
pub mod visibility;

pub use deck::{Deck, DeckMeta, Fragment, ProgressStyle, RevealUnit, Slide};
pub use engine::{Command, NavigationState, PresentationEngine, VisibleContent};
