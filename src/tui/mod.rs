//! Terminal user interface for stepdeck.
//!
//! The presenter is an input and rendering surface over
//! [`crate::core::PresentationEngine`] built on ratatui.

pub mod presenter;

pub use presenter::{Action, PresenterOptions, PresenterTui, command_for_key, run_presenter};
