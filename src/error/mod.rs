//! Error handling for stepdeck.
//!
//! This module provides:
//! - [`DeckError`]: The main error enum for all stepdeck operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for stepdeck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Slide index {index} out of range (deck has {len} slides)")]
    OutOfRange { index: usize, len: usize },

    #[error("Deck has no slides")]
    EmptyDeck,

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Unsupported deck format: {0}")]
    UnsupportedFormat(String),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Interactive terminal required: {0}")]
    TerminalRequired(String),
}

impl DeckError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
            Self::EmptyDeck => ErrorCode::DeckEmpty,
            Self::InvalidDeck(_) => ErrorCode::DeckInvalid,
            Self::UnsupportedFormat(_) => ErrorCode::DeckUnsupportedFormat,
            Self::DeckNotFound(_) => ErrorCode::DeckNotFound,
            Self::Io(_) => ErrorCode::IoError,
            Self::Parse(_) => ErrorCode::DeckParseError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::TerminalRequired(_) => ErrorCode::TerminalRequired,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::OutOfRange { index, len } => {
                Some(serde_json::json!({ "index": index, "len": len }))
            }
            Self::DeckNotFound(name) => Some(serde_json::json!({ "deck": name })),
            Self::InvalidDeck(reason) => Some(serde_json::json!({ "reason": reason })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_deck_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted on stdout in machine output mode so scripts can branch on
/// `code` instead of parsing messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "OUT_OF_RANGE")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "deck", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`DeckError`].
    #[must_use]
    pub fn from_deck_error(err: &DeckError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&DeckError> for StructuredError {
    fn from(err: &DeckError) -> Self {
        Self::from_deck_error(err)
    }
}

/// Result type alias using [`DeckError`].
pub type Result<T> = std::result::Result<T, DeckError>;
