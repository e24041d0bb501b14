//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Navigation errors
//! - 2xx: Deck errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 8xx: Validation errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `OutOfRange` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Navigation errors (1xx)
    // ========================================
    /// E101: Requested slide index is outside the deck
    OutOfRange,

    // ========================================
    // Deck errors (2xx)
    // ========================================
    /// E201: Deck file could not be located
    DeckNotFound,
    /// E202: Deck contains no slides
    DeckEmpty,
    /// E203: Deck file parsed but its contents are invalid
    DeckInvalid,
    /// E204: Deck file could not be parsed
    DeckParseError,
    /// E205: Deck file extension is not a known format
    DeckUnsupportedFormat,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file or override has an invalid value
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Serialization of output failed
    SerializationError,

    // ========================================
    // Validation errors (8xx)
    // ========================================
    /// E806: Command needs an interactive terminal
    TerminalRequired,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `OutOfRange` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::OutOfRange => 101,

            Self::DeckNotFound => 201,
            Self::DeckEmpty => 202,
            Self::DeckInvalid => 203,
            Self::DeckParseError => 204,
            Self::DeckUnsupportedFormat => 205,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::SerializationError => 605,

            Self::TerminalRequired => 806,

            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::OutOfRange => "Pick a slide number between 1 and the deck length. Run `stepdeck outline <deck>` to list slides",

            Self::DeckNotFound => "Pass a path to an existing deck file, or add its directory to `decks.search_paths`",
            Self::DeckEmpty => "Add at least one [[slides]] entry to the deck file",
            Self::DeckInvalid => "Run `stepdeck validate <deck>` for details on the offending slide",
            Self::DeckParseError => "Check the deck file syntax. Every fragment needs a `kind` of heading, text, code, image, video or link",
            Self::DeckUnsupportedFormat => "Use a .toml, .yaml, .yml or .json deck file",

            Self::ConfigInvalid => "Check TOML syntax in the config file and the STEPDECK_* environment variables",
            Self::ConfigMissingRequired => "Set the required config value in stepdeck.toml or the environment",

            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::TerminalRequired => "Run `stepdeck present` from an interactive terminal, or use `stepdeck show` for non-interactive output",

            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfRange
            | Self::DeckNotFound
            | Self::DeckEmpty
            | Self::DeckInvalid
            | Self::DeckParseError
            | Self::DeckUnsupportedFormat
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::TerminalRequired
            | Self::IoError => true,

            Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "navigation",
            2 => "deck",
            3 => "config",
            6 => "storage",
            8 => "validation",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::OutOfRange,
            Self::DeckNotFound,
            Self::DeckEmpty,
            Self::DeckInvalid,
            Self::DeckParseError,
            Self::DeckUnsupportedFormat,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::SerializationError,
            Self::TerminalRequired,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
