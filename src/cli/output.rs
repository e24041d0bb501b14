use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::{DeckError, ErrorCode, Result};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Parse the `output.format` config value.
    pub fn from_config(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "plain" => Ok(Self::Plain),
            other => Err(DeckError::Config(format!(
                "invalid output format {other} (expected human|json|plain)"
            ))),
        }
    }

    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    #[serde(rename = "error")]
    StructuredError {
        /// Error code enum value (e.g., "OUT_OF_RANGE")
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

/// Create a robot error response with codes, suggestions and context.
pub fn robot_error_structured(err: &DeckError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::from(err),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

impl From<&DeckError> for RobotStatus {
    fn from(err: &DeckError) -> Self {
        let structured = err.to_structured();
        Self::StructuredError {
            code: structured.code,
            numeric_code: structured.numeric_code,
            message: structured.message,
            suggestion: structured.suggestion,
            context: structured.context,
            recoverable: structured.recoverable,
            category: structured.category,
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    styled: bool,
}

impl HumanLayout {
    #[must_use]
    pub const fn new(styled: bool) -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
            styled,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = if self.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let width = self.key_width;
        let line = if self.styled {
            // pad before styling so escape codes do not eat the width
            format!("{} {value}", format!("{key:width$}").dimmed())
        } else {
            format!("{key:width$} {value}")
        };
        self.lines.push(line);
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for types that can render themselves in every output format.
pub trait Formattable {
    fn format_human(&self) -> String;

    fn format_plain(&self) -> String;

    /// Payload placed under `data` in the JSON envelope.
    fn to_json(&self) -> Result<serde_json::Value>;
}

/// Emit a formattable value to stdout.
pub fn emit<T: Formattable>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", value.format_human()),
        OutputFormat::Plain => println!("{}", value.format_plain()),
        OutputFormat::Json => emit_json(&robot_ok(value.to_json()?))?,
    }
    Ok(())
}
