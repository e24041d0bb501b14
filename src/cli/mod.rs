//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// stepdeck - Present slide decks with stepwise progressive reveal
#[derive(Parser, Debug)]
#[command(name = "stepdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/stepdeck/config.toml and ./stepdeck.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format requested on the command line, if any.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    #[must_use]
    pub const fn requested_output_format(&self) -> Option<OutputFormat> {
        if self.plain {
            return Some(OutputFormat::Plain);
        }
        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }
        if self.machine {
            return Some(OutputFormat::Json);
        }
        None
    }
}

/// Log file written while the presenter owns the terminal, under the user
/// cache directory.
pub const PRESENTER_LOG_FILE: &str = "stepdeck/presenter.log";

/// Where tracing output goes for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    File(PathBuf),
    Discard,
}

impl Cli {
    /// Pick the log sink. `present` draws on the terminal in raw mode, so
    /// its logs must not reach a terminal stderr.
    #[must_use]
    pub fn log_destination(
        &self,
        stderr_is_terminal: bool,
        cache_dir: Option<&Path>,
    ) -> LogDestination {
        if !stderr_is_terminal || !matches!(self.command, Commands::Present(_)) {
            return LogDestination::Stderr;
        }
        cache_dir.map_or(LogDestination::Discard, |dir| {
            LogDestination::File(dir.join(PRESENTER_LOG_FILE))
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Present a deck interactively in the terminal
    Present(commands::present::PresentArgs),

    /// Print what is visible at one position of a deck
    Show(commands::show::ShowArgs),

    /// List the slides of a deck
    Outline(commands::outline::OutlineArgs),

    /// Check that a deck file loads
    Validate(commands::validate::ValidateArgs),
}
