//! stepdeck - Present slide decks in the terminal, one reveal at a time.

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stepdeck::Result;
use stepdeck::app::AppContext;
use stepdeck::cli::output::{emit_json, robot_error_structured};
use stepdeck::cli::{Cli, LogDestination, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code(), "command failed");
            if machine_output(&cli) {
                // Machine mode: structured JSON error on stdout
                if emit_json(&robot_error_structured(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
                let suggestion = e.to_structured().suggestion;
                if !cli.quiet && !suggestion.is_empty() {
                    eprintln!("Hint: {suggestion}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    stepdeck::cli::commands::run(&ctx, &cli.command)
}

/// Whether errors should be reported as JSON.
///
/// Only the command line is consulted: the config file may be the thing
/// that failed to load.
fn machine_output(cli: &Cli) -> bool {
    cli.requested_output_format() == Some(OutputFormat::Json)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,stepdeck=info",
        1 => "info,stepdeck=debug",
        2 => "debug,stepdeck=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let destination =
        cli.log_destination(std::io::stderr().is_terminal(), dirs::cache_dir().as_deref());
    let ansi = destination == LogDestination::Stderr;
    let writer = match destination {
        LogDestination::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogDestination::File(path) => match open_log_file(&path) {
            Some(file) => BoxMakeWriter::new(Mutex::new(file)),
            None => BoxMakeWriter::new(std::io::sink),
        },
        LogDestination::Discard => BoxMakeWriter::new(std::io::sink),
    };

    if machine_output(cli) {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_ansi(ansi).with_writer(writer))
            .init();
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
