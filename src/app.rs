//! Application context shared by all commands.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::core::{Deck, PresentationEngine};
use crate::error::Result;
use crate::loader;

/// Resolved per-invocation state: layered config plus output settings.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    /// JSON output on stdout; shorthand for `output_format == Json`.
    pub robot_mode: bool,
    /// Base for relative deck paths and search paths.
    pub project_root: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Self::with_config(cli, config, project_root)
    }

    /// Build a context around an already-loaded config.
    pub fn with_config(cli: &Cli, config: Config, project_root: PathBuf) -> Result<Self> {
        let output_format = match cli.requested_output_format() {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.format)?,
        };
        if !output_format.use_colors() {
            colored::control::set_override(false);
        }
        tracing::debug!(?output_format, root = %project_root.display(), "app context ready");

        Ok(Self {
            config,
            output_format,
            robot_mode: output_format.is_machine_readable(),
            project_root,
        })
    }

    /// Resolve a deck argument against the configured search paths and load it.
    pub fn load_deck(&self, input: &str) -> Result<(PathBuf, Deck)> {
        let path = loader::resolve_deck_path(
            input,
            &self.project_root,
            &self.config.decks.search_paths,
            &self.config.decks.default_extension,
        )?;
        let deck = loader::load_deck(&path)?;
        Ok((path, deck))
    }

    /// Load a deck and start a session on it.
    pub fn open_engine(&self, input: &str) -> Result<(PathBuf, PresentationEngine)> {
        let (path, deck) = self.load_deck(input)?;
        Ok((path, PresentationEngine::new(deck)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{DeckFixture, SAMPLE_DECK_TOML};
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_format_overrides_config() {
        let mut config = Config::default();
        config.output.format = "json".to_string();

        let ctx = AppContext::with_config(
            &cli(&["stepdeck", "--plain", "validate", "d.toml"]),
            config.clone(),
            PathBuf::from("."),
        )
        .unwrap();
        assert_eq!(ctx.output_format, OutputFormat::Plain);
        assert!(!ctx.robot_mode);

        let ctx = AppContext::with_config(
            &cli(&["stepdeck", "validate", "d.toml"]),
            config,
            PathBuf::from("."),
        )
        .unwrap();
        assert_eq!(ctx.output_format, OutputFormat::Json);
        assert!(ctx.robot_mode);
    }

    #[test]
    fn decks_resolve_from_project_root() {
        let fixture = DeckFixture::new();
        fixture.write("talks/intro.toml", SAMPLE_DECK_TOML);
        let mut config = Config::default();
        config.decks.search_paths = vec!["talks".to_string()];

        let ctx = AppContext::with_config(
            &cli(&["stepdeck", "show", "intro"]),
            config,
            fixture.root.clone(),
        )
        .unwrap();
        let (path, deck) = ctx.load_deck("intro").unwrap();
        assert_eq!(path, fixture.root.join("talks").join("intro.toml"));
        assert_eq!(deck.len(), 3);
    }
}
