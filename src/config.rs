use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::deck::ProgressStyle;
use crate::error::{DeckError, Result};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "stepdeck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub decks: DecksConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load config from defaults, the global and project files (or an
    /// explicit file), then `STEPDECK_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let global = dirs::config_dir().map(|dir| dir.join("stepdeck/config.toml"));
        Self::load_from(explicit_path, global.as_deref(), project_root, |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`Config::load`] with the global path and environment
    /// injected.
    pub fn load_from<F>(
        explicit_path: Option<&Path>,
        global_path: Option<&Path>,
        project_root: &Path,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env("STEPDECK_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                DeckError::Config(format!("config file {} does not exist", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = global_path {
                if let Some(patch) = Self::load_patch(global)? {
                    config.merge_patch(patch);
                }
            }
            if let Some(patch) = Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides(&env)?;
        config.validate()?;

        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| DeckError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| DeckError::Config(format!("parse config {}: {err}", path.display())))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.presenter {
            self.presenter.merge(patch);
        }
        if let Some(patch) = patch.decks {
            self.decks.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_u64(env, "STEPDECK_TICK_MS")? {
            self.presenter.tick_ms = value;
        }
        if let Some(value) = env_bool(env, "STEPDECK_SHOW_PROGRESS")? {
            self.presenter.show_progress = value;
        }
        if let Some(value) = env("STEPDECK_PROGRESS_STYLE") {
            self.presenter.progress_style = Some(parse_progress_style(&value)?);
        }
        if let Some(value) = env_bool(env, "STEPDECK_SHOW_METADATA")? {
            self.presenter.show_metadata = value;
        }
        if let Some(value) = env_usize(env, "STEPDECK_START_SLIDE")? {
            self.presenter.start_slide = value;
        }

        if let Some(values) = env_list(env, "STEPDECK_DECK_PATHS") {
            self.decks.search_paths = merge_unique(values, &self.decks.search_paths);
        }

        if let Some(value) = env("STEPDECK_OUTPUT_FORMAT") {
            self.output.format = value;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.presenter.tick_ms == 0 {
            return Err(DeckError::Config(
                "presenter.tick_ms must be greater than 0".to_string(),
            ));
        }
        if self.presenter.start_slide == 0 {
            return Err(DeckError::Config(
                "presenter.start_slide is 1-based and must be at least 1".to_string(),
            ));
        }
        if !matches!(self.output.format.as_str(), "human" | "json" | "plain") {
            return Err(DeckError::Config(format!(
                "invalid output.format {} (expected human|json|plain)",
                self.output.format
            )));
        }
        if self.decks.default_extension.trim_start_matches('.').is_empty() {
            return Err(DeckError::MissingConfig("decks.default_extension".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
    pub show_progress: bool,
    /// Overrides the deck's own progress style when set.
    pub progress_style: Option<ProgressStyle>,
    pub show_metadata: bool,
    /// 1-based slide to open at.
    pub start_slide: usize,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            show_progress: true,
            progress_style: None,
            show_metadata: false,
            start_slide: 1,
        }
    }
}

impl PresenterConfig {
    fn merge(&mut self, patch: PresenterPatch) {
        if let Some(value) = patch.tick_ms {
            self.tick_ms = value;
        }
        if let Some(value) = patch.show_progress {
            self.show_progress = value;
        }
        if let Some(value) = patch.progress_style {
            self.progress_style = Some(value);
        }
        if let Some(value) = patch.show_metadata {
            self.show_metadata = value;
        }
        if let Some(value) = patch.start_slide {
            self.start_slide = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecksConfig {
    pub search_paths: Vec<String>,
    pub default_extension: String,
}

impl Default for DecksConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![".".to_string()],
            default_extension: "toml".to_string(),
        }
    }
}

impl DecksConfig {
    fn merge(&mut self, patch: DecksPatch) {
        if let Some(values) = patch.search_paths {
            self.search_paths = merge_unique(values, &self.search_paths);
        }
        if let Some(value) = patch.default_extension {
            self.default_extension = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub presenter: Option<PresenterPatch>,
    pub decks: Option<DecksPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PresenterPatch {
    pub tick_ms: Option<u64>,
    pub show_progress: Option<bool>,
    pub progress_style: Option<ProgressStyle>,
    pub show_metadata: Option<bool>,
    pub start_slide: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DecksPatch {
    pub search_paths: Option<Vec<String>>,
    pub default_extension: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values.into_iter().chain(existing.iter().cloned()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn parse_progress_style(value: &str) -> Result<ProgressStyle> {
    ProgressStyle::parse(value).ok_or_else(|| {
        DeckError::Config(format!(
            "invalid progress style {value} (expected bar|number|none)"
        ))
    })
}

fn env_bool<F>(env: &F, key: &str) -> Result<Option<bool>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = env(key) else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(DeckError::Config(format!(
            "invalid {key} value {value} (expected true|false|1|0|yes|no|on|off)"
        ))),
    }
}

fn env_u64<F>(env: &F, key: &str) -> Result<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| DeckError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}

fn env_usize<F>(env: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match env(key) {
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| DeckError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}

fn env_list<F>(env: &F, key: &str) -> Option<Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
