use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_PATH: &str = "tempo.toml";

/// Top-level tempo configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TempoConfig {
    /// Pattern used to print values.
    #[serde(default = "default_format")]
    pub format: String,

    /// Pattern used to read values that match no common shape.
    #[serde(default = "default_format")]
    pub input_format: String,

    /// Locale file with `[translations]` and `[presets]` tables.
    #[serde(default)]
    pub locale: Option<PathBuf>,

    /// Inline translations, merged over the locale file.
    #[serde(default)]
    pub translations: BTreeMap<String, String>,

    /// Inline preset overrides, merged over the locale file.
    #[serde(default)]
    pub presets: BTreeMap<String, String>,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            input_format: default_format(),
            locale: None,
            translations: BTreeMap::new(),
            presets: BTreeMap::new(),
        }
    }
}

fn default_format() -> String {
    tempo_now::Now::DEFAULT_FORMAT.to_string()
}

/// Loads the config at `path`, or `./tempo.toml` if it exists, or defaults.
pub fn load(path: Option<&Path>) -> Result<TempoConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_PATH).is_file() => Path::new(DEFAULT_PATH),
        None => {
            debug!("no config file, using defaults");
            return Ok(TempoConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: TempoConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
