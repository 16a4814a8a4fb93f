//! Conversions from CLI strings and TOML config into tempo-now types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tempo_locale::Locale;
use tempo_now::{Now, Scope};

use crate::cli::Patterns;
use crate::config::{self, TempoConfig};

/// Where `walk` moves a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Next,
    Prev,
    First,
    Last,
}

/// Parses a walk action name.
pub fn parse_walk(s: &str) -> Result<Walk> {
    match s.to_lowercase().as_str() {
        "next" => Ok(Walk::Next),
        "prev" | "previous" => Ok(Walk::Prev),
        "first" => Ok(Walk::First),
        "last" => Ok(Walk::Last),
        other => bail!("unknown walk action: {other:?}"),
    }
}

/// Parses a scope name, singular or plural.
pub fn parse_scope(s: &str) -> Result<Scope> {
    s.parse::<Scope>().context("unknown scope")
}

/// Builds the locale from the optional locale file plus inline tables.
pub fn build_locale(config: &TempoConfig) -> Result<Locale> {
    let base = match &config.locale {
        Some(path) => Locale::from_path(path)
            .with_context(|| format!("failed to load locale: {}", path.display()))?,
        None => Locale::new(),
    };
    let mut inline = Locale::new();
    for (key, text) in &config.translations {
        inline = inline.with_translation(key, text);
    }
    for (key, pattern) in &config.presets {
        inline = inline
            .with_preset(key, pattern)
            .context("invalid [presets] entry")?;
    }
    Ok(base.merge(inline))
}

/// Loaded configuration plus the locale built from it.
pub struct Session {
    pub config: TempoConfig,
    pub locale: Locale,
}

impl Session {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = config::load(path)?;
        let locale = build_locale(&config)?;
        Ok(Self { config, locale })
    }

    /// Parses `text`, falling back to the current time when absent.
    ///
    /// Common shapes are tried first, then the input pattern with translated
    /// names. Text that fits neither is an error.
    pub fn value(&self, text: Option<&str>, patterns: &Patterns) -> Result<Now> {
        let Some(text) = text else {
            return Ok(Now::now());
        };
        let format = patterns
            .input_format
            .as_deref()
            .unwrap_or(&self.config.input_format);
        let value = Now::parse(text, format);
        let value = if value.is_valid() {
            value
        } else {
            Now::parse_format_with(text, format, &self.locale)
        };
        if !value.is_valid() {
            bail!("cannot parse {text:?} with format {format:?}");
        }
        Ok(value)
    }

    /// Formats `value` with the output pattern and locale.
    pub fn render(&self, value: &Now, patterns: &Patterns) -> String {
        let format = patterns.format.as_deref().unwrap_or(&self.config.format);
        value.format_with(format, &self.locale)
    }
}
