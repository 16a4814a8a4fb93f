//! The translation capability and its two implementations.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::LocaleError;
use crate::presets::is_preset;

/// Resolves English labels and format-preset keys to localized text.
///
/// Implementors only provide [`lookup`](Translate::lookup); the fallback
/// behaviour of [`trans`](Translate::trans) is shared.
pub trait Translate {
    /// Returns the translation for `key`, or `None` if there is none.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Returns the pattern override for a preset key such as `"LL"`.
    fn preset(&self, _key: &str) -> Option<&str> {
        None
    }

    /// Returns the translation for `key`, falling back to `key` itself.
    fn trans<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}

/// The identity translator: every key translates to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl Translate for English {
    fn lookup(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// A table-driven locale.
///
/// Deserializes from a TOML document with two optional tables:
///
/// ```toml
/// [translations]
/// Monday = "Montag"
///
/// [presets]
/// L = "DD.MM.YYYY"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
    /// English label -> localized text.
    #[serde(default)]
    translations: BTreeMap<String, String>,

    /// Preset key -> format pattern.
    #[serde(default)]
    presets: BTreeMap<String, String>,
}

impl Locale {
    /// Creates an empty locale, which behaves like [`English`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation.
    pub fn with_translation(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(key.into(), text.into());
        self
    }

    /// Overrides a format preset.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownPreset`] if `key` is not a preset name.
    pub fn with_preset(
        mut self,
        key: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self, LocaleError> {
        let key = key.into();
        if !is_preset(&key) {
            return Err(LocaleError::UnknownPreset { key });
        }
        self.presets.insert(key, pattern.into());
        Ok(self)
    }

    /// Parses a locale from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] on malformed TOML or unknown tables, and
    /// [`LocaleError::UnknownPreset`] if `[presets]` names a non-preset key.
    pub fn from_toml_str(s: &str) -> Result<Self, LocaleError> {
        let locale: Self = toml::from_str(s).map_err(|e| LocaleError::Parse {
            reason: e.message().to_string(),
        })?;
        locale.validate()?;
        debug!(
            n_translations = locale.translations.len(),
            n_presets = locale.presets.len(),
            "locale parsed"
        );
        Ok(locale)
    }

    /// Reads and parses a locale file.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Read`] if the file cannot be read, otherwise
    /// the errors of [`Locale::from_toml_str`].
    pub fn from_path(path: &Path) -> Result<Self, LocaleError> {
        let text = std::fs::read_to_string(path).map_err(|e| LocaleError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Merges `other` over `self`; entries in `other` win.
    pub fn merge(mut self, other: Locale) -> Self {
        self.translations.extend(other.translations);
        self.presets.extend(other.presets);
        self
    }

    /// Returns the number of entries across both tables.
    pub fn len(&self) -> usize {
        self.translations.len() + self.presets.len()
    }

    /// Returns `true` if the locale has no translations and no presets.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.presets.is_empty()
    }

    fn validate(&self) -> Result<(), LocaleError> {
        match self.presets.keys().find(|key| !is_preset(key)) {
            Some(key) => Err(LocaleError::UnknownPreset { key: key.clone() }),
            None => Ok(()),
        }
    }
}

impl Translate for Locale {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    fn preset(&self, key: &str) -> Option<&str> {
        self.presets.get(key).map(String::as_str)
    }
}
