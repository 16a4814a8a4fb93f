//! Error types for the tempo-locale crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the tempo-locale crate.
///
/// Lookups never fail (a missing key falls back to the key itself), so the
/// only failures are in loading a locale document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocaleError {
    /// Returned when a locale file cannot be read from disk.
    #[error("failed to read locale file {}: {reason}", path.display())]
    Read {
        /// Path of the locale file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a locale document is not valid TOML or has unknown keys.
    #[error("invalid locale document: {reason}")]
    Parse {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when a preset override names a key that is not a preset.
    #[error("unknown format preset: {key:?}")]
    UnknownPreset {
        /// The offending preset key.
        key: String,
    },
}
