//! Named format presets (`L`, `LL`, ...).

use crate::translate::Translate;

/// The pattern used when no format is given.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// Built-in English preset patterns.
pub const PRESETS: [(&str, &str); 6] = [
    ("L", "DD/MM/YYYY"),
    ("LL", "MMMM DD, YYYY"),
    ("LLL", "MMMM DD, YYYY HH:mm"),
    ("LLLL", "dddd, MMMM DD, YYYY HH:mm"),
    ("LT", "HH:mm"),
    ("LTS", "HH:mm:ss"),
];

/// Returns `true` if `key` names a preset.
pub fn is_preset(key: &str) -> bool {
    builtin_preset(key).is_some()
}

/// Returns the built-in English pattern for a preset key.
pub fn builtin_preset(key: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, pattern)| *pattern)
}

/// Expands `pattern` if it names a preset, otherwise returns it unchanged.
///
/// The locale's override wins over the built-in pattern.
pub fn expand_preset<'a, T: Translate + ?Sized>(pattern: &'a str, locale: &'a T) -> &'a str {
    if let Some(pattern) = locale.preset(pattern) {
        return pattern;
    }
    builtin_preset(pattern).unwrap_or(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{English, Locale};

    #[test]
    fn builtin_patterns() {
        assert_eq!(builtin_preset("L"), Some("DD/MM/YYYY"));
        assert_eq!(builtin_preset("LL"), Some("MMMM DD, YYYY"));
        assert_eq!(builtin_preset("LLL"), Some("MMMM DD, YYYY HH:mm"));
        assert_eq!(builtin_preset("LLLL"), Some("dddd, MMMM DD, YYYY HH:mm"));
        assert_eq!(builtin_preset("LT"), Some("HH:mm"));
        assert_eq!(builtin_preset("LTS"), Some("HH:mm:ss"));
        assert_eq!(builtin_preset("l"), None);
    }

    #[test]
    fn expand_non_preset_is_identity() {
        assert_eq!(expand_preset("YYYY", &English), "YYYY");
        assert_eq!(expand_preset(DEFAULT_FORMAT, &English), DEFAULT_FORMAT);
    }

    #[test]
    fn expand_uses_locale_override() {
        let locale = Locale::new().with_preset("L", "DD.MM.YYYY").unwrap();
        assert_eq!(expand_preset("L", &locale), "DD.MM.YYYY");
        assert_eq!(expand_preset("LL", &locale), "MMMM DD, YYYY");
    }
}
