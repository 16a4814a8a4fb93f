//! English day and month name tables.
//!
//! The English names double as translation keys: a [`Translate`] impl maps
//! `"Monday"` to its localized text.
//!
//! [`Translate`]: crate::Translate

use crate::translate::Translate;

/// Weekday names, Sunday first (index 0 = Sunday, 6 = Saturday).
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month names, January first (index 0 = January, 11 = December).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the localized weekday name for a 0-based index (0 = Sunday).
///
/// Returns `None` if `index` is outside `0..7`.
pub fn day_name<T: Translate + ?Sized>(index: usize, locale: &T) -> Option<&str> {
    DAY_NAMES.get(index).map(|name| locale.trans(name))
}

/// Returns the localized month name for a 0-based index (0 = January).
///
/// Returns `None` if `index` is outside `0..12`.
pub fn month_name<T: Translate + ?Sized>(index: usize, locale: &T) -> Option<&str> {
    MONTH_NAMES.get(index).map(|name| locale.trans(name))
}

/// Truncates `name` to at most `len` characters.
///
/// Counts `char`s, so multi-byte names are never split mid-character.
pub fn truncate(name: &str, len: Option<usize>) -> String {
    match len {
        Some(len) => name.chars().take(len).collect(),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::English;

    #[test]
    fn day_name_in_range() {
        assert_eq!(day_name(0, &English), Some("Sunday"));
        assert_eq!(day_name(6, &English), Some("Saturday"));
    }

    #[test]
    fn day_name_out_of_range() {
        assert_eq!(day_name(7, &English), None);
    }

    #[test]
    fn month_name_in_range() {
        assert_eq!(month_name(0, &English), Some("January"));
        assert_eq!(month_name(11, &English), Some("December"));
    }

    #[test]
    fn month_name_out_of_range() {
        assert_eq!(month_name(12, &English), None);
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate("Wednesday", Some(3)), "Wed");
        assert_eq!(truncate("Wednesday", Some(2)), "We");
        assert_eq!(truncate("May", Some(10)), "May");
        assert_eq!(truncate("May", None), "May");
    }

    #[test]
    fn truncate_multibyte() {
        // "März" has a 2-byte 'ä'; byte slicing at 2 would panic.
        assert_eq!(truncate("März", Some(2)), "Mä");
    }
}
