//! Token-substitution formatting.
//!
//! A pattern is split once, left to right, into tokens and literal
//! characters. At each position the token table is tried in order, so longer
//! tokens (`dddd`, `MMMM`, `YYYY`) win over their prefixes and substituted
//! text is never rescanned.

use tempo_locale::{English, Translate, day_name, expand_preset, month_name, truncate};

use crate::civil::Fields;
use crate::value::Now;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    DayName,
    DayShort,
    DayMin,
    MonthName,
    MonthShort,
    Year,
    Month,
    Date,
    Hour,
    Minute,
    Second,
    ShortYear,
    Millis,
    Seconds,
}

/// Token table in match order.
pub(crate) const TOKENS: [(&str, Token); 14] = [
    ("dddd", Token::DayName),
    ("ddd", Token::DayShort),
    ("dd", Token::DayMin),
    ("MMMM", Token::MonthName),
    ("MMM", Token::MonthShort),
    ("YYYY", Token::Year),
    ("MM", Token::Month),
    ("DD", Token::Date),
    ("HH", Token::Hour),
    ("mm", Token::Minute),
    ("ss", Token::Second),
    ("YY", Token::ShortYear),
    ("X", Token::Millis),
    ("x", Token::Seconds),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece {
    Token(Token),
    Literal(char),
}

pub(crate) fn tokenize(pattern: &str) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some(&(text, token)) => {
                pieces.push(Piece::Token(token));
                rest = &rest[text.len()..];
            }
            None => {
                pieces.push(Piece::Literal(c));
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    pieces
}

fn render<T: Translate + ?Sized>(token: Token, fields: &Fields, now: &Now, locale: &T) -> String {
    let weekday = now.day().unwrap_or_default() as usize;
    let month = (fields.month - 1) as usize;
    let day = || day_name(weekday, locale).unwrap_or_default();
    let mon = || month_name(month, locale).unwrap_or_default();
    match token {
        Token::DayName => day().to_string(),
        Token::DayShort => truncate(day(), Some(3)),
        Token::DayMin => truncate(day(), Some(2)),
        Token::MonthName => mon().to_string(),
        Token::MonthShort => truncate(mon(), Some(3)),
        Token::Year => format!("{:04}", fields.year),
        Token::Month => format!("{:02}", fields.month),
        Token::Date => format!("{:02}", fields.date),
        Token::Hour => format!("{:02}", fields.hour),
        Token::Minute => format!("{:02}", fields.minute),
        Token::Second => format!("{:02}", fields.second),
        Token::ShortYear => now.shortyear(),
        Token::Millis => now.time().unwrap_or_default().to_string(),
        Token::Seconds => now.timestamp().unwrap_or_default().to_string(),
    }
}

impl Now {
    /// Formats with the English locale.
    ///
    /// See [`Now::format_with`].
    pub fn format(&self, pattern: &str) -> String {
        self.format_with(pattern, &English)
    }

    /// Formats against `pattern`, translating names through `locale`.
    ///
    /// Preset names (`L`, `LL`, `LLL`, `LLLL`, `LT`, `LTS`) expand first.
    /// On an invalid value every token renders as `NaN`.
    pub fn format_with<T: Translate + ?Sized>(&self, pattern: &str, locale: &T) -> String {
        let pattern = expand_preset(pattern, locale);
        let fields = self.fields();
        let mut out = String::with_capacity(pattern.len() + 8);
        for piece in tokenize(pattern) {
            match (piece, &fields) {
                (Piece::Literal(c), _) => out.push(c),
                (Piece::Token(token), Some(fields)) => {
                    out.push_str(&render(token, fields, self, locale));
                }
                (Piece::Token(..), None) => out.push_str("NaN"),
            }
        }
        out
    }

    /// The integer value of `format(pattern)`.
    ///
    /// This is the comparison key at the pattern's granularity: `"X"` orders
    /// by millisecond, `"YYYYMMDD"` by calendar day. Returns `None` for an
    /// invalid value or a pattern whose output is not an integer.
    pub fn code(&self, pattern: &str) -> Option<i64> {
        if !self.is_valid() {
            return None;
        }
        self.format(pattern).parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_locale::Locale;

    fn sample() -> Now {
        // Thursday
        Now::from_ymd_hms(2026, 3, 5, 9, 7, 3)
    }

    #[test]
    fn tokenize_longest_first() {
        let pieces = tokenize("dddd ddd");
        assert_eq!(
            pieces,
            vec![
                Piece::Token(Token::DayName),
                Piece::Literal(' '),
                Piece::Token(Token::DayShort),
            ]
        );
        assert_eq!(tokenize("YYYYY")[0], Piece::Token(Token::Year));
        assert_eq!(tokenize("YYYYY")[1], Piece::Literal('Y'));
    }

    #[test]
    fn default_format() {
        assert_eq!(sample().format(Now::DEFAULT_FORMAT), "2026-03-05 09:07:03");
        assert_eq!(sample().to_string(), "2026-03-05 09:07:03");
    }

    #[test]
    fn named_tokens() {
        let v = sample();
        assert_eq!(v.format("dddd"), "Thursday");
        assert_eq!(v.format("ddd"), "Thu");
        assert_eq!(v.format("dd"), "Th");
        assert_eq!(v.format("MMMM"), "March");
        assert_eq!(v.format("MMM"), "Mar");
    }

    #[test]
    fn numeric_tokens() {
        let v = sample();
        assert_eq!(v.format("YY/MM/DD"), "26/03/05");
        assert_eq!(v.format("HHmmss"), "090703");
        assert_eq!(v.format("X"), v.time().unwrap().to_string());
        assert_eq!(v.format("x"), v.timestamp().unwrap().to_string());
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        // A translated name that looks like a token stays literal.
        let odd = Locale::new().with_translation("Monday", "mm");
        let v = Now::from_ymd_hms(2026, 3, 2, 0, 45, 0);
        assert_eq!(v.format_with("dddd MM", &odd), "mm 03");
    }

    #[test]
    fn presets() {
        let v = sample();
        assert_eq!(v.format("L"), "05/03/2026");
        assert_eq!(v.format("LL"), "March 05, 2026");
        assert_eq!(v.format("LLL"), "March 05, 2026 09:07");
        assert_eq!(v.format("LLLL"), "Thursday, March 05, 2026 09:07");
        assert_eq!(v.format("LT"), "09:07");
        assert_eq!(v.format("LTS"), "09:07:03");
    }

    #[test]
    fn format_with_locale() {
        let de = Locale::new()
            .with_translation("Thursday", "Donnerstag")
            .with_translation("March", "März")
            .with_preset("LL", "DD. MMMM YYYY")
            .unwrap();
        let v = sample();
        assert_eq!(v.format_with("LL", &de), "05. März 2026");
        assert_eq!(v.format_with("ddd", &de), "Don");
        assert_eq!(v.format_with("MMM", &de), "Mär");
    }

    #[test]
    fn format_does_not_mutate() {
        let v = sample();
        let before = v;
        let _ = v.format("LLLL");
        assert_eq!(v, before);
    }

    #[test]
    fn invalid_renders_nan() {
        let v = Now::invalid();
        assert_eq!(v.format("YYYY-MM-DD"), "NaN-NaN-NaN");
        assert_eq!(v.code("X"), None);
    }

    #[test]
    fn codes() {
        let v = sample();
        assert_eq!(v.code("YYYYMMDD"), Some(20_260_305));
        assert_eq!(v.code("YYYYMM"), Some(202_603));
        assert_eq!(v.code("HHmmss"), Some(90_703));
        assert_eq!(v.code("X"), v.time());
        assert_eq!(v.code("YYYY-MM"), None);
    }
}
