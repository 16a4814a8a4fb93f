//! Parsing formatted strings back into values.
//!
//! Parsing walks the same token stream as formatting. Numeric tokens read a
//! fixed number of ASCII digits (`X` and `x` read a signed integer of any
//! length), name tokens match one of the (translated) day or month names,
//! and every other character must appear verbatim. Field ranges are not
//! checked: `"2026-02-30"` parses and rolls over to March 2nd.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tempo_locale::{DAY_NAMES, English, MONTH_NAMES, Translate, expand_preset, truncate};
use tracing::debug;

use crate::civil::MS_PER_SECOND;
use crate::format::{Piece, Token, tokenize};
use crate::scope::Scope;
use crate::value::Now;

static BARE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}(?::\d{2})?$").expect("time pattern is valid"));

static BARE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,3}))?)?Z?$")
        .expect("ISO 8601 pattern is valid")
});

type Field = Option<(Scope, i64)>;

/// Reads exactly `width` ASCII digits.
fn digits(input: &str, width: usize) -> Option<(i64, &str)> {
    let head = input.get(..width)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((head.parse().ok()?, &input[width..]))
}

/// Reads an optionally negative integer of any length.
fn signed(input: &str) -> Option<(i64, &str)> {
    let sign = usize::from(input.starts_with('-'));
    let len = sign + input[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if len == sign {
        return None;
    }
    Some((input[..len].parse().ok()?, &input[len..]))
}

/// Matches the longest (translated, truncated) name from `names`.
fn name<'v, T: Translate + ?Sized>(
    input: &'v str,
    names: &[&str],
    len: Option<usize>,
    locale: &T,
) -> Option<(i64, &'v str)> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| (i, truncate(locale.trans(n), len)))
        .filter(|(_, label)| !label.is_empty() && input.starts_with(label.as_str()))
        .max_by_key(|(_, label)| label.len())
        .map(|(i, label)| (i as i64, &input[label.len()..]))
}

fn read_token<'v, T: Translate + ?Sized>(
    token: Token,
    input: &'v str,
    locale: &T,
) -> Option<(Field, &'v str)> {
    let numeric = |scope: Scope, width: usize| {
        digits(input, width).map(|(n, tail)| (Some((scope, n)), tail))
    };
    let weekday = |len: Option<usize>| {
        name(input, &DAY_NAMES, len, locale).map(|(_, tail)| (None, tail))
    };
    let month = |len: Option<usize>| {
        name(input, &MONTH_NAMES, len, locale).map(|(i, tail)| (Some((Scope::Month, i + 1)), tail))
    };
    match token {
        Token::Year => numeric(Scope::Year, 4),
        Token::Month => numeric(Scope::Month, 2),
        Token::Date => numeric(Scope::Date, 2),
        Token::Hour => numeric(Scope::Hour, 2),
        Token::Minute => numeric(Scope::Minute, 2),
        Token::Second => numeric(Scope::Second, 2),
        Token::ShortYear => {
            digits(input, 2).map(|(n, tail)| (Some((Scope::Year, 2000 + n)), tail))
        }
        Token::Millis => signed(input).map(|(n, tail)| (Some((Scope::Time, n)), tail)),
        Token::Seconds => {
            let (n, tail) = signed(input)?;
            Some((Some((Scope::Time, n.checked_mul(MS_PER_SECOND)?)), tail))
        }
        Token::DayName => weekday(None),
        Token::DayShort => weekday(Some(3)),
        Token::DayMin => weekday(Some(2)),
        Token::MonthName => month(None),
        Token::MonthShort => month(Some(3)),
    }
}

/// Matches `value` against `format`, returning the fields it carries in
/// format order.
fn extract<T: Translate + ?Sized>(
    value: &str,
    format: &str,
    locale: &T,
) -> Option<Vec<(Scope, i64)>> {
    let mut rest = value;
    let mut fields = Vec::new();
    for piece in tokenize(format) {
        match piece {
            Piece::Literal(c) => rest = rest.strip_prefix(c)?,
            Piece::Token(token) => {
                let (field, tail) = read_token(token, rest, locale)?;
                fields.extend(field);
                rest = tail;
            }
        }
    }
    rest.is_empty().then_some(fields)
}

fn from_iso(caps: &Captures<'_>) -> Now {
    let field = |i: usize| -> i64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_default()
    };
    let millis = caps
        .get(7)
        .and_then(|m| format!("{:0<3}", m.as_str()).parse::<i64>().ok())
        .unwrap_or_default();
    let mut now = Now::from_ymd_hms(field(1), field(2), field(3), field(4), field(5), field(6));
    if let Some(ms) = now.time() {
        now.set_time(ms + millis);
    }
    now
}

impl Now {
    /// Parses with the default pattern `YYYY-MM-DD HH:mm:ss`.
    pub fn make(value: &str) -> Self {
        Self::parse(value, Self::DEFAULT_FORMAT)
    }

    /// Returns `true` if `value` fits the template of `format`.
    ///
    /// Checks shape only: literal characters must match, numeric tokens must
    /// cover the right number of ASCII digits and name tokens must name a
    /// day or month.
    pub fn is_parsable(value: &str, format: &str) -> bool {
        extract(value, expand_preset(format, &English), &English).is_some()
    }

    /// Parses `value`, recognising common shapes before falling back to
    /// `format`.
    ///
    /// In order: a bare `HH:mm[:ss]` time, a bare `YYYY-MM-DD` date, a
    /// relative modifier applied to the current time (`"+2 days"`), an
    /// ISO 8601 `YYYY-MM-DDTHH:mm[:ss[.sss]][Z]` timestamp, and finally
    /// [`Now::parse_format`].
    pub fn parse(value: &str, format: &str) -> Self {
        let value = value.trim();
        if BARE_TIME.is_match(value) {
            return if value.len() == 5 {
                Self::parse_format(&format!("{value}:00"), "HH:mm:ss")
            } else {
                Self::parse_format(value, "HH:mm:ss")
            };
        }
        if BARE_DATE.is_match(value) {
            return Self::parse_format(value, "YYYY-MM-DD");
        }
        if Self::is_modifiable(value) {
            let mut now = Self::now();
            now.modify(value);
            return now;
        }
        if let Some(caps) = ISO_8601.captures(value) {
            return from_iso(&caps);
        }
        Self::parse_format(value, format)
    }

    /// Parses `value` strictly against `format` with English names.
    pub fn parse_format(value: &str, format: &str) -> Self {
        Self::parse_format_with(value, format, &English)
    }

    /// Parses `value` strictly against `format`, matching day and month
    /// names through `locale`.
    ///
    /// Fields absent from the format come from midnight of the current day.
    /// Input that does not fit yields the invalid value.
    pub fn parse_format_with<T: Translate + ?Sized>(
        value: &str,
        format: &str,
        locale: &T,
    ) -> Self {
        let format = expand_preset(format, locale);
        let Some(mut fields) = extract(value, format, locale) else {
            debug!(value, format, "value does not match format");
            return Self::invalid();
        };
        fields.sort_by_key(|(scope, _)| scope.write_rank());
        let mut now = Self::today();
        for (scope, n) in fields {
            now.set(n, scope);
        }
        now
    }

    /// Parses `value` into a scratch value and copies the `keys` fields
    /// onto `self`.
    ///
    /// If `value` does not parse, `self` becomes invalid.
    pub fn apply(&mut self, value: &str, format: &str, keys: &[Scope]) -> &mut Self {
        let scratch = Self::parse(value, format);
        if !scratch.is_valid() {
            return self.invalidate();
        }
        let mut keys = keys.to_vec();
        keys.sort_by_key(|scope| scope.write_rank());
        for scope in keys {
            if let Some(n) = scratch.get(scope) {
                self.set(n, scope);
            }
        }
        self
    }

    /// Copies the date part (year, month, day of month) of `value`.
    pub fn apply_date(&mut self, value: &str, format: &str) -> &mut Self {
        self.apply(value, format, &[Scope::Date, Scope::Month, Scope::Year])
    }

    /// Copies the time part (hour, minute, second) of `value`.
    pub fn apply_time(&mut self, value: &str, format: &str) -> &mut Self {
        self.apply(value, format, &[Scope::Hour, Scope::Minute, Scope::Second])
    }
}
