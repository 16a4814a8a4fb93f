//! Named granularities used as dispatch keys.

use std::fmt;
use std::str::FromStr;

use crate::error::NowError;

/// A named granularity of a [`Now`](crate::Now).
///
/// `Day` is the weekday, `Date` the day of the month. `Decade` and `Century`
/// are ten- and hundred-year buckets: reading one yields its first year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Second,
    Minute,
    Hour,
    Day,
    Date,
    Month,
    Year,
    Decade,
    Century,
    Time,
}

impl Scope {
    /// All scopes, finest first.
    pub const ALL: [Scope; 10] = [
        Scope::Time,
        Scope::Second,
        Scope::Minute,
        Scope::Hour,
        Scope::Day,
        Scope::Date,
        Scope::Month,
        Scope::Year,
        Scope::Decade,
        Scope::Century,
    ];

    /// Matches a scope name case-insensitively, accepting plurals.
    ///
    /// Returns `None` for unknown names; see [`Scope::from_str`] for the
    /// erroring form.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let singular = match name.as_str() {
            "time" => return Some(Scope::Time),
            "centuries" => return Some(Scope::Century),
            other => other.strip_suffix('s').unwrap_or(other),
        };
        match singular {
            "second" => Some(Scope::Second),
            "minute" => Some(Scope::Minute),
            "hour" => Some(Scope::Hour),
            "day" => Some(Scope::Day),
            "date" => Some(Scope::Date),
            "month" => Some(Scope::Month),
            "year" => Some(Scope::Year),
            "decade" => Some(Scope::Decade),
            "century" => Some(Scope::Century),
            _ => None,
        }
    }

    /// Returns the canonical singular name.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Second => "second",
            Scope::Minute => "minute",
            Scope::Hour => "hour",
            Scope::Day => "day",
            Scope::Date => "date",
            Scope::Month => "month",
            Scope::Year => "year",
            Scope::Decade => "decade",
            Scope::Century => "century",
            Scope::Time => "time",
        }
    }

    /// The format whose integer code orders values at this granularity.
    pub(crate) fn code_format(self) -> &'static str {
        match self {
            Scope::Time => "X",
            Scope::Second => "YYYYMMDDHHmmss",
            Scope::Minute => "YYYYMMDDHHmm",
            Scope::Hour => "YYYYMMDDHH",
            Scope::Day | Scope::Date => "YYYYMMDD",
            Scope::Month => "YYYYMM",
            Scope::Year | Scope::Decade | Scope::Century => "YYYY",
        }
    }

    /// Order in which fields are written so coarser fields settle first.
    pub(crate) fn write_rank(self) -> u8 {
        match self {
            Scope::Time => 0,
            Scope::Century => 1,
            Scope::Decade => 2,
            Scope::Year => 3,
            Scope::Month => 4,
            Scope::Date => 5,
            Scope::Day => 6,
            Scope::Hour => 7,
            Scope::Minute => 8,
            Scope::Second => 9,
        }
    }

    /// Whether ranges may step by this scope.
    ///
    /// Clock scopes are excluded: a span of years would expand into
    /// millions of entries.
    pub fn is_calendar(self) -> bool {
        matches!(
            self,
            Scope::Day
                | Scope::Date
                | Scope::Month
                | Scope::Year
                | Scope::Decade
                | Scope::Century
        )
    }
}

impl FromStr for Scope {
    type Err = NowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::parse(s).ok_or_else(|| NowError::InvalidScope {
            scope: s.to_string(),
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
