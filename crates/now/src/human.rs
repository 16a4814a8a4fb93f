//! Human-readable labels for scoped fields.

use std::fmt;

use tempo_locale::{English, Translate, day_name, month_name, truncate};

use crate::error::NowError;
use crate::scope::Scope;
use crate::value::Now;

/// A field rendered for display: a name for weekdays and months, the raw
/// number otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Human {
    Name(String),
    Number(i64),
    /// A numeric field of an invalid value; displays as `NaN`.
    Invalid,
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Human::Name(name) => f.write_str(name),
            Human::Number(n) => write!(f, "{n}"),
            Human::Invalid => f.write_str("NaN"),
        }
    }
}

fn index_text(index: Option<i64>) -> String {
    index.map_or_else(|| "NaN".to_string(), |i| i.to_string())
}

impl Now {
    /// Labels the field named by `scope` with English names.
    ///
    /// See [`Now::human_with`].
    pub fn human(&self, scope: Scope, len: Option<usize>) -> Result<Human, NowError> {
        self.human_with(scope, len, &English)
    }

    /// Labels the field named by `scope`.
    ///
    /// `Day` and `Month` yield a translated name, optionally truncated to
    /// `len` characters. Every other scope yields its number, or
    /// [`Human::Invalid`] on an invalid value.
    pub fn human_with<T: Translate + ?Sized>(
        &self,
        scope: Scope,
        len: Option<usize>,
        locale: &T,
    ) -> Result<Human, NowError> {
        match scope {
            Scope::Day => self.human_day_with(len, locale).map(Human::Name),
            Scope::Month => self.human_month_with(len, locale).map(Human::Name),
            other => Ok(self.get(other).map_or(Human::Invalid, Human::Number)),
        }
    }

    /// English weekday name, optionally truncated.
    pub fn human_day(&self, len: Option<usize>) -> Result<String, NowError> {
        self.human_day_with(len, &English)
    }

    /// Translated weekday name, optionally truncated to `len` characters.
    pub fn human_day_with<T: Translate + ?Sized>(
        &self,
        len: Option<usize>,
        locale: &T,
    ) -> Result<String, NowError> {
        let index = self.day();
        index
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| day_name(i, locale))
            .map(|name| truncate(name, len))
            .ok_or_else(|| NowError::InvalidDayIndex {
                index: index_text(index),
            })
    }

    /// English month name, optionally truncated.
    pub fn human_month(&self, len: Option<usize>) -> Result<String, NowError> {
        self.human_month_with(len, &English)
    }

    /// Translated month name, optionally truncated to `len` characters.
    pub fn human_month_with<T: Translate + ?Sized>(
        &self,
        len: Option<usize>,
        locale: &T,
    ) -> Result<String, NowError> {
        let index = self.month().map(|m| m - 1);
        index
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| month_name(i, locale))
            .map(|name| truncate(name, len))
            .ok_or_else(|| NowError::InvalidMonthIndex {
                index: index_text(index),
            })
    }
}
