//! Ordering predicates at a chosen granularity.
//!
//! Two values are compared through their integer [`code`](Now::code) under
//! a format, so `"YYYYMMDD"` ignores the time of day and `"HHmmss"` ignores
//! the date. An invalid operand is unordered and every predicate is `false`.

use std::cmp::Ordering;

use crate::value::Now;

const INSTANT: &str = "x";
const DATE: &str = "YYYYMMDD";
const TIME: &str = "HHmmss";

impl Now {
    /// Orders `self` against `other` under `format`.
    ///
    /// Returns `None` if either value is invalid or `format` does not render
    /// an integer.
    pub fn compare(&self, other: &Now, format: &str) -> Option<Ordering> {
        Some(self.code(format)?.cmp(&other.code(format)?))
    }

    /// Strictly earlier, to the second.
    pub fn before(&self, other: &Now) -> bool {
        self.before_at(other, INSTANT)
    }

    pub fn before_at(&self, other: &Now, format: &str) -> bool {
        self.compare(other, format) == Some(Ordering::Less)
    }

    /// Strictly later, to the second.
    pub fn after(&self, other: &Now) -> bool {
        self.after_at(other, INSTANT)
    }

    pub fn after_at(&self, other: &Now, format: &str) -> bool {
        self.compare(other, format) == Some(Ordering::Greater)
    }

    /// On an earlier calendar day.
    pub fn before_date(&self, other: &Now) -> bool {
        self.before_at(other, DATE)
    }

    /// On a later calendar day.
    pub fn after_date(&self, other: &Now) -> bool {
        self.after_at(other, DATE)
    }

    /// Earlier in the day, whatever the dates.
    pub fn before_time(&self, other: &Now) -> bool {
        self.before_at(other, TIME)
    }

    /// Later in the day, whatever the dates.
    pub fn after_time(&self, other: &Now) -> bool {
        self.after_at(other, TIME)
    }

    /// Same instant, to the second.
    pub fn equal(&self, other: &Now) -> bool {
        self.equal_at(other, INSTANT)
    }

    pub fn equal_at(&self, other: &Now, format: &str) -> bool {
        self.compare(other, format) == Some(Ordering::Equal)
    }

    /// Strictly between `start` and `end` by calendar day.
    ///
    /// The endpoints may be given in either order.
    pub fn between(&self, start: &Now, end: &Now) -> bool {
        self.between_at(start, end, DATE)
    }

    pub fn between_at(&self, start: &Now, end: &Now, format: &str) -> bool {
        let (start, end) = if start.after_at(end, format) {
            (end, start)
        } else {
            (start, end)
        };
        self.after_at(start, format) && self.before_at(end, format)
    }
}
