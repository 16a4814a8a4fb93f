//! Stepping to neighbouring values and to the bounds of the enclosing
//! period.
//!
//! Every method here returns a new value; the receiver is never touched.

use crate::civil::days_in_month;
use crate::error::NowError;
use crate::scope::Scope;
use crate::value::Now;

impl Now {
    /// One unit of `scope` later.
    pub fn next(&self, scope: Scope) -> Now {
        let mut copy = *self;
        copy.add(1, scope);
        copy
    }

    /// One unit of `scope` earlier.
    pub fn prev(&self, scope: Scope) -> Now {
        let mut copy = *self;
        copy.sub(1, scope);
        copy
    }

    pub fn next_second(&self) -> Now {
        self.next(Scope::Second)
    }

    pub fn next_minute(&self) -> Now {
        self.next(Scope::Minute)
    }

    pub fn next_hour(&self) -> Now {
        self.next(Scope::Hour)
    }

    pub fn next_day(&self) -> Now {
        self.next(Scope::Day)
    }

    pub fn next_date(&self) -> Now {
        self.next(Scope::Date)
    }

    /// Same day of the next month, clamped to that month's length.
    pub fn next_month(&self) -> Now {
        self.next(Scope::Month)
    }

    pub fn next_year(&self) -> Now {
        self.next(Scope::Year)
    }

    pub fn next_decade(&self) -> Now {
        self.next(Scope::Decade)
    }

    pub fn next_century(&self) -> Now {
        self.next(Scope::Century)
    }

    pub fn prev_second(&self) -> Now {
        self.prev(Scope::Second)
    }

    pub fn prev_minute(&self) -> Now {
        self.prev(Scope::Minute)
    }

    pub fn prev_hour(&self) -> Now {
        self.prev(Scope::Hour)
    }

    pub fn prev_day(&self) -> Now {
        self.prev(Scope::Day)
    }

    pub fn prev_date(&self) -> Now {
        self.prev(Scope::Date)
    }

    pub fn prev_month(&self) -> Now {
        self.prev(Scope::Month)
    }

    pub fn prev_year(&self) -> Now {
        self.prev(Scope::Year)
    }

    pub fn prev_decade(&self) -> Now {
        self.prev(Scope::Decade)
    }

    pub fn prev_century(&self) -> Now {
        self.prev(Scope::Century)
    }

    /// The start of the period one level above `scope`.
    ///
    /// `first(Second)` is second 0 of the minute, `first(Day)` the Monday of
    /// the week, `first(Year)` the first year of the decade. `Time` and
    /// `Century` have no enclosing period and are rejected.
    pub fn first(&self, scope: Scope) -> Result<Now, NowError> {
        Ok(match scope {
            Scope::Second => self.first_second(),
            Scope::Minute => self.first_minute(),
            Scope::Hour => self.first_hour(),
            Scope::Day => self.first_day(),
            Scope::Date => self.first_date(),
            Scope::Month => self.first_month(),
            Scope::Year => self.first_year(),
            Scope::Decade => self.first_decade(),
            Scope::Century | Scope::Time => {
                return Err(NowError::InvalidScope {
                    scope: scope.to_string(),
                });
            }
        })
    }

    /// The end of the period one level above `scope`.
    ///
    /// The counterpart of [`Now::first`]: `last(Date)` is the last day of
    /// the month, `last(Decade)` the last decade of the century.
    pub fn last(&self, scope: Scope) -> Result<Now, NowError> {
        Ok(match scope {
            Scope::Second => self.last_second(),
            Scope::Minute => self.last_minute(),
            Scope::Hour => self.last_hour(),
            Scope::Day => self.last_day(),
            Scope::Date => self.last_date(),
            Scope::Month => self.last_month(),
            Scope::Year => self.last_year(),
            Scope::Decade => self.last_decade(),
            Scope::Century | Scope::Time => {
                return Err(NowError::InvalidScope {
                    scope: scope.to_string(),
                });
            }
        })
    }

    /// Looks the scope up by name, then defers to [`Now::first`].
    pub fn first_named(&self, scope: &str) -> Result<Now, NowError> {
        self.first(scope.parse()?)
    }

    /// Looks the scope up by name, then defers to [`Now::last`].
    pub fn last_named(&self, scope: &str) -> Result<Now, NowError> {
        self.last(scope.parse()?)
    }

    fn with(&self, value: i64, scope: Scope) -> Now {
        let mut copy = *self;
        copy.set(value, scope);
        copy
    }

    pub fn first_second(&self) -> Now {
        self.with(0, Scope::Second)
    }

    pub fn last_second(&self) -> Now {
        self.with(59, Scope::Second)
    }

    pub fn first_minute(&self) -> Now {
        self.with(0, Scope::Minute)
    }

    pub fn last_minute(&self) -> Now {
        self.with(59, Scope::Minute)
    }

    pub fn first_hour(&self) -> Now {
        self.with(0, Scope::Hour)
    }

    pub fn last_hour(&self) -> Now {
        self.with(23, Scope::Hour)
    }

    /// Monday of the current week.
    pub fn first_day(&self) -> Now {
        self.with(0, Scope::Day)
    }

    /// Sunday of the current week.
    pub fn last_day(&self) -> Now {
        self.with(6, Scope::Day)
    }

    pub fn first_date(&self) -> Now {
        self.with(1, Scope::Date)
    }

    /// Last day of the current month.
    pub fn last_date(&self) -> Now {
        let mut copy = self.first_date();
        copy.add(1, Scope::Month).set_date(0);
        copy
    }

    pub fn first_month(&self) -> Now {
        self.with(1, Scope::Month)
    }

    pub fn last_month(&self) -> Now {
        self.with(12, Scope::Month)
    }

    /// First year of the current decade.
    pub fn first_year(&self) -> Now {
        match self.decade() {
            Some(decade) => self.with(decade, Scope::Year),
            None => *self,
        }
    }

    /// Last year of the current decade.
    pub fn last_year(&self) -> Now {
        match self.decade() {
            Some(decade) => self.with(decade + 9, Scope::Year),
            None => *self,
        }
    }

    /// First year of the first decade of the current century.
    pub fn first_decade(&self) -> Now {
        match self.century() {
            Some(century) => self.with(century, Scope::Year),
            None => *self,
        }
    }

    /// First year of the last decade of the current century.
    pub fn last_decade(&self) -> Now {
        match self.century() {
            Some(century) => self.with(century + 90, Scope::Year),
            None => *self,
        }
    }

    /// Number of days in the current month.
    pub fn days_in_month(&self) -> Option<i64> {
        let fields = self.fields()?;
        Some(days_in_month(fields.year, fields.month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Now {
        // Thursday
        Now::from_ymd_hms(2026, 1, 15, 10, 30, 45)
    }

    #[test]
    fn next_and_prev_leave_receiver() {
        let v = sample();
        let n = v.next(Scope::Day);
        assert_eq!(n.date(), Some(16));
        assert_eq!(v.date(), Some(15));
        assert_eq!(v.prev(Scope::Hour).hour(), Some(9));
        assert_eq!(v.next_decade().year(), Some(2036));
        assert_eq!(v.prev_century().year(), Some(1926));
        assert_eq!(v.next(Scope::Century).format("YYYY-MM-DD"), "2126-01-15");
        assert_eq!(v.prev_minute().minute(), Some(29));
    }

    #[test]
    fn next_month_clamps() {
        let v = Now::from_ymd_hms(2026, 1, 31, 0, 0, 0);
        let n = v.next_month();
        assert_eq!(n.format("YYYY-MM-DD"), "2026-02-28");
        assert_eq!(v.prev_month().format("YYYY-MM-DD"), "2025-12-31");
    }

    #[test]
    fn next_crosses_year() {
        let v = Now::from_ymd_hms(2026, 12, 31, 23, 59, 59);
        assert_eq!(v.next_second().format("YYYY-MM-DD HH:mm:ss"), "2027-01-01 00:00:00");
    }

    #[test]
    fn first_and_last_of_clock_fields() {
        let v = sample();
        assert_eq!(v.first_second().second(), Some(0));
        assert_eq!(v.last_second().second(), Some(59));
        assert_eq!(v.first_minute().minute(), Some(0));
        assert_eq!(v.last_minute().minute(), Some(59));
        assert_eq!(v.first_hour().hour(), Some(0));
        assert_eq!(v.last_hour().hour(), Some(23));
        assert_eq!(v.last_hour().date(), Some(15));
    }

    #[test]
    fn first_and_last_day_of_week() {
        let v = sample();
        assert_eq!(v.first_day().format("YYYY-MM-DD dddd"), "2026-01-12 Monday");
        assert_eq!(v.last_day().format("YYYY-MM-DD dddd"), "2026-01-18 Sunday");
    }

    #[test]
    fn last_date_handles_month_lengths() {
        let feb = Now::from_ymd_hms(2026, 2, 10, 0, 0, 0);
        assert_eq!(feb.last_date().date(), Some(28));
        let leap = Now::from_ymd_hms(2028, 2, 10, 0, 0, 0);
        assert_eq!(leap.last_date().date(), Some(29));
        let jan = Now::from_ymd_hms(2026, 1, 31, 0, 0, 0);
        assert_eq!(jan.last_date().format("YYYY-MM-DD"), "2026-01-31");
        assert_eq!(sample().last_date().format("HH:mm:ss"), "10:30:45");
        assert_eq!(leap.days_in_month(), Some(29));
    }

    #[test]
    fn first_and_last_of_calendar_periods() {
        let v = sample();
        assert_eq!(v.first_date().date(), Some(1));
        assert_eq!(v.first_month().month(), Some(1));
        assert_eq!(v.last_month().format("YYYY-MM-DD"), "2026-12-15");
        assert_eq!(v.first_year().year(), Some(2020));
        assert_eq!(v.last_year().year(), Some(2029));
        assert_eq!(v.first_decade().year(), Some(2000));
        assert_eq!(v.last_decade().year(), Some(2090));
        assert_eq!(v.last_decade().format("MM-DD HH:mm:ss"), "01-15 10:30:45");
        assert_eq!(v.first(Scope::Decade).unwrap().year(), Some(2000));

        // Leap day survives into a leap decade start, clamps otherwise.
        let leap = Now::from_ymd_hms(2028, 2, 29, 0, 0, 0);
        assert_eq!(leap.first_decade().format("YYYY-MM-DD"), "2000-02-29");
        assert_eq!(leap.last_decade().format("YYYY-MM-DD"), "2090-02-28");
    }

    #[test]
    fn first_dispatch() {
        let v = sample();
        assert_eq!(v.first(Scope::Date).unwrap(), v.first_date());
        assert_eq!(v.last(Scope::Day).unwrap(), v.last_day());
        assert_eq!(v.first_named("months").unwrap(), v.first_month());
    }

    #[test]
    fn first_rejects_unknown_scopes() {
        let v = sample();
        let err = v.first(Scope::Time).unwrap_err();
        assert_eq!(err.to_string(), "Invalid scope \"time\"");
        let err = v.last(Scope::Century).unwrap_err();
        assert_eq!(err.to_string(), "Invalid scope \"century\"");
        let err = v.last_named("fortnight").unwrap_err();
        assert_eq!(
            err,
            NowError::InvalidScope {
                scope: "fortnight".to_string()
            }
        );
    }

    #[test]
    fn invalid_stays_invalid() {
        let v = Now::invalid();
        assert!(!v.next_day().is_valid());
        assert!(!v.last_date().is_valid());
        assert!(!v.first_year().is_valid());
        assert_eq!(v.days_in_month(), None);
    }
}
