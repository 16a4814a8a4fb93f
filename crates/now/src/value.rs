//! The temporal value and its scoped accessors.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::civil::{
    Fields, MAX_INSTANT, MIN_INSTANT, MS_PER_DAY, MS_PER_SECOND, weekday_from_days,
};
use crate::scope::Scope;

/// One point in civil (naive local) time with millisecond resolution.
///
/// A `Now` is either valid, wrapping an epoch-millisecond instant, or the
/// invalid sentinel produced by a failed parse or an out-of-range write.
/// Every read of an invalid value yields `None` and every write to one is a
/// no-op, so invalidity propagates instead of panicking.
///
/// Methods taking `&mut self` (`set_*`, [`add`](Now::add), [`sub`](Now::sub),
/// [`modify`](Now::modify), [`apply`](Now::apply)) mutate in place and return
/// `&mut Self` for chaining. Methods taking `&self` (`next`, `first_*`,
/// `range`, `*_grid`, ...) return new values and never touch the receiver.
/// `Now` is `Copy`, so a plain binding is an independent clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Now {
    instant: Option<i64>,
}

impl Now {
    /// The pattern used by [`Display`](fmt::Display) and [`Now::make`].
    pub const DEFAULT_FORMAT: &'static str = tempo_locale::DEFAULT_FORMAT;

    /// The current local time.
    pub fn now() -> Self {
        Self::from(chrono::Local::now().naive_local())
    }

    /// Midnight at the start of the current local day.
    pub fn today() -> Self {
        match Self::now().instant {
            Some(ms) => Self::from_instant(ms.div_euclid(MS_PER_DAY) * MS_PER_DAY),
            None => Self::invalid(),
        }
    }

    /// The invalid sentinel.
    pub fn invalid() -> Self {
        Self { instant: None }
    }

    /// Wraps an epoch-millisecond instant.
    ///
    /// Instants outside years 0..=9999 are invalid.
    pub fn from_instant(ms: i64) -> Self {
        if !(MIN_INSTANT..=MAX_INSTANT).contains(&ms) {
            return Self::invalid();
        }
        Self { instant: Some(ms) }
    }

    /// Builds a value from civil fields; `month` is 1-based.
    ///
    /// Out-of-range fields roll over (`date = 32` is the 1st of the next
    /// month).
    pub fn from_ymd_hms(
        year: i64,
        month: i64,
        date: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Self {
        let fields = Fields {
            year,
            month,
            date,
            hour,
            minute,
            second,
            millis: 0,
        };
        Self {
            instant: fields.to_instant(),
        }
    }

    /// Returns `true` unless this is the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    pub(crate) fn fields(&self) -> Option<Fields> {
        self.instant.map(Fields::from_instant)
    }

    pub(crate) fn invalidate(&mut self) -> &mut Self {
        self.instant = None;
        self
    }

    fn update(&mut self, write: impl FnOnce(&mut Fields)) -> &mut Self {
        if let Some(mut fields) = self.fields() {
            write(&mut fields);
            self.instant = fields.to_instant();
        }
        self
    }

    /// Epoch milliseconds.
    pub fn time(&self) -> Option<i64> {
        self.instant
    }

    pub fn set_time(&mut self, ms: i64) -> &mut Self {
        *self = Self::from_instant(ms);
        self
    }

    /// Epoch seconds, rounded towards negative infinity.
    pub fn timestamp(&self) -> Option<i64> {
        self.instant.map(|ms| ms.div_euclid(MS_PER_SECOND))
    }

    pub fn second(&self) -> Option<i64> {
        self.fields().map(|f| f.second)
    }

    pub fn set_second(&mut self, value: i64) -> &mut Self {
        self.update(|f| f.second = value)
    }

    pub fn minute(&self) -> Option<i64> {
        self.fields().map(|f| f.minute)
    }

    pub fn set_minute(&mut self, value: i64) -> &mut Self {
        self.update(|f| f.minute = value)
    }

    pub fn hour(&self) -> Option<i64> {
        self.fields().map(|f| f.hour)
    }

    pub fn set_hour(&mut self, value: i64) -> &mut Self {
        self.update(|f| f.hour = value)
    }

    /// Weekday, 0 = Sunday through 6 = Saturday.
    pub fn day(&self) -> Option<i64> {
        self.instant.map(|ms| weekday_from_days(ms.div_euclid(MS_PER_DAY)))
    }

    /// Moves within the current Monday-start week.
    ///
    /// `value` counts from Monday: 0 lands on the Monday, 6 on the Sunday of
    /// the week containing this value. Other values keep counting past the
    /// week's ends.
    pub fn set_day(&mut self, value: i64) -> &mut Self {
        let Some(weekday) = self.day() else {
            return self;
        };
        let offset = value
            .saturating_add(1)
            .saturating_sub(if weekday == 0 { 7 } else { weekday });
        self.update(|f| f.date = f.date.saturating_add(offset))
    }

    /// Day of the month, 1-based.
    pub fn date(&self) -> Option<i64> {
        self.fields().map(|f| f.date)
    }

    pub fn set_date(&mut self, value: i64) -> &mut Self {
        self.update(|f| f.date = value)
    }

    /// Month, 1 = January.
    pub fn month(&self) -> Option<i64> {
        self.fields().map(|f| f.month)
    }

    /// Sets the month (1-based), clamping the day to the month's length.
    pub fn set_month(&mut self, value: i64) -> &mut Self {
        self.update(|f| {
            f.month = value;
            f.clamp_date();
        })
    }

    pub fn year(&self) -> Option<i64> {
        self.fields().map(|f| f.year)
    }

    /// Sets the year, clamping Feb 29 to Feb 28 in common years.
    pub fn set_year(&mut self, value: i64) -> &mut Self {
        self.update(|f| {
            f.year = value;
            f.clamp_date();
        })
    }

    /// First year of the decade, e.g. 2020 for 2026.
    pub fn decade(&self) -> Option<i64> {
        self.year().map(|y| y.div_euclid(10) * 10)
    }

    /// Moves to the decade starting at `value`, keeping the year within it.
    pub fn set_decade(&mut self, value: i64) -> &mut Self {
        self.update(|f| {
            f.year = (value.div_euclid(10) * 10).saturating_add(f.year.rem_euclid(10));
            f.clamp_date();
        })
    }

    /// First year of the century, e.g. 2000 for 2026.
    pub fn century(&self) -> Option<i64> {
        self.year().map(|y| y.div_euclid(100) * 100)
    }

    /// Moves to the century starting at `value`, keeping the year within it.
    pub fn set_century(&mut self, value: i64) -> &mut Self {
        self.update(|f| {
            f.year = (value.div_euclid(100) * 100).saturating_add(f.year.rem_euclid(100));
            f.clamp_date();
        })
    }

    /// Last two characters of the zero-padded four-digit year.
    pub fn shortyear(&self) -> String {
        match self.year() {
            Some(year) => {
                let year = format!("{year:04}");
                year[year.len() - 2..].to_string()
            }
            None => "NaN".to_string(),
        }
    }

    /// Reads the field named by `scope`.
    pub fn get(&self, scope: Scope) -> Option<i64> {
        match scope {
            Scope::Time => self.time(),
            Scope::Second => self.second(),
            Scope::Minute => self.minute(),
            Scope::Hour => self.hour(),
            Scope::Day => self.day(),
            Scope::Date => self.date(),
            Scope::Month => self.month(),
            Scope::Year => self.year(),
            Scope::Decade => self.decade(),
            Scope::Century => self.century(),
        }
    }

    /// Writes the field named by `scope`.
    pub fn set(&mut self, value: i64, scope: Scope) -> &mut Self {
        match scope {
            Scope::Time => self.set_time(value),
            Scope::Second => self.set_second(value),
            Scope::Minute => self.set_minute(value),
            Scope::Hour => self.set_hour(value),
            Scope::Day => self.set_day(value),
            Scope::Date => self.set_date(value),
            Scope::Month => self.set_month(value),
            Scope::Year => self.set_year(value),
            Scope::Decade => self.set_decade(value),
            Scope::Century => self.set_century(value),
        }
    }

    /// Reads a field by name; unknown names read as `None`.
    pub fn get_named(&self, scope: &str) -> Option<i64> {
        Scope::parse(scope).and_then(|scope| self.get(scope))
    }

    /// Writes a field by name; unknown names leave the value untouched.
    pub fn set_named(&mut self, value: i64, scope: &str) -> &mut Self {
        match Scope::parse(scope) {
            Some(scope) => self.set(value, scope),
            None => self,
        }
    }

    /// Writes a field from its textual form.
    ///
    /// Text that is not an integer invalidates the value.
    pub fn set_str(&mut self, value: &str, scope: Scope) -> &mut Self {
        match value.trim().parse::<i64>() {
            Ok(value) => self.set(value, scope),
            Err(_) => {
                debug!(value, %scope, "non-numeric field value");
                self.invalidate()
            }
        }
    }

    /// Adds `value` units of `scope`.
    ///
    /// `Day` adds calendar days. `Decade` and `Century` add ten and a hundred
    /// years per unit.
    pub fn add(&mut self, value: i64, scope: Scope) -> &mut Self {
        let (scope, value) = match scope {
            Scope::Day => (Scope::Date, value),
            Scope::Decade => (Scope::Year, value.saturating_mul(10)),
            Scope::Century => (Scope::Year, value.saturating_mul(100)),
            other => (other, value),
        };
        match self.get(scope) {
            Some(current) => self.set(current.saturating_add(value), scope),
            None => self,
        }
    }

    /// Subtracts `value` units of `scope`.
    pub fn sub(&mut self, value: i64, scope: Scope) -> &mut Self {
        self.add(value.saturating_neg(), scope)
    }

    /// Converts to a `chrono` date-time, if valid and within its range.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let f = self.fields()?;
        NaiveDate::from_ymd_opt(
            i32::try_from(f.year).ok()?,
            u32::try_from(f.month).ok()?,
            u32::try_from(f.date).ok()?,
        )?
        .and_hms_milli_opt(
            u32::try_from(f.hour).ok()?,
            u32::try_from(f.minute).ok()?,
            u32::try_from(f.second).ok()?,
            u32::try_from(f.millis).ok()?,
        )
    }
}

impl Default for Now {
    fn default() -> Self {
        Self::now()
    }
}

impl From<NaiveDateTime> for Now {
    fn from(value: NaiveDateTime) -> Self {
        Self::from_instant(value.and_utc().timestamp_millis())
    }
}

impl From<NaiveDate> for Now {
    fn from(value: NaiveDate) -> Self {
        Self::from(value.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for Now {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Self::DEFAULT_FORMAT))
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
    fn accessors() {
        let v = sample();
        assert_eq!(v.year(), Some(2026));
        assert_eq!(v.month(), Some(1));
        assert_eq!(v.date(), Some(15));
        assert_eq!(v.hour(), Some(10));
        assert_eq!(v.minute(), Some(30));
        assert_eq!(v.second(), Some(45));
        assert_eq!(v.day(), Some(4));
        assert_eq!(v.decade(), Some(2020));
        assert_eq!(v.timestamp(), Some(1_768_473_045));
        assert_eq!(v.time(), Some(1_768_473_045_000));
    }

    #[test]
    fn scope_symmetry() {
        let cases = [
            (Scope::Second, 0),
            (Scope::Second, 59),
            (Scope::Minute, 0),
            (Scope::Minute, 17),
            (Scope::Hour, 0),
            (Scope::Hour, 23),
            (Scope::Date, 1),
            (Scope::Date, 31),
            (Scope::Month, 1),
            (Scope::Month, 12),
            (Scope::Year, 1999),
            (Scope::Year, 2400),
            (Scope::Decade, 1980),
            (Scope::Century, 1700),
            (Scope::Time, 86_400_000),
        ];
        for (scope, n) in cases {
            let mut v = sample();
            v.set(n, scope);
            assert_eq!(v.get(scope), Some(n), "set({n}, {scope}) did not read back");
        }
    }

    #[test]
    fn writing_zero_is_a_write() {
        let mut v = sample();
        v.set_hour(0).set_minute(0).set_second(0);
        assert_eq!((v.hour(), v.minute(), v.second()), (Some(0), Some(0), Some(0)));
        assert_eq!(v.date(), Some(15));
    }

    #[test]
    fn month_is_one_based() {
        let v = Now::from_ymd_hms(2026, 1, 1, 0, 0, 0);
        assert_eq!(v.month(), Some(1));
        let fields = v.fields().unwrap();
        assert_eq!(fields.month, 1);
        assert_eq!(v.to_naive().unwrap().to_string(), "2026-01-01 00:00:00");
    }

    #[test]
    fn copies_are_isolated() {
        let a = sample();
        let mut b = a;
        b.add(1, Scope::Year);
        assert_eq!(a.year(), Some(2026));
        assert_eq!(b.year(), Some(2027));
    }

    #[test]
    fn set_day_moves_within_monday_week() {
        let mut v = sample();
        v.set_day(0);
        assert_eq!((v.date(), v.day()), (Some(12), Some(1)));

        let mut v = sample();
        v.set_day(6);
        assert_eq!((v.date(), v.day()), (Some(18), Some(0)));

        // From a Sunday, Monday is six days back.
        let mut v = Now::from_ymd_hms(2026, 1, 18, 0, 0, 0);
        v.set_day(0);
        assert_eq!(v.date(), Some(12));
    }

    #[test]
    fn date_overflow_rolls_into_month() {
        let mut v = sample();
        v.set_date(32);
        assert_eq!((v.month(), v.date()), (Some(2), Some(1)));

        let mut v = sample();
        v.set_date(0);
        assert_eq!((v.year(), v.month(), v.date()), (Some(2025), Some(12), Some(31)));

        let mut v = sample();
        v.set_hour(24);
        assert_eq!((v.date(), v.hour()), (Some(16), Some(0)));
    }

    #[test]
    fn month_write_clamps_date() {
        let mut v = Now::from_ymd_hms(2026, 1, 31, 0, 0, 0);
        v.set_month(2);
        assert_eq!((v.month(), v.date()), (Some(2), Some(28)));

        let mut v = Now::from_ymd_hms(2028, 2, 29, 0, 0, 0);
        v.set_year(2029);
        assert_eq!((v.month(), v.date()), (Some(2), Some(28)));

        let mut v = Now::from_ymd_hms(2026, 5, 31, 0, 0, 0);
        v.set_month(13);
        assert_eq!((v.year(), v.month(), v.date()), (Some(2027), Some(1), Some(31)));
    }

    #[test]
    fn add_and_sub() {
        let mut v = sample();
        v.add(20, Scope::Day);
        assert_eq!((v.month(), v.date()), (Some(2), Some(4)));
        v.sub(20, Scope::Date);
        assert_eq!(v, sample());

        let mut v = sample();
        v.add(90, Scope::Minute);
        assert_eq!((v.hour(), v.minute()), (Some(12), Some(0)));

        let mut v = sample();
        v.add(1, Scope::Decade);
        assert_eq!(v.year(), Some(2036));

        let mut v = sample();
        v.sub(3, Scope::Century);
        assert_eq!((v.year(), v.century()), (Some(1726), Some(1700)));
    }

    #[test]
    fn century_write_keeps_year_of_century() {
        let mut v = Now::from_ymd_hms(2028, 2, 29, 0, 0, 0);
        assert_eq!(v.century(), Some(2000));
        v.set_century(1987);
        assert_eq!((v.year(), v.month(), v.date()), (Some(1928), Some(2), Some(29)));
        v.set_century(1800);
        assert_eq!((v.year(), v.month(), v.date()), (Some(1828), Some(2), Some(29)));
        v.set_century(1700);
        assert_eq!(v.format("YYYY-MM-DD"), "1728-02-29");
        let mut v = Now::from_ymd_hms(2000, 2, 29, 0, 0, 0);
        v.set_century(1900);
        assert_eq!(v.format("YYYY-MM-DD"), "1900-02-28");
    }

    #[test]
    fn named_access_is_permissive() {
        let mut v = sample();
        assert_eq!(v.get_named("Months"), Some(1));
        assert_eq!(v.get_named("fortnight"), None);
        v.set_named(5, "fortnight");
        assert_eq!(v, sample());
        v.set_named(5, "HOURS");
        assert_eq!(v.hour(), Some(5));
    }

    #[test]
    fn set_str_coerces() {
        let mut v = sample();
        v.set_str(" 7 ", Scope::Month);
        assert_eq!(v.month(), Some(7));
        v.set_str("July", Scope::Month);
        assert!(!v.is_valid());
    }

    #[test]
    fn invalid_propagates() {
        let mut v = Now::invalid();
        v.set_year(2026).add(1, Scope::Day);
        assert!(!v.is_valid());
        assert_eq!(v.year(), None);
        assert_eq!(v.day(), None);
        assert_eq!(v.shortyear(), "NaN");
        assert_eq!(v.to_naive(), None);
    }

    #[test]
    fn out_of_range_write_invalidates() {
        let mut v = sample();
        v.set_year(1_000_000);
        assert!(!v.is_valid());
        assert!(!Now::from_instant(i64::MIN).is_valid());
    }

    #[test]
    fn years_are_bounded_to_four_digits() {
        let first = Now::from_ymd_hms(0, 1, 1, 0, 0, 0);
        assert_eq!(first.year(), Some(0));
        assert!(!first.prev_second().is_valid());
        assert!(!Now::from_ymd_hms(-5, 1, 1, 0, 0, 0).is_valid());

        let last = Now::from_ymd_hms(9999, 12, 31, 23, 59, 59);
        assert_eq!(last.year(), Some(9999));
        assert!(!last.next_second().is_valid());
        assert!(!Now::from_ymd_hms(12026, 3, 5, 0, 0, 0).is_valid());

        let mut v = sample();
        v.set_year(-1);
        assert!(!v.is_valid());
        let mut v = sample();
        v.add(800, Scope::Decade);
        assert!(!v.is_valid());
    }

    #[test]
    fn set_time_revives_invalid() {
        let mut v = Now::invalid();
        v.set_time(0);
        assert_eq!(v.year(), Some(1970));
    }

    #[test]
    fn shortyear() {
        assert_eq!(sample().shortyear(), "26");
        assert_eq!(Now::from_ymd_hms(5, 1, 1, 0, 0, 0).shortyear(), "05");
    }

    #[test]
    fn chrono_conversions() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let from_date = Now::from(date);
        assert_eq!((from_date.date(), from_date.hour()), (Some(15), Some(0)));

        let dt = date.and_hms_opt(10, 30, 45).unwrap();
        assert_eq!(Now::from(dt), sample());
        assert_eq!(sample().to_naive(), Some(dt));
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy + Send + Sync>() {}
        assert_copy::<Now>();
    }
}
