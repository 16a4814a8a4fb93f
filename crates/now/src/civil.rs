//! Proleptic Gregorian day-count arithmetic.
//!
//! Every field write goes through [`Fields::to_instant`], which folds
//! out-of-range fields into their coarser neighbours the way a host date
//! primitive would: months roll into years, dates into months via a day
//! count, and time-of-day fields linearly into milliseconds.

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Midnight of 0000-01-01, the earliest valid instant.
///
/// Valid years are 0..=9999 so that `YYYY` is always four digits and
/// `YYYYMMDD`-style codes order the same way as instants.
pub(crate) const MIN_INSTANT: i64 = -719_528 * MS_PER_DAY;

/// The last millisecond of 9999-12-31, the latest valid instant.
pub(crate) const MAX_INSTANT: i64 = 2_932_897 * MS_PER_DAY - 1;

/// Days from 1970-01-01 to the civil date `year-month-day`.
///
/// `month` must be 1..=12; `day` may be any value and is added linearly,
/// so `day = 0` is the last day of the previous month.
/// Algorithm based on `days_from_civil` by Howard Hinnant.
pub(crate) fn days_from_civil(year: i128, month: i128, day: i128) -> i128 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil `(year, month, day)` of a day count since 1970-01-01.
///
/// Inverse of [`days_from_civil`]. Algorithm based on `civil_from_days` by
/// Howard Hinnant.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}

pub(crate) fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in `month` (1..=12) of `year`.
pub(crate) fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of a day count, 0 = Sunday. 1970-01-01 was a Thursday.
pub(crate) fn weekday_from_days(days: i64) -> i64 {
    (days + 4).rem_euclid(7)
}

/// Broken-down civil fields of an instant.
///
/// `month` is 1-based here; fields may hold out-of-range values between a
/// write and the next [`Fields::to_instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: i64,
    pub month: i64,
    pub date: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millis: i64,
}

impl Fields {
    pub fn from_instant(instant: i64) -> Self {
        let days = instant.div_euclid(MS_PER_DAY);
        let ms = instant.rem_euclid(MS_PER_DAY);
        let (year, month, date) = civil_from_days(days);
        Self {
            year,
            month: i64::from(month),
            date: i64::from(date),
            hour: ms / MS_PER_HOUR,
            minute: ms % MS_PER_HOUR / MS_PER_MINUTE,
            second: ms % MS_PER_MINUTE / MS_PER_SECOND,
            millis: ms % MS_PER_SECOND,
        }
    }

    /// Normalizes all fields into an instant.
    ///
    /// Returns `None` when the result falls outside years 0..=9999.
    pub fn to_instant(self) -> Option<i64> {
        let months = i128::from(self.month) - 1;
        let year = i128::from(self.year) + months.div_euclid(12);
        let month = months.rem_euclid(12) + 1;
        let days = days_from_civil(year, month, 1) + i128::from(self.date) - 1;
        let ms = days * i128::from(MS_PER_DAY)
            + i128::from(self.hour) * i128::from(MS_PER_HOUR)
            + i128::from(self.minute) * i128::from(MS_PER_MINUTE)
            + i128::from(self.second) * i128::from(MS_PER_SECOND)
            + i128::from(self.millis);
        if !(i128::from(MIN_INSTANT)..=i128::from(MAX_INSTANT)).contains(&ms) {
            return None;
        }
        i64::try_from(ms).ok()
    }

    /// Folds `month` into `year` and clamps `date` to the month's length.
    ///
    /// Month and year writes go through this so that Jan 31 plus one month
    /// lands on the last day of February.
    pub fn clamp_date(&mut self) {
        let months = self.month.saturating_sub(1);
        self.year = self.year.saturating_add(months.div_euclid(12));
        self.month = months.rem_euclid(12) + 1;
        self.date = self.date.min(days_in_month(self.year, self.month));
    }
}
