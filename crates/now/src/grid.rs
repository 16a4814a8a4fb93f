//! Calendar grids: every value of a field within its enclosing period.
//!
//! | Grid | Covers | Entries |
//! |------|--------|---------|
//! | `seconds_grid(i)` | the minute | `60 / i` |
//! | `minutes_grid(i)` | the hour | `60 / i` |
//! | `hours_grid(i)` | the day | `24 / i` |
//! | `days_grid()` | Monday before the 1st to Sunday after the last | 28 to 42 |
//! | `dates_grid()` | the month | 28 to 31 |
//! | `months_grid()` | the year | 12 |
//! | `years_grid()` | the decade | 10 |
//! | `decades_grid()` | the century | 10 |

use tracing::trace;

use crate::error::NowError;
use crate::scope::Scope;
use crate::value::Now;

impl Now {
    /// Dispatches to the grid for `scope` with an interval of 1.
    ///
    /// `Time` and `Century` have no grid.
    pub fn grid(&self, scope: Scope) -> Result<Vec<Now>, NowError> {
        match scope {
            Scope::Second => self.seconds_grid(1),
            Scope::Minute => self.minutes_grid(1),
            Scope::Hour => self.hours_grid(1),
            Scope::Day => Ok(self.days_grid()),
            Scope::Date => Ok(self.dates_grid()),
            Scope::Month => Ok(self.months_grid()),
            Scope::Year => Ok(self.years_grid()),
            Scope::Decade => Ok(self.decades_grid()),
            Scope::Century | Scope::Time => Err(NowError::InvalidScope {
                scope: scope.to_string(),
            }),
        }
    }

    /// Looks the scope up by name, then defers to [`Now::grid`].
    pub fn grid_named(&self, scope: &str) -> Result<Vec<Now>, NowError> {
        self.grid(scope.parse()?)
    }

    fn clock_grid(&self, scope: Scope, span: u32, interval: u32) -> Result<Vec<Now>, NowError> {
        if interval == 0 {
            return Err(NowError::InvalidInterval { interval });
        }
        if !self.is_valid() {
            return Ok(Vec::new());
        }
        let grid: Vec<Now> = (0..span)
            .step_by(interval as usize)
            .map(|k| {
                let mut copy = *self;
                copy.set(i64::from(k), scope);
                copy
            })
            .collect();
        trace!(%scope, interval, len = grid.len(), "clock grid built");
        Ok(grid)
    }

    /// Copies of `self` at seconds `0, i, 2i, ...` below 60.
    pub fn seconds_grid(&self, interval: u32) -> Result<Vec<Now>, NowError> {
        self.clock_grid(Scope::Second, 60, interval)
    }

    /// Copies of `self` at minutes `0, i, 2i, ...` below 60.
    pub fn minutes_grid(&self, interval: u32) -> Result<Vec<Now>, NowError> {
        self.clock_grid(Scope::Minute, 60, interval)
    }

    /// Copies of `self` at hours `0, i, 2i, ...` below 24.
    pub fn hours_grid(&self, interval: u32) -> Result<Vec<Now>, NowError> {
        self.clock_grid(Scope::Hour, 24, interval)
    }

    /// Whole weeks covering the month, Monday to Sunday.
    pub fn days_grid(&self) -> Vec<Now> {
        let start = self.first_date().first_day();
        let end = self.last_date().last_day();
        start.steps(&end, Scope::Date, 1)
    }

    pub fn dates_grid(&self) -> Vec<Now> {
        self.first_date().steps(&self.last_date(), Scope::Date, 1)
    }

    pub fn months_grid(&self) -> Vec<Now> {
        self.first_month().steps(&self.last_month(), Scope::Month, 1)
    }

    pub fn years_grid(&self) -> Vec<Now> {
        self.first_year().steps(&self.last_year(), Scope::Year, 1)
    }

    /// The first year of each decade in the century.
    pub fn decades_grid(&self) -> Vec<Now> {
        self.first_decade().steps(&self.last_decade(), Scope::Decade, 1)
    }
}
