//! Inclusive sequences between two values.

use tracing::trace;

use crate::error::NowError;
use crate::scope::Scope;
use crate::value::Now;

impl Now {
    /// Every `scope` step from `self` to `end`, both ends included.
    ///
    /// Endpoints are compared at the scope's granularity, so a date range
    /// ignores the time of day. They may be given in either order. An
    /// invalid endpoint yields an empty vector.
    ///
    /// Only calendar scopes (`Day`, `Date`, `Month`, `Year`, `Decade`,
    /// `Century`) step a range; the others are rejected with
    /// [`NowError::InvalidScope`].
    pub fn range(&self, end: &Now, scope: Scope) -> Result<Vec<Now>, NowError> {
        self.range_by(end, scope, 1)
    }

    /// Like [`Now::range`], advancing `step` units at a time.
    ///
    /// The last entry is the final step that does not pass `end`. A `step`
    /// below 1 yields an empty vector.
    #[tracing::instrument(level = "trace", skip(self, end), fields(start = %self, end = %end))]
    pub fn range_by(&self, end: &Now, scope: Scope, step: i64) -> Result<Vec<Now>, NowError> {
        if !scope.is_calendar() {
            return Err(NowError::InvalidScope {
                scope: scope.to_string(),
            });
        }
        Ok(self.steps(end, scope, step))
    }

    pub(crate) fn steps(&self, end: &Now, scope: Scope, step: i64) -> Vec<Now> {
        let format = scope.code_format();
        let (Some(a), Some(b)) = (self.code(format), end.code(format)) else {
            return Vec::new();
        };
        if step < 1 {
            return Vec::new();
        }
        let (mut cursor, stop) = if a > b { (*end, a) } else { (*self, b) };

        let mut out = Vec::new();
        let mut last = None;
        while let Some(code) = cursor.code(format) {
            // Stop once a step no longer advances.
            if code > stop || last.is_some_and(|prev| code <= prev) {
                break;
            }
            out.push(cursor);
            last = Some(code);
            cursor.add(step, scope);
        }
        trace!(%scope, len = out.len(), "range built");
        out
    }
}
