//! Error types for the tempo-now crate.
//!
//! Malformed *data* (an unparsable date string) never produces an error: it
//! produces an invalid [`Now`](crate::Now). These variants cover contract
//! violations by the caller.

/// Error type for all fallible operations in the tempo-now crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NowError {
    /// Returned when a scope name is unknown, or known but not meaningful for
    /// the operation (e.g. the first `time`).
    #[error("Invalid scope \"{scope}\"")]
    InvalidScope {
        /// The rejected scope name.
        scope: String,
    },

    /// Returned when a weekday index falls outside the day-name table.
    #[error("Invalid day index \"{index}\"")]
    InvalidDayIndex {
        /// The rejected index, or `NaN` for an invalid value.
        index: String,
    },

    /// Returned when a month index falls outside the month-name table.
    #[error("Invalid month index \"{index}\"")]
    InvalidMonthIndex {
        /// The rejected index, or `NaN` for an invalid value.
        index: String,
    },

    /// Returned when a grid interval is zero.
    #[error("Invalid interval \"{interval}\"")]
    InvalidInterval {
        /// The rejected interval.
        interval: u32,
    },
}
