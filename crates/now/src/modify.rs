//! Relative modifier strings such as `"+3 days -1 month"`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::scope::Scope;
use crate::value::Now;

// Terms are separated by whitespace.
static MODIFIER: LazyLock<Regex> = LazyLock::new(|| {
    let term = r"[+-]?\d+\s*(?:second|minute|hour|day|date|week|month|year)s?";
    Regex::new(&format!(r"(?i)^\s*{term}(?:\s+{term})*\s*$"))
        .expect("modifier pattern is valid")
});

static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([+-]?\d+)\s*(second|minute|hour|day|date|week|month|year)s?")
        .expect("modifier term pattern is valid")
});

/// Units in the order their totals are applied, finest first.
const UNITS: [(&str, Scope, i64); 8] = [
    ("second", Scope::Second, 1),
    ("minute", Scope::Minute, 1),
    ("hour", Scope::Hour, 1),
    ("day", Scope::Date, 1),
    ("date", Scope::Date, 1),
    ("week", Scope::Date, 7),
    ("month", Scope::Month, 1),
    ("year", Scope::Year, 1),
];

impl Now {
    /// Returns `true` if `value` is one or more whitespace-separated
    /// `[+-]N unit` terms.
    ///
    /// Units are `second`, `minute`, `hour`, `day`/`date`, `week`, `month`
    /// and `year`, singular or plural, in any case.
    pub fn is_modifiable(value: &str) -> bool {
        MODIFIER.is_match(value)
    }

    /// Applies every `[+-]N unit` term found in `value`.
    ///
    /// Counts for the same unit are summed, then applied seconds first and
    /// years last. Text that is not a term is ignored.
    pub fn modify(&mut self, value: &str) -> &mut Self {
        let mut totals = [0_i64; UNITS.len()];
        for caps in TERM.captures_iter(value) {
            let Ok(count) = caps[1].parse::<i64>() else {
                continue;
            };
            let unit = caps[2].to_ascii_lowercase();
            if let Some(slot) = UNITS.iter().position(|(name, _, _)| *name == unit) {
                totals[slot] = totals[slot].saturating_add(count.saturating_mul(UNITS[slot].2));
            }
        }
        debug!(value, ?totals, "applying modifier");
        for ((_, scope, _), total) in UNITS.iter().zip(totals) {
            if total != 0 {
                self.add(total, *scope);
            }
        }
        self
    }
}
