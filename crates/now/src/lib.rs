//! # tempo-now
//!
//! A mutable civil date/time value with token formatting, lenient parsing,
//! scope-driven arithmetic, walking, ranges and calendar grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"Now::parse()"| B["Now"]
//!     B -->|".format() / .code()"| A
//!     B -->|".set() / .add() / .modify()"| B
//!     B -->|".next() / .first() / .last()"| C["Now (copy)"]
//!     B -->|".range()"| D["Vec of Now"]
//!     B -->|".grid()"| D
//!     E["Translate"] -->|"names, presets"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tempo_now::{Now, Scope};
//!
//! let mut v = Now::parse("2026-01-31", "YYYY-MM-DD");
//! assert_eq!(v.next_month().format("YYYY-MM-DD"), "2026-02-28");
//!
//! v.modify("+1 day +2 hours");
//! assert_eq!(v.format("LLL"), "February 01, 2026 02:00");
//!
//! let days = v.first_date().range(&v.last_date(), Scope::Date)?;
//! assert_eq!(days.len(), 28);
//!
//! assert!(!Now::parse("not a date", "YYYY-MM-DD").is_valid());
//! # Ok::<(), tempo_now::NowError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `value` | [`Now`] and its scoped accessors and arithmetic |
//! | `scope` | [`Scope`] dispatch keys |
//! | `civil` | Proleptic Gregorian day-count conversions |
//! | `format` | Token formatting and integer codes |
//! | `parse` | Shape dispatch and template parsing |
//! | `modify` | Relative `"+3 days"` modifiers |
//! | `human` | Day and month labels |
//! | `compare` | Ordering predicates at a granularity |
//! | `walk` | `next`/`prev` and period bounds |
//! | `range` | Inclusive stepped sequences |
//! | `grid` | Calendar grids |
//! | `error` | Error types |

mod civil;
mod compare;
mod error;
mod format;
mod grid;
mod human;
mod modify;
mod parse;
mod range;
mod scope;
mod value;
mod walk;

pub use error::NowError;
pub use human::Human;
pub use scope::Scope;
pub use tempo_locale::{English, Locale, Translate};
pub use value::Now;
