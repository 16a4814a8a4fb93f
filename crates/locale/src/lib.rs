//! # tempo-locale
//!
//! The translation collaborator used by `tempo-now` for human-readable names
//! and named format presets.
//!
//! Lookups never fail: a key without a translation resolves to itself, so an
//! empty [`Locale`] behaves exactly like [`English`].
//!
//! ## Quick Start
//!
//! ```
//! use tempo_locale::{English, Locale, Translate, expand_preset};
//!
//! let de = Locale::new().with_translation("March", "März");
//! assert_eq!(de.trans("March"), "März");
//! assert_eq!(de.trans("April"), "April");
//!
//! assert_eq!(expand_preset("L", &English), "DD/MM/YYYY");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `translate` | [`Translate`] trait, [`English`] and table-driven [`Locale`] |
//! | `names` | English day/month tables used as translation keys |
//! | `presets` | `L`/`LL`/`LLL`/`LLLL`/`LT`/`LTS` patterns |
//! | `error` | Error types |

mod error;
mod names;
mod presets;
mod translate;

pub use error::LocaleError;
pub use names::{DAY_NAMES, MONTH_NAMES, day_name, month_name, truncate};
pub use presets::{DEFAULT_FORMAT, PRESETS, builtin_preset, expand_preset, is_preset};
pub use translate::{English, Locale, Translate};
