//! Compare and between commands: ordering predicates at a granularity.

use std::cmp::Ordering;
use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::info_span;

use crate::cli::{BetweenArgs, CompareArgs};
use crate::convert::Session;

/// Print `before`, `after` or `equal` for `a` relative to `b`.
pub fn compare(args: CompareArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("compare").entered();
    let a = session.value(Some(args.a.as_str()), &args.patterns)?;
    let b = session.value(Some(args.b.as_str()), &args.patterns)?;

    let word = match a.compare(&b, &args.at) {
        Some(Ordering::Less) => "before",
        Some(Ordering::Greater) => "after",
        Some(Ordering::Equal) => "equal",
        None => bail!(
            "{:?} does not render an integer; use a pattern such as YYYYMMDD",
            args.at
        ),
    };
    writeln!(io::stdout().lock(), "{word}")?;
    Ok(())
}

/// Print whether `value` lies strictly between `start` and `end`.
pub fn between(args: BetweenArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("between").entered();
    let value = session.value(Some(args.value.as_str()), &args.patterns)?;
    let start = session.value(Some(args.start.as_str()), &args.patterns)?;
    let end = session.value(Some(args.end.as_str()), &args.patterns)?;

    let inside = value.between_at(&start, &end, &args.at);
    writeln!(io::stdout().lock(), "{inside}")?;
    Ok(())
}
