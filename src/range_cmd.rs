//! Range command: print every step between two values.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::cli::RangeArgs;
use crate::convert::{self, Session};

/// Run the range command.
pub fn run(args: RangeArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("range").entered();
    if args.step < 1 {
        bail!("--step must be at least 1, got {}", args.step);
    }
    let scope = convert::parse_scope(&args.scope)?;
    let start = session.value(Some(args.start.as_str()), &args.patterns)?;
    let end = session.value(Some(args.end.as_str()), &args.patterns)?;

    let values = start
        .range_by(&end, scope, args.step)
        .with_context(|| format!("cannot build a range by {scope}"))?;
    info!(n = values.len(), %scope, step = args.step, "range built");

    let mut out = io::stdout().lock();
    for value in &values {
        writeln!(out, "{}", session.render(value, &args.patterns))?;
    }
    Ok(())
}
