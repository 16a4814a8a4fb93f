//! Grid command: print the calendar grid around a value.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tempo_now::Scope;
use tracing::{info, info_span};

use crate::cli::GridArgs;
use crate::convert::{self, Session};

/// Run the grid command.
pub fn run(args: GridArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("grid").entered();
    let value = session.value(Some(args.value.as_str()), &args.patterns)?;
    let scope = convert::parse_scope(&args.scope)?;

    let grid = match (scope, args.interval) {
        (Scope::Second, Some(i)) => value.seconds_grid(i),
        (Scope::Minute, Some(i)) => value.minutes_grid(i),
        (Scope::Hour, Some(i)) => value.hours_grid(i),
        (_, Some(_)) => bail!("--interval only applies to second, minute and hour grids"),
        (_, None) => value.grid(scope),
    }
    .with_context(|| format!("cannot build a {scope} grid"))?;
    info!(n = grid.len(), %scope, "grid built");

    let mut out = io::stdout().lock();
    for cell in &grid {
        writeln!(out, "{}", session.render(cell, &args.patterns))?;
    }
    Ok(())
}
