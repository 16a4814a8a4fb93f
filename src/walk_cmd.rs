//! Walk command: step to a neighbour or to the bounds of the enclosing period.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::WalkArgs;
use crate::convert::{self, Session, Walk};

/// Run the walk command.
pub fn run(args: WalkArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("walk").entered();
    let value = session.value(Some(args.value.as_str()), &args.patterns)?;
    let action = convert::parse_walk(&args.action)?;
    let scope = convert::parse_scope(&args.scope)?;

    let moved = match action {
        Walk::Next => value.next(scope),
        Walk::Prev => value.prev(scope),
        Walk::First => value
            .first(scope)
            .with_context(|| format!("cannot take the first {scope}"))?,
        Walk::Last => value
            .last(scope)
            .with_context(|| format!("cannot take the last {scope}"))?,
    };
    debug!(from = %value, to = %moved, ?action, %scope, "walked");

    writeln!(io::stdout().lock(), "{}", session.render(&moved, &args.patterns))?;
    Ok(())
}
