//! Format command: parse a value, optionally shift it, and print it.

use std::io::{self, Write};

use anyhow::{Result, bail};
use tempo_now::Now;
use tracing::{debug, info_span};

use crate::cli::FormatArgs;
use crate::convert::{self, Session};

/// Run the format command.
pub fn run(args: FormatArgs, session: &Session) -> Result<()> {
    let _cmd = info_span!("format").entered();
    let mut value = session.value(args.value.as_deref(), &args.patterns)?;

    if let Some(modifier) = &args.modify {
        if !Now::is_modifiable(modifier) {
            bail!("not a modifier: {modifier:?} (expected e.g. \"+3 days -1 hour\")");
        }
        value.modify(modifier);
        debug!(%value, "modifier applied");
    }

    let line = match &args.human {
        Some(scope) => {
            let scope = convert::parse_scope(scope)?;
            value
                .human_with(scope, args.truncate, &session.locale)?
                .to_string()
        }
        None => session.render(&value, &args.patterns),
    };
    writeln!(io::stdout().lock(), "{line}")?;
    Ok(())
}
