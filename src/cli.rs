use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tempo date/time toolkit.
#[derive(Parser)]
#[command(
    name = "tempo",
    version,
    about = "Format, parse, walk and tabulate civil dates and times"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./tempo.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a value (or take the current time) and print it.
    Format(FormatArgs),
    /// Step to a neighbouring value or to the bounds of its period.
    Walk(WalkArgs),
    /// Print every step between two values.
    Range(RangeArgs),
    /// Print the calendar grid around a value.
    Grid(GridArgs),
    /// Report how two values are ordered.
    Compare(CompareArgs),
    /// Report whether a value lies strictly between two others.
    Between(BetweenArgs),
}

/// Input and output patterns shared by every subcommand.
#[derive(clap::Args)]
pub struct Patterns {
    /// Pattern used to read input values when no common shape matches.
    #[arg(short, long = "input-format")]
    pub input_format: Option<String>,

    /// Pattern used to print values; overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Value to parse; the current time if omitted.
    pub value: Option<String>,

    /// Relative modifier applied after parsing, e.g. "+3 days -1 hour".
    #[arg(short, long)]
    pub modify: Option<String>,

    /// Print the label of one field (day, month, year, ...) instead.
    #[arg(long)]
    pub human: Option<String>,

    /// Truncate `--human` names to this many characters.
    #[arg(long, requires = "human")]
    pub truncate: Option<usize>,

    #[command(flatten)]
    pub patterns: Patterns,
}

/// Arguments for the `walk` subcommand.
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Value to start from.
    pub value: String,

    /// One of next, prev, first or last.
    pub action: String,

    /// Scope to walk by, e.g. hour, date, month, decade or century.
    pub scope: String,

    #[command(flatten)]
    pub patterns: Patterns,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First value.
    pub start: String,

    /// Last value.
    pub end: String,

    /// Scope to step by (day, date, month, year, decade, century).
    #[arg(short, long, default_value = "date")]
    pub scope: String,

    /// Number of scope units per step.
    #[arg(long, default_value_t = 1)]
    pub step: i64,

    #[command(flatten)]
    pub patterns: Patterns,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Value whose period is tabulated.
    pub value: String,

    /// Grid scope (seconds, minutes, hours, days, dates, months, years, decades).
    pub scope: String,

    /// Spacing for second, minute and hour grids.
    #[arg(long)]
    pub interval: Option<u32>,

    #[command(flatten)]
    pub patterns: Patterns,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    pub a: String,

    pub b: String,

    /// Comparison granularity as a pattern, e.g. YYYYMMDD or HHmmss.
    #[arg(long, default_value = "x")]
    pub at: String,

    #[command(flatten)]
    pub patterns: Patterns,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    pub value: String,

    pub start: String,

    pub end: String,

    /// Comparison granularity as a pattern.
    #[arg(long, default_value = "YYYYMMDD")]
    pub at: String,

    #[command(flatten)]
    pub patterns: Patterns,
}
