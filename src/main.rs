mod cli;
mod compare_cmd;
mod config;
mod convert;
mod format_cmd;
mod grid_cmd;
mod logging;
mod range_cmd;
mod walk_cmd;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::convert::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command, cli.config.as_deref()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command, config: Option<&Path>) -> Result<()> {
    let session = Session::load(config)?;
    match command {
        Command::Format(args) => format_cmd::run(args, &session),
        Command::Walk(args) => walk_cmd::run(args, &session),
        Command::Range(args) => range_cmd::run(args, &session),
        Command::Grid(args) => grid_cmd::run(args, &session),
        Command::Compare(args) => compare_cmd::compare(args, &session),
        Command::Between(args) => compare_cmd::between(args, &session),
    }
}
