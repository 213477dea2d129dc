//! skillcheck - validation for agent skill definition files

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::{Result, bail};
use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, handle_validate};

/// Main entry point for the CLI application.
///
/// Argument errors print the usage text to stdout and map to a failure exit
/// code; `--help` and `--version` behave as usual and exit successfully.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            println!("{}", err.render());
            bail!("invalid arguments");
        }
    };

    handle_validate(&cli.skill)
}
