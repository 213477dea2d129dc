//! CLI definition and the validate handler

pub(crate) mod report;
mod validate;

use clap::Parser;
use std::path::PathBuf;

pub use validate::handle_validate;

/// skillcheck - validate an agent skill definition file
#[derive(Parser, Debug)]
#[command(name = "skillcheck", version, about, long_about = None)]
pub struct Cli {
    /// Path to the skill file to validate
    pub skill: PathBuf,
}
