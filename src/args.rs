// src/args.rs
use clap::{ArgAction, Parser};
use elf2cfetbl_version_core::SchemaRevision;

use crate::options::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "elf2cfetbl-version",
    version = crate::VERSION,
    about = "Print the build identification of the elf2cfetbl table converter"
)]
pub struct Args {
    /// Print only the version string
    #[arg(long, conflicts_with = "format")]
    pub short: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Render an earlier layout of the scheme (1, 2 or 3)
    #[arg(long)]
    pub schema: Option<SchemaRevision>,

    /// Re-check the authoring rules and fail if any is broken
    #[arg(long)]
    pub check: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
