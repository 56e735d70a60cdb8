// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use elf2cfetbl_version::args::Args;
use elf2cfetbl_version::config::ReportConfig;
use elf2cfetbl_version::{logging, presentation};
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = ReportConfig::from(args);
    logging::init(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ReportConfig) -> Result<()> {
    debug!(?config, "resolved report configuration");
    let descriptor = config.descriptor();

    if config.check {
        if let Err(e) = descriptor.validate() {
            warn!(schema = %descriptor.schema, "descriptor failed validation");
            return Err(e)
                .with_context(|| format!("schema {} descriptor is malformed", descriptor.schema));
        }
        info!(schema = %descriptor.schema, kind = ?descriptor.build_kind(), "descriptor is valid");
    }

    let output = presentation::render(config).context("rendering version report")?;
    println!("{output}");
    Ok(())
}
