// src/config.rs
use elf2cfetbl_version_core::{SchemaRevision, VersionDescriptor, revisions};

use crate::args::Args;
use crate::options::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Banner,
    Short,
    Structured(OutputFormat),
}

#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    pub mode: ReportMode,
    pub schema: SchemaRevision,
    pub check: bool,
    pub verbose: u8,
}

impl ReportConfig {
    pub fn descriptor(&self) -> &'static VersionDescriptor {
        revisions::for_schema(self.schema)
    }
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        let mode = match (args.short, args.format) {
            (true, _) => ReportMode::Short,
            (false, OutputFormat::Text) => ReportMode::Banner,
            (false, format) => ReportMode::Structured(format),
        };

        Self {
            mode,
            schema: args.schema.unwrap_or(SchemaRevision::LATEST),
            check: args.check,
            verbose: args.verbose,
        }
    }
}
