// src/presentation.rs
use elf2cfetbl_version_core::{BuildKind, Result, VersionDescriptor};
use serde::Serialize;

use crate::config::{ReportConfig, ReportMode};
use crate::options::OutputFormat;

/// Structured dump: raw descriptor fields plus every derived rendering.
#[derive(Debug, Serialize)]
pub struct VersionReport<'a> {
    #[serde(flatten)]
    pub descriptor: &'a VersionDescriptor,
    pub version: String,
    pub banner: String,
    pub official_version: String,
    pub build_kind: BuildKind,
}

impl<'a> VersionReport<'a> {
    pub fn new(descriptor: &'a VersionDescriptor) -> Self {
        Self {
            descriptor,
            version: descriptor.version_string(),
            banner: descriptor.banner(),
            official_version: descriptor.official_version(),
            build_kind: descriptor.build_kind(),
        }
    }
}

pub fn render(config: &ReportConfig) -> Result<String> {
    let descriptor = config.descriptor();
    match config.mode {
        ReportMode::Banner => Ok(descriptor.authoritative_banner()),
        ReportMode::Short => Ok(descriptor.authoritative_version()),
        ReportMode::Structured(format) => render_structured(descriptor, format),
    }
}

fn render_structured(descriptor: &VersionDescriptor, format: OutputFormat) -> Result<String> {
    let report = VersionReport::new(descriptor);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
        OutputFormat::Text => Ok(descriptor.authoritative_banner()),
    }
}
