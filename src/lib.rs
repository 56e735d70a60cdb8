// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

/// Version reported by `--version`: whichever rendering the release channel makes authoritative.
pub const VERSION: &str = elf2cfetbl_version_core::constants::AUTHORITATIVE_VERSION;
