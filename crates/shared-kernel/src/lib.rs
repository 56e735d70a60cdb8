// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{Result, VersionError};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    BuildBaseline, BuildNumber, Codename, DevCycleName, MissionRevision, ReleaseTag, ReleaseTriple,
};
