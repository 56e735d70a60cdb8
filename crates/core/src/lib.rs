// crates/core/src/lib.rs
//! Version identification for the `elf2cfetbl` table converter.
//!
//! The identifiers of a build live in [`constants`] and are fixed by the
//! compiler. [`VersionDescriptor`] bundles them into one value that host code
//! can render, serialize, or re-check, and [`revisions`] keeps the earlier
//! layouts of the scheme around.
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod constants;
pub mod descriptor;
pub mod revisions;
pub mod schema;
pub mod stringify;

pub use descriptor::{MAX_VERSION_STRING_LEN, ReleaseChannel, VersionDescriptor, build_version_string};
pub use schema::{BuildKind, SchemaRevision};
pub use stringify::{Decimal, decimal_len};

pub use elf2cfetbl_version_shared_kernel::{
    BuildBaseline, BuildNumber, Codename, DevCycleName, MissionRevision, ReleaseTag, ReleaseTriple,
    Result, VersionError,
};
