// crates/core/src/revisions.rs
//! Frozen descriptors, one per schema revision.
//!
//! Older entries are kept verbatim so their banners can still be rendered and
//! compared byte for byte. Only [`EQUULEUS`] follows the live constant table.

use elf2cfetbl_version_shared_kernel::{
    BuildBaseline, BuildNumber, Codename, DevCycleName, MissionRevision, ReleaseTag, ReleaseTriple,
};

use crate::constants;
use crate::descriptor::{ReleaseChannel, VersionDescriptor};
use crate::schema::SchemaRevision;

pub const BOOTES: VersionDescriptor = VersionDescriptor {
    product: "elf2cfetbl",
    schema: SchemaRevision::V1,
    channel: ReleaseChannel::Development,
    baseline: BuildBaseline::new("v3.1.0+dev"),
    build_number: BuildNumber::new(36),
    dev_cycle: None,
    codename: Codename::new("Bootes"),
    release: ReleaseTriple::new(3, 1, 0),
    mission_rev: MissionRevision::ZERO,
    last_official: ReleaseTag::new("v3.1.0"),
};

pub const DRACO: VersionDescriptor = VersionDescriptor {
    product: "elf2cfetbl",
    schema: SchemaRevision::V2,
    channel: ReleaseChannel::Development,
    baseline: BuildBaseline::new("v3.3.0-rc4"),
    build_number: BuildNumber::new(11),
    dev_cycle: None,
    codename: Codename::new("Draco"),
    release: ReleaseTriple::new(3, 1, 0),
    mission_rev: MissionRevision::DEVELOPMENT,
    last_official: ReleaseTag::new("v3.1.0"),
};

pub const EQUULEUS: VersionDescriptor = VersionDescriptor {
    product: constants::PRODUCT,
    schema: SchemaRevision::LATEST,
    channel: constants::RELEASE_CHANNEL,
    baseline: BuildBaseline::new(constants::BUILD_BASELINE),
    build_number: BuildNumber::new(constants::BUILD_NUMBER),
    dev_cycle: Some(DevCycleName::new(constants::BUILD_DEV_CYCLE)),
    codename: Codename::new(constants::BUILD_CODENAME),
    release: ReleaseTriple::new(
        constants::MAJOR_VERSION,
        constants::MINOR_VERSION,
        constants::REVISION,
    ),
    mission_rev: constants::MISSION,
    last_official: ReleaseTag::new(constants::LAST_OFFICIAL_RELEASE),
};

/// Oldest first.
pub const ALL: [VersionDescriptor; 3] = [BOOTES, DRACO, EQUULEUS];

impl VersionDescriptor {
    /// The descriptor this binary was built with.
    pub const CURRENT: Self = EQUULEUS;
}

pub const fn for_schema(schema: SchemaRevision) -> &'static VersionDescriptor {
    match schema {
        SchemaRevision::V1 => &BOOTES,
        SchemaRevision::V2 => &DRACO,
        SchemaRevision::V3 => &EQUULEUS,
    }
}
