// crates/core/src/schema.rs
//! Revisions of the version-identification scheme.
//!
//! The banner layout and the meaning of the reserved mission revisions have
//! changed over time. Rather than silently reinterpreting old builds, each
//! layout is a [`SchemaRevision`] and every descriptor records the one it was
//! authored against.

use std::fmt;
use std::str::FromStr;

use elf2cfetbl_version_shared_kernel::{MissionRevision, VersionError};
use serde::{Serialize, Serializer};

use crate::descriptor::VersionDescriptor;

/// Serializes the same way it displays: `"1"`, `"2"`, `"3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaRevision {
    /// Three indented lines; `0x00` and `0xFF` both mean development.
    V1,
    /// Unindented, upper-case product line; `0x00` now marks an official release.
    V2,
    /// Adds the development-cycle line.
    V3,
}

/// How a build identifies itself, derived from its mission revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "mission_rev")]
pub enum BuildKind {
    Development,
    OfficialRelease,
    MissionPatch(u8),
}

impl SchemaRevision {
    pub const LATEST: Self = Self::V3;
    pub const ALL: [Self; 3] = [Self::V1, Self::V2, Self::V3];

    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }

    #[inline]
    pub const fn has_dev_cycle(self) -> bool {
        matches!(self, Self::V3)
    }

    pub const fn classify(self, mission_rev: MissionRevision) -> BuildKind {
        match (self, mission_rev.value()) {
            (_, 0xFF) | (Self::V1, 0x00) => BuildKind::Development,
            (_, 0x00) => BuildKind::OfficialRelease,
            (_, value) => BuildKind::MissionPatch(value),
        }
    }

    /// Fixed development-build banner of this revision.
    pub fn render_banner(self, descriptor: &VersionDescriptor) -> String {
        let product = descriptor.product;
        let version = descriptor.version_string();
        let codename = descriptor.codename;
        let last = descriptor.last_official;

        match self {
            // Spelling of the shipped revision-1 banner, kept byte for byte.
            Self::V1 => format!(
                " {product} Development Build\n \
                 {version} (Codename: {codename})\n \
                 Last Offical Release: {product} {last}"
            ),
            Self::V2 => format!(
                "{product} DEVELOPMENT BUILD\n\
                 {version} (Codename: {codename})\n\
                 Last Official Release: {product} {last}"
            ),
            Self::V3 => format!(
                "{product} DEVELOPMENT BUILD\n\
                 {version} (Codename: {codename})\n\
                 Development Cycle: {cycle}\n\
                 Last Official Release: {product} {last}",
                cycle = descriptor.dev_cycle.map(|c| c.as_str()).unwrap_or_default(),
            ),
        }
    }
}

impl fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for SchemaRevision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for SchemaRevision {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match digits {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            "3" => Ok(Self::V3),
            _ => Err(VersionError::UnknownSchema { input: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_marker_in_every_revision() {
        for schema in SchemaRevision::ALL {
            assert_eq!(schema.classify(MissionRevision::DEVELOPMENT), BuildKind::Development);
        }
    }

    #[test]
    fn zero_changed_meaning_after_first_revision() {
        assert_eq!(SchemaRevision::V1.classify(MissionRevision::ZERO), BuildKind::Development);
        assert_eq!(SchemaRevision::V2.classify(MissionRevision::ZERO), BuildKind::OfficialRelease);
        assert_eq!(SchemaRevision::V3.classify(MissionRevision::ZERO), BuildKind::OfficialRelease);
    }

    #[test]
    fn mission_range_is_a_patch() {
        let rev = MissionRevision::mission(12);
        for schema in SchemaRevision::ALL {
            assert_eq!(schema.classify(rev), BuildKind::MissionPatch(12));
        }
    }

    #[test]
    fn parses_with_and_without_prefix() {
        assert_eq!("3".parse::<SchemaRevision>(), Ok(SchemaRevision::V3));
        assert_eq!("v1".parse::<SchemaRevision>(), Ok(SchemaRevision::V1));
        assert_eq!(" V2 ".parse::<SchemaRevision>(), Ok(SchemaRevision::V2));
        assert_eq!(
            "4".parse::<SchemaRevision>(),
            Err(VersionError::UnknownSchema { input: "4".to_string() })
        );
    }

    #[test]
    fn first_revision_keeps_shipped_spelling() {
        let banner = crate::revisions::BOOTES.banner();
        assert!(banner.ends_with(" Last Offical Release: elf2cfetbl v3.1.0"));
        assert!(crate::revisions::DRACO.banner().contains("Last Official Release"));
    }

    #[test]
    fn serialized_form_matches_display() {
        for schema in SchemaRevision::ALL {
            let json = serde_json::to_value(schema).expect("serializes");
            assert_eq!(json, serde_json::Value::String(schema.to_string()));
        }
    }

    #[test]
    fn latest_is_last() {
        assert_eq!(SchemaRevision::ALL.last().copied(), Some(SchemaRevision::LATEST));
        assert_eq!(SchemaRevision::LATEST.to_string(), "3");
    }
}
