// crates/core/src/descriptor.rs
use std::fmt;

use elf2cfetbl_version_shared_kernel::{
    BuildBaseline, BuildNumber, Codename, DevCycleName, MissionRevision, ReleaseTag, ReleaseTriple,
    Result, VersionError,
};
use serde::Serialize;

use crate::schema::{BuildKind, SchemaRevision};

/// Longest version string or banner a descriptor may render.
pub const MAX_VERSION_STRING_LEN: usize = 256;

/// Which set of fields identifies a build. Fixed per build, never stored at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    /// Baseline plus build number.
    Development,
    /// Major.minor.revision plus mission revision.
    Official,
}

impl ReleaseChannel {
    /// Whether a mission revision classified as `kind` may ship on this channel.
    pub const fn admits(self, kind: BuildKind) -> bool {
        matches!(
            (self, kind),
            (_, BuildKind::MissionPatch(_))
                | (Self::Development, BuildKind::Development)
                | (Self::Official, BuildKind::OfficialRelease)
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Official => "official",
        }
    }
}

/// Every identifier of one build of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionDescriptor {
    pub product: &'static str,
    pub schema: SchemaRevision,
    pub channel: ReleaseChannel,
    pub baseline: BuildBaseline,
    pub build_number: BuildNumber,
    pub dev_cycle: Option<DevCycleName>,
    pub codename: Codename,
    pub release: ReleaseTriple,
    pub mission_rev: MissionRevision,
    pub last_official: ReleaseTag,
}

static_assertions::assert_impl_all!(VersionDescriptor: Copy, Send, Sync);

/// `baseline` immediately followed by the decimal digits of `build_number`.
///
/// No separator is inserted: `("v3.3.0-rc4", 11)` gives `"v3.3.0-rc411"`.
pub fn build_version_string(baseline: &str, build_number: u64) -> String {
    let digits = crate::stringify::Decimal::new(build_number);
    let mut out = String::with_capacity(baseline.len() + digits.len());
    out.push_str(baseline);
    out.push_str(digits.as_str());
    out
}

impl VersionDescriptor {
    /// Development version string, e.g. `v3.1.0+dev36`.
    pub fn version_string(&self) -> String {
        build_version_string(self.baseline.as_str(), u64::from(self.build_number.value()))
    }

    /// Multi-line development banner in this descriptor's schema layout.
    pub fn banner(&self) -> String {
        self.schema.render_banner(self)
    }

    /// Official-release version, `v{major}.{minor}.{revision}.{mission_rev}`.
    pub fn official_version(&self) -> String {
        format!("v{}.{}", self.release, self.mission_rev)
    }

    pub fn official_banner(&self) -> String {
        format!("{} {}", self.product, self.official_version())
    }

    /// The version string of whichever field set the channel makes authoritative.
    pub fn authoritative_version(&self) -> String {
        match self.channel {
            ReleaseChannel::Development => self.version_string(),
            ReleaseChannel::Official => self.official_version(),
        }
    }

    pub fn authoritative_banner(&self) -> String {
        match self.channel {
            ReleaseChannel::Development => self.banner(),
            ReleaseChannel::Official => self.official_banner(),
        }
    }

    pub const fn build_kind(&self) -> BuildKind {
        self.schema.classify(self.mission_rev)
    }

    #[inline]
    pub const fn is_development(&self) -> bool {
        matches!(self.build_kind(), BuildKind::Development)
    }

    /// Re-checks the authoring rules the constant table enforces at compile time.
    pub fn validate(&self) -> Result<()> {
        non_empty("product", self.product)?;
        non_empty("build baseline", self.baseline.as_str())?;
        non_empty("codename", self.codename.as_str())?;
        non_empty("last official release", self.last_official.as_str())?;

        if self.schema.has_dev_cycle() {
            match self.dev_cycle {
                Some(cycle) => non_empty("development cycle", cycle.as_str())?,
                None => return Err(VersionError::EmptyField { field: "development cycle" }),
            }
        }

        let kind = self.build_kind();
        if !self.channel.admits(kind) {
            return Err(VersionError::ChannelMismatch {
                channel: self.channel.as_str(),
                mission_rev: self.mission_rev.value(),
            });
        }

        within_limit("version string", self.authoritative_version().len())?;
        within_limit("version banner", self.authoritative_banner().len())?;
        Ok(())
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.authoritative_version())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(VersionError::EmptyField { field })
    } else {
        Ok(())
    }
}

fn within_limit(field: &'static str, len: usize) -> Result<()> {
    if len > MAX_VERSION_STRING_LEN {
        Err(VersionError::TooLong { field, len, max: MAX_VERSION_STRING_LEN })
    } else {
        Ok(())
    }
}
