// crates/shared-kernel/src/value_objects/mission.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionError};

/// Byte-sized patch marker for downstream mission forks.
///
/// `0x00` and `0xFF` belong to upstream development; forks may only assign
/// `1..=254`. Upstream code builds its markers with [`MissionRevision::ZERO`]
/// or [`MissionRevision::DEVELOPMENT`], forks go through
/// [`MissionRevision::mission`], which refuses the reserved values:
///
/// ```compile_fail
/// use elf2cfetbl_version_shared_kernel::MissionRevision;
///
/// const FORK_REV: MissionRevision = MissionRevision::mission(0xFF);
/// println!("{FORK_REV}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionRevision(u8);

impl MissionRevision {
    pub const ZERO: Self = Self(0x00);
    pub const DEVELOPMENT: Self = Self(0xFF);

    pub const MISSION_MIN: u8 = 1;
    pub const MISSION_MAX: u8 = 254;

    /// Wraps any byte, reserved values included. Meant for upstream markers.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Mission-assigned revision. Panics on a reserved value, which in a
    /// `const` initializer fails the build.
    pub const fn mission(value: u8) -> Self {
        assert!(
            Self::is_mission_value(value),
            "mission revision must be in 1..=254; 0x00 and 0xFF are reserved upstream"
        );
        Self(value)
    }

    pub const fn try_mission(value: u8) -> Result<Self> {
        if Self::is_mission_value(value) {
            Ok(Self(value))
        } else {
            Err(VersionError::ReservedMissionRevision { value })
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_reserved(self) -> bool {
        !Self::is_mission_value(self.0)
    }

    #[inline]
    pub const fn is_mission(self) -> bool {
        Self::is_mission_value(self.0)
    }

    const fn is_mission_value(value: u8) -> bool {
        value >= Self::MISSION_MIN && value <= Self::MISSION_MAX
    }
}

impl fmt::Display for MissionRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
