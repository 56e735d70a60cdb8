// crates/shared-kernel/src/value_objects/release.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Major/minor/revision triple. Only authoritative for official releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReleaseTriple {
    pub major: u8,
    pub minor: u8,
    pub revision: u8,
}

impl ReleaseTriple {
    #[inline]
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self { major, minor, revision }
    }
}

impl fmt::Display for ReleaseTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
