// crates/shared-kernel/src/value_objects/baseline.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VersionError};

/// Source-control tag a development build counts its changes from.
///
/// The text is used verbatim as the prefix of the version string, so it
/// usually ends in something that reads well before a digit group, such as
/// `+dev` or `-rc4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BuildBaseline(&'static str);

impl BuildBaseline {
    #[inline]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Same as [`BuildBaseline::new`] but rejects an empty tag.
    pub const fn try_new(tag: &'static str) -> Result<Self> {
        if tag.is_empty() {
            return Err(VersionError::EmptyField { field: "build baseline" });
        }
        Ok(Self(tag))
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for BuildBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Number of changes since the [`BuildBaseline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildNumber(u32);

impl BuildNumber {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for BuildNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
