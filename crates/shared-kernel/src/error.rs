// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Authoring errors in a version descriptor.
///
/// None of these can occur in a correctly built binary: the constant table is
/// checked at compile time. They surface when a descriptor is assembled from
/// other inputs (tests, `--check`, review tooling).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Empty field: {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Reserved mission revision: {value:#04X} is reserved for upstream use (mission range is 1..=254)")]
    ReservedMissionRevision { value: u8 },

    #[error("Mission revision {mission_rev:#04X} cannot ship on the {channel} channel")]
    ChannelMismatch {
        channel: &'static str,
        mission_rev: u8,
    },

    #[error("Field too long: {field} is {len} bytes, maximum is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Unknown schema revision: '{input}'")]
    UnknownSchema { input: String },

    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;

impl From<serde_json::Error> for VersionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for VersionError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}
