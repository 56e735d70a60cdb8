// crates/shared-kernel/src/value_objects/mod.rs
pub mod baseline;
pub mod mission;
pub mod names;
pub mod release;

pub use baseline::{BuildBaseline, BuildNumber};
pub use mission::MissionRevision;
pub use names::{Codename, DevCycleName, ReleaseTag};
pub use release::ReleaseTriple;
