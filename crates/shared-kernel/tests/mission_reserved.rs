// crates/shared-kernel/tests/mission_reserved.rs
use elf2cfetbl_version_shared_kernel::{MissionRevision, VersionError};

#[test]
fn reserved_error_names_the_value() {
    let err = MissionRevision::try_mission(0xFF).unwrap_err();
    assert_eq!(err, VersionError::ReservedMissionRevision { value: 0xFF });
    assert!(err.to_string().contains("0xFF"));
    assert!(err.to_string().contains("1..=254"));
}

#[test]
fn upstream_markers_are_constructible() {
    assert_eq!(MissionRevision::new(0), MissionRevision::ZERO);
    assert_eq!(MissionRevision::new(0xFF), MissionRevision::DEVELOPMENT);
    assert!(!MissionRevision::DEVELOPMENT.is_mission());
}

#[test]
fn range_edges() {
    assert!(MissionRevision::try_mission(MissionRevision::MISSION_MIN).is_ok());
    assert!(MissionRevision::try_mission(MissionRevision::MISSION_MAX).is_ok());
}
