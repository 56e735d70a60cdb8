// crates/shared-kernel/tests/triple_display.rs
use elf2cfetbl_version_shared_kernel::{BuildNumber, ReleaseTriple};

#[test]
fn triple_is_dotted() {
    assert_eq!(ReleaseTriple::new(3, 1, 0).to_string(), "3.1.0");
}

#[test]
fn build_number_is_plain_decimal() {
    assert_eq!(BuildNumber::from(36).to_string(), "36");
    assert_eq!(BuildNumber::default().to_string(), "0");
}
