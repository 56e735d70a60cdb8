// tests/cli/structured_output.rs
use assert_cmd::Command;
use elf2cfetbl_version_core::constants;
use serde_json::Value;

#[test]
fn json_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_elf2cfetbl-version"))
        .args(["--format", "json"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output");
    assert_eq!(json["version"], constants::VERSION);
    assert_eq!(json["banner"], constants::VERSION_BANNER);
    assert_eq!(json["baseline"], constants::BUILD_BASELINE);
    assert_eq!(json["build_number"], constants::BUILD_NUMBER);
    assert_eq!(json["mission_rev"], constants::MISSION_REV);
    assert_eq!(json["dev_cycle"], constants::BUILD_DEV_CYCLE);
    assert_eq!(json["schema"], "3");
    assert_eq!(json["build_kind"]["kind"], "development");
}

#[test]
fn yaml_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_elf2cfetbl-version"))
        .args(["--format", "yaml", "--schema", "2"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("codename: Draco"));
    assert!(stdout.contains("version: v3.3.0-rc411"));
}
