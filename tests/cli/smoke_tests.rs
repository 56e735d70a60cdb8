// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use elf2cfetbl_version_core::constants;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_elf2cfetbl-version"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("elf2cfetbl-version"));
}

#[test]
fn version_flag_prints_version_string() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(constants::VERSION));
}

#[test]
fn default_output_is_the_banner() {
    bin()
        .assert()
        .success()
        .stdout(format!("{}\n", constants::VERSION_BANNER));
}

#[test]
fn short_output_is_one_line() {
    bin()
        .arg("--short")
        .assert()
        .success()
        .stdout(format!("{}\n", constants::VERSION));
}

#[test]
fn historical_schema_banner() {
    bin()
        .args(["--schema", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" elf2cfetbl Development Build\n"))
        .stdout(predicate::str::contains(" v3.1.0+dev36 (Codename: Bootes)\n"))
        .stdout(predicate::str::ends_with(" Last Offical Release: elf2cfetbl v3.1.0\n"));
}

#[test]
fn check_passes_for_every_schema() {
    for schema in ["1", "2", "3"] {
        bin().args(["--check", "--short", "--schema", schema]).assert().success();
    }
}

#[test]
fn rejects_unknown_schema() {
    bin()
        .args(["--schema", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown schema revision"));
}

#[test]
fn output_is_reproducible() {
    let first = bin().output().expect("runs");
    let second = bin().output().expect("runs");
    assert_eq!(first.stdout, second.stdout);
}
