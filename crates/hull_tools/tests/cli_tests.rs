//! End-to-end tests for the `hull-tools` binary.

use std::process::{Command, Output};

use hull_test_utils::ContentFixture;

fn hull_tools(args: &[&str]) -> Output {
    hull_tools_with_log(args, None)
}

fn hull_tools_with_log(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hull-tools"));
    command.args(args).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    command.output().expect("failed to run hull-tools")
}

#[test]
fn test_no_arguments_validates_bundled_content() {
    let output = hull_tools(&[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "All validation checks passed."
    );
}

#[test]
fn test_validate_directory_success() {
    let dir = ContentFixture::valid().write_temp();
    let output = hull_tools(&["validate", dir.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("All validation checks passed."));
}

#[test]
fn test_validate_directory_failure_exits_nonzero() {
    let mut fixture = ContentFixture::valid();
    fixture.creatures.creatures.pop();
    let dir = fixture.write_temp();
    let output = hull_tools(&["validate", dir.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Expected 15 creatures, got 14"));
}

#[test]
fn test_check_save_reports_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot_1.json");
    std::fs::write(&path, r#"{"save_version": 1, "player": {}}"#).unwrap();

    let output = hull_tools(&["check-save", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("party"));
}

#[test]
fn test_verbose_flag_enables_debug_logs() {
    let dir = ContentFixture::valid().write_temp();
    let path = dir.path().to_str().unwrap();

    let quiet = hull_tools(&["validate", path]);
    let verbose = hull_tools(&["--verbose", "validate", path]);

    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("Loaded creatures.json"));
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("Loaded creatures.json"));
}

#[test]
fn test_rust_log_overrides_default_level() {
    let dir = ContentFixture::valid().write_temp();
    let output = hull_tools_with_log(&["validate", dir.path().to_str().unwrap()], Some("error"));

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Validating content"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("All validation checks passed."));
}
