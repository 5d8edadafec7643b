use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_geofix_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("geofix")
}

#[test]
fn test_capture_command_help() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("capture").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Capture the current GPS position",
        ))
        .stdout(predicate::str::contains("--chrome-path"))
        .stdout(predicate::str::contains("--wait-secs"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_capture_command_without_chrome() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("capture")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

#[test]
fn test_capture_leaves_no_page_file_on_launch_failure() {
    let workdir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_geofix_bin());
    cmd.current_dir(workdir.path())
        .arg("capture")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert().failure();

    assert!(!workdir.path().join("geofix-capture.html").exists());
}

#[test]
fn test_capture_command_flags_parse() {
    // All flags together should parse; the run still fails on the fake
    // Chrome path
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("capture")
        .arg("--wait-secs")
        .arg("3")
        .arg("--endpoint")
        .arg("http://localhost:9/reverse")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert().failure();
}

#[test]
fn test_top_level_help_lists_subcommands() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("capture"))
        .stdout(predicate::str::contains("geocode"))
        .stdout(predicate::str::contains("completion"));
}
