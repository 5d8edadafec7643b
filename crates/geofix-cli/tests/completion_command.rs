use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_geofix_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("geofix")
}

#[test]
fn test_completion_command_help() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("completion").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("--shell"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_geofix()"))
        .stdout(predicate::str::contains("complete -F _geofix"));
}

#[test]
fn test_completion_zsh_generates_script() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("completion").arg("--shell").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef geofix"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    let mut cmd = Command::new(get_geofix_bin());
    cmd.arg("completion").arg("--shell").arg("tcsh");

    cmd.assert().failure();
}
