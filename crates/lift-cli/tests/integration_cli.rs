//! Binary-level smoke tests for the lift CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("lift")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("package"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn package_reports_missing_pages_directory() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("lift")
        .unwrap()
        .args(["package", "--cwd"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("pages directory not found"));
}

#[test]
fn check_validates_a_minimal_project() {
    let temp = TempDir::new().unwrap();
    let pages = temp.path().join("build/pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join("about.js"), "module.exports.render = () => {};").unwrap();

    Command::cargo_bin("lift")
        .unwrap()
        .args(["check", "--cwd"])
        .arg(temp.path())
        .assert()
        .success();
}
