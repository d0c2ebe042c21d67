//! End-to-end tests for the beta trigger CLI
//!
//! Template handling must fail before any request is sent, so most of
//! these run against directories with broken or missing templates. The
//! one networked test points at a closed local port.

use assert_cmd::Command;
use os6_api_client::payload::{self, BETA_PAYLOAD_FILE};
use predicates::prelude::*;
use std::path::Path;

fn ship_template(dir: &Path) {
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join(BETA_PAYLOAD_FILE);
    std::fs::copy(shipped, dir.join(BETA_PAYLOAD_FILE)).unwrap();
}

#[test]
fn requires_server_token_and_branch() {
    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--server"))
        .stderr(predicate::str::contains("--token"))
        .stderr(predicate::str::contains("--branch"));
}

#[test]
fn fails_before_network_when_template_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--server",
            "https://teamcity.invalid",
            "--token",
            "secret",
            "--branch",
            "develop",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read payload template"));
}

#[test]
fn fails_on_a_malformed_template() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(BETA_PAYLOAD_FILE), "{ oops").unwrap();

    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--server",
            "https://teamcity.invalid",
            "--token",
            "secret",
            "--branch",
            "develop",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse payload template"));
}

#[test]
fn fails_when_the_template_is_not_an_object() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(BETA_PAYLOAD_FILE), "[1, 2, 3]").unwrap();

    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--server",
            "https://teamcity.invalid",
            "--token",
            "secret",
            "--branch",
            "develop",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn transport_failures_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    ship_template(dir.path());

    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--server",
            "http://127.0.0.1:1",
            "--token",
            "secret",
            "--branch",
            "develop",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP request failed"));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    ship_template(dir.path());

    Command::cargo_bin("os6-trigger-beta")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--server",
            "http://127.0.0.1:1",
            "--token",
            "secret",
            "--branch",
            "develop",
            "--verbose",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("payload template loaded"));
}

#[test]
fn shipped_template_is_a_valid_build_request() {
    let shipped = Path::new(env!("CARGO_MANIFEST_DIR")).join(BETA_PAYLOAD_FILE);
    let template = payload::load(&shipped).unwrap();

    assert!(template.get("branchName").is_some());
    assert_eq!(template["buildType"]["id"], "OneSafe6_Android_Beta");
}
