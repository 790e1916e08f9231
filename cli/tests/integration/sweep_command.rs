//! Integration tests for `bedrock-sweep sweep` and `list` failure paths that
//! must stop before any AWS call.
//!
//! Every test runs with an isolated home directory, no AWS profile files,
//! and instance metadata disabled, so the SDK finds neither a region nor
//! credentials on its own.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn isolated(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bedrock-sweep"));
    let missing = home.path().join("missing");
    cmd.env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("BEDROCK_SWEEP_CONFIG", home.path().join("config.yaml"))
        .env("AWS_CONFIG_FILE", &missing)
        .env("AWS_SHARED_CREDENTIALS_FILE", &missing)
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env_remove("AWS_REGION")
        .env_remove("AWS_DEFAULT_REGION")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_WEB_IDENTITY_TOKEN_FILE")
        .env_remove("AWS_CONTAINER_CREDENTIALS_RELATIVE_URI")
        .env_remove("AWS_CONTAINER_CREDENTIALS_FULL_URI")
        .env_remove("BEDROCK_SWEEP_YES");
    cmd
}

#[test]
fn test_sweep_without_region_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    isolated(&home)
        .args(["sweep", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No AWS region configured"))
        .stdout(predicate::str::contains("Summary").not());
}

#[test]
fn test_list_without_region_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    isolated(&home)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn test_sweep_without_region_json_error_code() {
    let home = TempDir::new().expect("tempdir");
    let output = isolated(&home)
        .args(["--json", "sweep", "--dry-run"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["code"], "MISSING_REGION");
}

#[test]
fn test_sweep_with_malformed_region_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    isolated(&home)
        .args(["--region", "Virginia", "sweep", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for region: Virginia"));
}

#[test]
fn test_sweep_without_credentials_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    isolated(&home)
        .args(["sweep", "--dry-run"])
        .env("AWS_REGION", "us-east-1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("AWS credentials are not available"));
}
