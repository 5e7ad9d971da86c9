//! Offline tests of the binary. Every command here fails or succeeds before
//! a request would leave the machine, the API URL points at a closed port.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn ionosctl(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ionosctl").expect("Failed to find ionosctl binary");

    cmd.env_remove("IONOS_USERNAME")
        .env_remove("IONOS_PASSWORD")
        .env_remove("IONOS_TOKEN")
        .env_remove("IONOS_AUTH_API_URL")
        .env("IONOS_API_URL", UNREACHABLE_API)
        .arg("--config")
        .arg(config_dir.path().join("config.json"));

    cmd
}

fn with_token(config_dir: &TempDir) -> Command {
    let mut cmd = ionosctl(config_dir);

    cmd.env("IONOS_TOKEN", "test-token");

    cmd
}

#[test]
fn test_help_lists_nouns() {
    let dir = TempDir::new().unwrap();

    ionosctl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("datacenter"))
        .stdout(predicate::str::contains("server"));
}

#[test]
fn test_missing_required_flag() {
    let dir = TempDir::new().unwrap();

    with_token(&dir)
        .args(["server", "get", "--server-id", "srv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--datacenter-id"));
}

#[test]
fn test_declined_delete_never_calls_the_api() {
    let dir = TempDir::new().unwrap();

    with_token(&dir)
        .args([
            "server",
            "delete",
            "--datacenter-id",
            "dc",
            "--server-id",
            "srv",
        ])
        .write_stdin("no\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[y/N]"))
        .stderr(predicate::str::contains("Aborted"));
}

#[test]
fn test_empty_answer_declines() {
    let dir = TempDir::new().unwrap();

    with_token(&dir)
        .args(["datacenter", "delete", "--datacenter-id", "dc"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Aborted"));
}

#[test]
fn test_invalid_column_before_any_request() {
    let dir = TempDir::new().unwrap();

    with_token(&dir)
        .args(["datacenter", "list", "--cols", "Name,Bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid column `Bogus`"))
        .stderr(predicate::str::contains("DatacenterId"));
}

#[test]
fn test_missing_credentials() {
    let dir = TempDir::new().unwrap();

    ionosctl(&dir)
        .args(["datacenter", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No credentials found"));
}

#[test]
fn test_all_conflicts_with_id() {
    let dir = TempDir::new().unwrap();

    with_token(&dir)
        .args(["ipblock", "delete", "--ipblock-id", "ip", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    ionosctl(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ionosctl"));
}

#[test]
fn test_logout_without_credentials() {
    let dir = TempDir::new().unwrap();

    ionosctl(&dir).arg("logout").assert().success();
}
