use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("country-lookup").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("country-lookup"));
}

#[test]
fn cli_rejects_missing_subcommand() {
    let mut cmd = Command::cargo_bin("country-lookup").unwrap();
    cmd.assert().failure();
}

#[test]
fn lookup_requires_a_name() {
    let mut cmd = Command::cargo_bin("country-lookup").unwrap();
    cmd.arg("lookup");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("NAME"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn lookup_online_france() {
    let mut cmd = Command::cargo_bin("country-lookup").unwrap();
    cmd.args(["lookup", "france"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("France"));
}
