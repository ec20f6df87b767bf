use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_ordstats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_ordstats"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn subcommand_is_required() {
    Command::new(env!("CARGO_BIN_EXE_ordstats")).assert().failure();
}
