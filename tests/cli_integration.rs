use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn treeline() -> Command {
    Command::cargo_bin("treeline").unwrap()
}

#[test]
fn shows_help() {
    treeline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plain-text tree"));
}

#[test]
fn shows_version() {
    treeline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_path() {
    treeline()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn rejects_unknown_flag() {
    treeline().args(["--bogus", "."]).assert().failure();
}

#[test]
fn rejects_extra_positional_argument() {
    let dir = TempDir::new().unwrap();
    treeline()
        .arg(dir.path())
        .arg("extra")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn verbose_flag_accepted() {
    let dir = TempDir::new().unwrap();
    treeline().arg("-vvv").arg(dir.path()).assert().success();
}

#[test]
fn quiet_flag_accepted() {
    let dir = TempDir::new().unwrap();
    treeline().arg("-q").arg(dir.path()).assert().success();
}

#[test]
fn invalid_config_path_fails() {
    treeline()
        .args(["--config", "/nonexistent/path.toml", "."])
        .assert()
        .failure();
}

#[test]
fn completions_without_path() {
    treeline()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treeline"));
}
