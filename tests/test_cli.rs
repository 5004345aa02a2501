//! End-to-end tests for the bigcalc binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with HOME pointed at an empty temp dir, so no rc file or
/// history from the real user leaks in
fn bigcalc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bigcalc").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_command_mode() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .args(["-c", "(2 + 2) * 2"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_command_mode_joins_words() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .args(["-c", "2", "+", "2", "*", "2"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn test_command_mode_failure() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .args(["-c", "(1 + 2"])
        .assert()
        .failure()
        .stdout("Invalid expression\n");
}

#[test]
fn test_strict_flag() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .args(["-c", "1 / 0"])
        .assert()
        .success()
        .stdout("0\n");
    bigcalc(&home)
        .args(["--strict", "-c", "1 / 0"])
        .assert()
        .failure()
        .stdout("Invalid expression\n");
}

#[test]
fn test_piped_session() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .write_stdin("a = 4\nb = 5\nc = 6\na*2+b*3+c*(2+3)\nd\n/go\n/exit\n1 + 1\n")
        .assert()
        .success()
        .stdout("53\nUnknown variable\nUnknown command\nBye!\n");
}

#[test]
fn test_rc_file_defines_variables() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".bigcalcrc"),
        "# constants\nkilo = 1000\nmega = kilo\nbad = 1x\n",
    )
    .unwrap();

    bigcalc(&home)
        .args(["-c", "kilo * mega"])
        .assert()
        .success()
        .stdout("1000000\n")
        .stderr(predicate::str::contains("~/.bigcalcrc line 4: Invalid assignment"));
}

#[test]
fn test_norc_skips_rc_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bigcalcrc"), "kilo = 1000\n").unwrap();

    bigcalc(&home)
        .args(["--norc", "-c", "kilo"])
        .assert()
        .failure()
        .stdout("Unknown variable\n");
}

#[test]
fn test_script_file() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("sum.calc");
    fs::write(&script, "# running total\nt = 7\nt * 6\n/exit\nt / 0 / x\n").unwrap();

    bigcalc(&home)
        .arg(&script)
        .assert()
        .success()
        .stdout("42\nBye!\n");
}

#[test]
fn test_script_stops_at_error() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("broken.calc");
    fs::write(&script, "1 + 1\n(3\n2 + 2\n").unwrap();

    bigcalc(&home)
        .arg(&script)
        .assert()
        .failure()
        .stdout("2\n")
        .stderr(predicate::str::contains("Error at line 2: Invalid expression"));
}

#[test]
fn test_help_and_version() {
    let home = TempDir::new().unwrap();
    bigcalc(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
    bigcalc(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bigcalc "));
}
