//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample() -> String {
    fixture("sample.ini")
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .to_str()
        .expect("utf8 path")
        .to_string()
}

fn tagconf() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tagconf"));
    cmd.env_remove("TAGCONF_OVERRIDES").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = tagconf();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("tagconf"));
}

#[test]
fn test_cli_help() {
    let mut cmd = tagconf();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("typed settings"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("section"))
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_get_prints_typed_value() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "common.paid_users_size_limit"]);
    cmd.assert().success().stdout("[INT]:\t2147483648\n");
}

#[test]
fn test_get_applies_override_flag() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "ftp.path", "--override", "production,ubuntu"]);
    cmd.assert().success().stdout("[STR]:\t/etc/var/uploads\n");
}

#[test]
fn test_get_reads_overrides_from_env() {
    let mut cmd = tagconf();
    cmd.env("TAGCONF_OVERRIDES", "production");
    cmd.args(["get", &sample(), "ftp.path"]);
    cmd.assert().success().stdout("[STR]:\t/srv/var/tmp/\n");
}

#[test]
fn test_get_without_overrides_uses_default() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "ftp.path"]);
    cmd.assert().success().stdout("[STR]:\t/tmp/\n");
}

#[test]
fn test_get_prints_lists() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "http.params"]);
    cmd.assert().success().stdout("[LIST]:\t{ array, of, values }\n");
}

#[test]
fn test_get_raw_value() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "ftp.name", "--raw"]);
    cmd.assert().success().stdout("hello there, ftp uploading\n");
}

#[test]
fn test_get_missing_key_fails() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "ftp.foobar123"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("[NONE]:\tSetting not found."))
        .stderr(predicate::str::contains("Setting not found: ftp.foobar123"));
}

#[test]
fn test_get_type_mismatch_fails() {
    let mut cmd = tagconf();
    cmd.args(["get", &sample(), "ftp.enabled", "--type", "integer"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config item holds boolean, expected integer"));
}

#[test]
fn test_section_lists_keys() {
    let mut cmd = tagconf();
    cmd.args(["section", &sample(), "ftp", "-o", "production"]);
    cmd.assert().success().stdout(
        "[KEY]:\tenabled:\n[BOOL]:\tfalse\n\
         [KEY]:\tname:\n[STR]:\thello there, ftp uploading\n\
         [KEY]:\tpath:\n[STR]:\t/srv/var/tmp/\n",
    );
}

#[test]
fn test_section_missing_fails() {
    let mut cmd = tagconf();
    cmd.args(["section", &sample(), "smtp"]);
    cmd.assert().failure().stdout(predicate::str::contains("Section not found."));
}

#[test]
fn test_dump_json() {
    let mut cmd = tagconf();
    cmd.args(["dump", &sample(), "--format", "json", "-o", "production"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(parsed["http"]["path"], "/srv/var/tmp/");
    assert_eq!(parsed["http"]["ratio"], 0.75);
    assert_eq!(parsed["common"]["basic_size_limit"], 26214400);
    assert_eq!(parsed["ftp"]["enabled"], false);
}

#[test]
fn test_dump_text() {
    let mut cmd = tagconf();
    cmd.args(["dump", &sample()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("common.basic_size_limit\t[INT]:\t26214400\n"))
        .stdout(predicate::str::contains("http.motd\t[STR]:\tclosed; back soon\n"));
}

#[test]
fn test_check_reports_counts() {
    let mut cmd = tagconf();
    cmd.args(["check", &sample()]);
    cmd.assert().success().stdout("OK: 12 settings in 3 sections\n");
}

#[test]
fn test_check_rejects_malformed_setting() {
    let mut cmd = tagconf();
    cmd.args(["check", &fixture("malformed.ini")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed setting on line 3"));
}

#[test]
fn test_check_rejects_integer_overflow() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("big.ini");
    fs::write(&path, "[limits]\nmax = 99999999999999999999999\n").expect("write config");

    let mut cmd = tagconf();
    cmd.args(["check", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("integer larger than the supported max"));
}

#[test]
fn test_check_missing_file_fails() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("absent.ini");

    let mut cmd = tagconf();
    cmd.args(["check", path.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"))
        .stderr(predicate::str::contains("unable to open config file"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = tagconf();
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("tagconf"));
}
