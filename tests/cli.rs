// SPDX-License-Identifier: MIT

//! End-to-end tests driving the emolint binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary from an isolated directory so config discovery cannot
/// pick up an emolint.toml from the repository, home, or XDG paths.
fn emolint_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("emolint").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path());
    cmd
}

#[test]
fn check_valid_message_passes() {
    let dir = tempfile::tempdir().unwrap();
    emolint_in(&dir)
        .args(["check", ":sparkles:(api) Add retry support (#42)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"));
}

#[test]
fn check_invalid_message_fails_with_rule_names() {
    let dir = tempfile::tempdir().unwrap();
    emolint_in(&dir)
        .args(["check", "fix bug"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-empty"))
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn check_long_header_fails_max_length() {
    let dir = tempfile::tempdir().unwrap();
    let header = format!(":sparkles: A{}", "a".repeat(80));
    emolint_in(&dir)
        .args(["check", &header])
        .assert()
        .failure()
        .stdout(predicate::str::contains("header-max-length"));
}

#[test]
fn check_reads_message_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, ":bug: Fix dangling pointer\n").unwrap();

    emolint_in(&dir)
        .arg("check")
        .arg("--file")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn check_reads_message_from_stdin_by_default() {
    let dir = tempfile::tempdir().unwrap();
    emolint_in(&dir)
        .write_stdin(":memo: Document retry semantics\n")
        .assert()
        .success();
}

#[test]
fn check_json_output() {
    let dir = tempfile::tempdir().unwrap();
    emolint_in(&dir)
        .args(["check", "--format", "json", ":sparkles: Add feature."])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("subject-full-stop"));
}

#[test]
fn check_strict_promotes_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("lint.toml");
    std::fs::write(
        &config,
        r#"
[rules.subject-case]
severity = "warning"
condition = "always"
value = ["sentence-case"]
"#,
    )
    .unwrap();

    // warning only: passes without --strict
    emolint_in(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", ":sparkles: add feature"])
        .assert()
        .success();

    // fails with --strict
    emolint_in(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", "--strict", ":sparkles: add feature"])
        .assert()
        .failure();
}

#[test]
fn check_honors_list_valued_full_stop() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("emolint.toml"),
        r#"
[rules.subject-full-stop]
severity = "error"
condition = "never"
value = ["!"]
"#,
    )
    .unwrap();

    emolint_in(&dir)
        .args(["check", ":bug: Fix it!"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-full-stop"));
}

#[test]
fn check_rejects_unknown_rule_in_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("emolint.toml");
    std::fs::write(
        &config,
        r#"
[rules.subject-min-length]
severity = "error"
condition = "always"
value = 10
"#,
    )
    .unwrap();

    emolint_in(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", ":bug: Fix crash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("subject-min-length"));
}

#[test]
fn check_rejects_wrong_shaped_value_in_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("emolint.toml");
    std::fs::write(
        &config,
        r#"
[rules.header-max-length]
severity = "error"
condition = "always"
value = ["72"]
"#,
    )
    .unwrap();

    emolint_in(&dir)
        .arg("--config")
        .arg(&config)
        .args(["check", ":bug: Fix crash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("header-max-length"));
}

#[test]
fn rules_prints_the_table() {
    let dir = tempfile::tempdir().unwrap();
    emolint_in(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("type-enum"))
        .stdout(predicate::str::contains("header-max-length"))
        .stdout(predicate::str::contains("72"));
}

#[test]
fn init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();

    emolint_in(&dir).arg("init").assert().success();
    assert!(dir.path().join("emolint.toml").exists());

    // second run without --force refuses to overwrite
    emolint_in(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    emolint_in(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn init_config_round_trips_through_check() {
    let dir = tempfile::tempdir().unwrap();

    emolint_in(&dir).arg("init").assert().success();

    emolint_in(&dir)
        .args(["check", ":sparkles:(api) Add retry support (#42)"])
        .assert()
        .success();
}
