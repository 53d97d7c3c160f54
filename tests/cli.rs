use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, diff};
use tempfile::{tempdir, TempDir};

/// Binary with HOME pointed at an empty directory and no overrides set
fn drills_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drills").expect("drills binary");
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("DRILLS_OUTPUT")
        .env_remove("DRILLS_TIE_BREAK")
        .env_remove("DRILLS_LOG_LEVEL");
    cmd
}

#[test]
fn truncate_drops_partial_word() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["truncate", "To crop or not to crop", "21"])
        .assert()
        .success()
        .stdout(diff("To crop or not to\n"));
}

#[test]
fn truncate_returns_short_message_unchanged() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["truncate", "To crop", "40"])
        .assert()
        .success()
        .stdout(diff("To crop\n"));
}

#[test]
fn truncate_rejects_negative_budget() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["truncate", "To crop", "-1"])
        .assert()
        .code(2)
        .stderr(contains("k must be non-negative"));
}

#[test]
fn truncate_rejects_non_integer_budget() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["truncate", "To crop", "ten"])
        .assert()
        .code(2);
}

#[test]
fn truncate_json_reports_cut() {
    let home = tempdir().expect("tempdir");
    let output = drills_cmd(&home)
        .args(["--json", "truncate", "To crop or not", "8"])
        .output()
        .expect("run drills");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["result"], "To crop");
    assert_eq!(value["cut"], "trailing_space");
    assert_eq!(value["k"], 8);
}

#[test]
fn majority_prints_element_or_none() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["majority", "1", "1,1,2"])
        .assert()
        .success()
        .stdout(diff("1\n"));

    drills_cmd(&home)
        .args(["majority", "2", "1,1,2"])
        .assert()
        .success()
        .stdout(diff("none\n"));

    drills_cmd(&home)
        .args(["majority", "0", ""])
        .assert()
        .success()
        .stdout(diff("none\n"));
}

#[test]
fn majority_accepts_negative_elements() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["majority", "1", "-5,-5,3"])
        .assert()
        .success()
        .stdout(diff("-5\n"));
}

#[test]
fn majority_tie_break_flag_overrides_default() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["majority", "0", "3,2,1"])
        .assert()
        .success()
        .stdout(diff("1\n"));

    drills_cmd(&home)
        .args(["majority", "--tie-break", "first-seen", "0", "3,2,1"])
        .assert()
        .success()
        .stdout(diff("3\n"));
}

#[test]
fn majority_rejects_negative_threshold() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["majority", "-1", "1,1,2"])
        .assert()
        .code(2)
        .stderr(contains("threshold must be non-negative"));
}

#[test]
fn majority_rejects_malformed_list() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["majority", "0", "1,two,3"])
        .assert()
        .code(2)
        .stderr(contains("`two` is not an integer"));
}

#[test]
fn strict_majority_uses_half_the_length() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["strict-majority", "1,1,2"])
        .assert()
        .success()
        .stdout(diff("1\n"));

    drills_cmd(&home)
        .args(["strict-majority", "1,2,1,2"])
        .assert()
        .success()
        .stdout(diff("none\n"));
}

#[test]
fn config_file_sets_output_and_tie_break() {
    let home = tempdir().expect("tempdir");
    let config = home.path().join("drills.toml");
    fs::write(
        &config,
        "output = \"json\"\n[majority]\ntie_break = \"first-seen\"\n",
    )
    .expect("write config");

    let output = drills_cmd(&home)
        .args(["--config", config.to_str().expect("utf8 path")])
        .args(["majority", "0", "3,2,1"])
        .output()
        .expect("run drills");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["element"], 3);
    assert_eq!(value["tie_break"], "first-seen");
}

#[test]
fn env_overrides_config_file() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .env("DRILLS_TIE_BREAK", "first-seen")
        .args(["majority", "0", "3,2,1"])
        .assert()
        .success()
        .stdout(diff("3\n"));
}

#[test]
fn broken_config_fails_with_general_error() {
    let home = tempdir().expect("tempdir");
    let config = home.path().join("broken.toml");
    fs::write(&config, "output = [unterminated").expect("write config");

    drills_cmd(&home)
        .args(["--config", config.to_str().expect("utf8 path")])
        .args(["truncate", "To crop", "3"])
        .assert()
        .code(1)
        .stderr(contains("failed to parse config file"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let home = tempdir().expect("tempdir");
    let config = home.path().join("absent.toml");

    drills_cmd(&home)
        .args(["--config", config.to_str().expect("utf8 path")])
        .args(["truncate", "To crop", "3"])
        .assert()
        .code(1)
        .stderr(contains("cannot read config file"));
}

#[test]
fn config_reset_writes_defaults_under_home() {
    let home = tempdir().expect("tempdir");
    let expected = home.path().join(".config").join("drills").join("config.toml");

    drills_cmd(&home)
        .args(["config", "--reset", "--force"])
        .assert()
        .success()
        .stdout(contains("Config reset to defaults"));

    let written = fs::read_to_string(&expected).expect("config written");
    assert!(written.contains("tie_break = \"smallest\""));

    drills_cmd(&home)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(contains("config.toml"));
}

#[test]
fn config_show_reports_defaults() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(contains("output = \"plain\"").and(contains("defaults (no config file)")));
}

#[test]
fn help_and_version() {
    let home = tempdir().expect("tempdir");
    drills_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("truncate").and(contains("majority")));

    drills_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("drills "));
}
