//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, and `humanize` to check
//! that configured defaults reach the rewrite.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("PLAINLY_TONE")
        .env_remove("PLAINLY_STRENGTH")
        .env_remove("PLAINLY_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["tone"], "neutral");
    assert_eq!(json["config"]["strength"], "light");
    assert_eq!(json["config"]["contractions"], true);
    assert_eq!(json["config"]["max_input_chars"], 20_000);
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), r#"tone = "concise""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["tone"], "concise");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".plainly.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("drafts").join("2026");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("plainly.toml"), r#"strength = "strong""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["strength"], "strong");
}

#[test]
fn plainly_name_overrides_plain_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plain.toml"), r#"tone = "friendly""#).unwrap();
    fs::write(tmp.path().join("plainly.toml"), r#"tone = "confident""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["tone"], "confident");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".plainly.yaml"),
        "tone: professional\ncontractions: false\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["tone"], "professional");
    assert_eq!(json["config"]["contractions"], false);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".plainly.json"),
        r#"{"soften_run_ons": false, "max_input_chars": 500}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["soften_run_ons"], false);
    assert_eq!(json["config"]["max_input_chars"], 500);
}

#[test]
fn disabled_input_limit_reports_null() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".plainly.toml"),
        "max_input_chars = 500\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_chars"].is_null());
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), r#"tone = "friendly""#).unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"tone = "concise""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["tone"], "concise");
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), r#"tone = "friendly""#).unwrap();

    let output = cmd()
        .env("PLAINLY_TONE", "professional")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["tone"], "professional");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let work = repo.join("docs");
    fs::create_dir_all(&work).unwrap();
    fs::write(parent.join(".plainly.toml"), r#"tone = "concise""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&work);
    assert_eq!(json["config"]["tone"], "neutral");
}

// =============================================================================
// Invalid Config
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), "tone = [unclosed").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn invalid_tone_in_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), r#"tone = "sarcastic""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".plainly.toml"),
        "tone = \"concise\"\nfavorite_color = \"teal\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["tone"], "concise");
}

// =============================================================================
// Config Reaches Commands
// =============================================================================

#[test]
fn configured_contractions_off_reaches_humanize() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), "contractions = false\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "humanize"])
        .write_stdin("I am sure it is fine.")
        .assert()
        .success()
        .stdout(predicate::str::diff("I am sure it is fine.\n"));
}

#[test]
fn configured_input_limit_truncates() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".plainly.toml"), "max_input_chars = 9\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "humanize"])
        .write_stdin("Short one. This part is cut.")
        .assert()
        .success()
        .stdout(predicate::str::diff("Short one\n"));
}
