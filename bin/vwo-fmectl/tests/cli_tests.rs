//! ---
//! fme_section: "04-cli"
//! fme_subsection: "integration-tests"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "End-to-end tests for the vwo-fmectl binary."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use vwo_fme_version::{VERSION_NUMBER, VERSION_STRING};

fn fmectl() -> Command {
    let mut cmd = Command::cargo_bin("vwo-fmectl").expect("binary built");
    cmd.env_remove("VWO_FME_CONFIG");
    cmd
}

#[test]
fn version_flag_prints_extended_banner() {
    fmectl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("VWO FME v{VERSION_STRING}")))
        .stdout(predicate::str::contains("Version number:"));
}

#[test]
fn show_json_reports_both_identifiers() {
    let output = fmectl()
        .args(["show", "--format", "json"])
        .output()
        .expect("run show");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["version_string"], VERSION_STRING);
    assert_eq!(value["version_number"].as_f64(), Some(VERSION_NUMBER));
    assert_eq!(value["build"]["semver"], VERSION_STRING);
}

#[test]
fn bare_invocation_shows_text_report() {
    fmectl()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Version string: {VERSION_STRING}")));
}

#[test]
fn check_compares_against_minimum() {
    fmectl()
        .args(["check", "--minimum", "0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("satisfies minimum"));

    fmectl()
        .args(["check", "--minimum", VERSION_STRING])
        .assert()
        .success();

    fmectl()
        .args(["check", "--minimum", "v999.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("older than required minimum v999.0"));

    fmectl()
        .args(["check", "--minimum", "not-a-version"])
        .assert()
        .failure();
}

#[test]
fn verify_reports_consistency() {
    fmectl()
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL").not())
        .stdout(predicate::str::contains("version metadata consistent"));
}

#[test]
fn meta_applies_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fme.toml");
    fs::write(&path, "[sdk]\nname = \"wrapper-sdk\"\nversion = \"2.3.1\"\n").unwrap();

    let output = fmectl()
        .current_dir(dir.path())
        .args(["meta", "--format", "json", "--config"])
        .arg(&path)
        .output()
        .expect("run meta");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["name"], "wrapper-sdk");
    assert_eq!(value["version"], "2.3.1");
    assert_eq!(value["builtin"], false);
    assert_eq!(value["props"]["vwo_sdkName"], "wrapper-sdk");
    assert_eq!(value["props"]["vwo_sdkVersion"], "2.3.1");
    assert_eq!(value["query"], "sn=wrapper-sdk&sv=2.3.1");
}

#[test]
fn meta_defaults_to_builtin_identity() {
    let dir = tempfile::tempdir().unwrap();
    fmectl()
        .current_dir(dir.path())
        .arg("meta")
        .assert()
        .success()
        .stdout(predicate::str::contains("SDK name: vwo-fme-rust-sdk"))
        .stdout(predicate::str::contains(format!("SDK version: {VERSION_STRING}")))
        .stdout(predicate::str::contains("Builtin: true"));
}

#[test]
fn meta_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vwo-fme.toml"), "[sdk]\nversion = \"latest\"\n").unwrap();
    fmectl()
        .current_dir(dir.path())
        .arg("meta")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vwo-fme.toml"));
}

#[test]
fn meta_applies_logging_section_and_keeps_stdout_clean() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("fme-logs");
    fs::write(
        dir.path().join("vwo-fme.toml"),
        format!(
            "[sdk]\nname = \"wrapper-sdk\"\n\n[logging]\ndirectory = {:?}\nformat = \"pretty\"\n",
            logs.display().to_string()
        ),
    )
    .unwrap();

    let output = fmectl()
        .current_dir(dir.path())
        .env("VWO_FME_LOG", "debug")
        .args(["meta", "--format", "json"])
        .output()
        .expect("run meta");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["name"], "wrapper-sdk");

    let names: Vec<String> = fs::read_dir(&logs)
        .expect("log directory created")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|name| name.starts_with("vwo-fmectl.log")), "{names:?}");
    assert!(names.iter().all(|name| !name.contains("vwo-fmectl-vwo-fmectl")), "{names:?}");
}
