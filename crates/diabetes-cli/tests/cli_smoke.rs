//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `diabetes` binary to verify that
//! argument parsing, help text, one-off predictions and startup failures
//! work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("diabetes").unwrap()
}

fn shipped_model() -> String {
    format!("{}/../../models/diabetes_model.json", env!("CARGO_MANIFEST_DIR"))
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("predict"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("diabetes"));
}

#[test]
fn config_prints_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"model_path\""))
        .stdout(predicate::str::contains("\"port\": 8501"));
}

// ---------------------------------------------------------------------------
// predict
// ---------------------------------------------------------------------------

#[test]
fn predict_defaults_is_non_diabetic() {
    cmd()
        .args(["predict", "--model", &shipped_model()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prediction: Non-Diabetic"))
        .stdout(predicate::str::contains("healthy lifestyle"));
}

#[test]
fn predict_high_risk_profile_as_json() {
    cmd()
        .args([
            "predict",
            "--model",
            &shipped_model(),
            "--gender",
            "Male",
            "--age",
            "60",
            "--bmi",
            "35.5",
            "--hba1c",
            "9.2",
            "--glucose",
            "220",
            "--hypertension",
            "Yes",
            "--heart-disease",
            "Yes",
            "--smoking",
            "Current",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"Diabetic\""))
        .stdout(predicate::str::contains("\"label_code\": 1"))
        .stdout(predicate::str::contains("\"smoking_history_current\": 1"));
}

#[test]
fn predict_rejects_unknown_option() {
    cmd()
        .args(["predict", "--model", &shipped_model(), "--smoking", "Occasionally"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Occasionally"));
}

#[test]
fn predict_missing_model_fails() {
    cmd()
        .args(["predict", "--model", "/nonexistent/diabetes_model.json"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// serve
// ---------------------------------------------------------------------------

#[test]
fn serve_missing_model_fails_before_binding() {
    cmd()
        .args(["serve", "--model", "/nonexistent/diabetes_model.json", "--port", "0"])
        .env("DIABETES_LOG", "error")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load model"));
}

#[test]
fn serve_nonexistent_config_errors() {
    cmd()
        .args(["serve", "/nonexistent/config.json"])
        .assert()
        .failure();
}
