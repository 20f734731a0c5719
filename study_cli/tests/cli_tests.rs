//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studylab(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("studylab").unwrap();
    cmd.env_remove("STUDYLAB_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn calculators_lists_all_kinds() {
    let dir = TempDir::new().unwrap();
    let output = studylab(&dir).arg("calculators").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 19);
    assert!(stdout.contains("ohms-law"));
    assert!(stdout.contains("Quadratic Equation"));
}

#[test]
fn calc_prints_formatted_result() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["calc", "speed", "100", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.00 m/s"));
}

#[test]
fn calc_accepts_negative_and_comma_values() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["calc", "quadratic-equation", "1", "-3", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x₁ = 2.00, x₂ = 1.00"));

    studylab(&dir)
        .args(["calc", "Force", "2,5", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00 N"));
}

#[test]
fn calc_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["calc", "speed", "10", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time cannot be zero"));

    studylab(&dir)
        .args(["calc", "speed", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient data"));
}

#[test]
fn calc_unknown_calculator() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["calc", "warp-drive", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNKNOWN_CALCULATOR"));
}

#[test]
fn calc_json_output() {
    let dir = TempDir::new().unwrap();
    let output = studylab(&dir)
        .args(["--json", "calc", "circle-area", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["unit_or_label"], "m²");
}

#[test]
fn formulas_filters_by_subject() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["formulas", "--subject", "chemistry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amount_of_substance"))
        .stdout(predicate::str::contains("ohms_law").not());
}

#[test]
fn formulas_rejects_unknown_subject() {
    let dir = TempDir::new().unwrap();
    studylab(&dir).args(["formulas", "--subject", "biology"]).assert().failure();
}

#[test]
fn show_unknown_formula() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["show", "perpetual_motion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Formula not found"));
}

#[test]
fn progress_persists_between_runs() {
    let dir = TempDir::new().unwrap();

    studylab(&dir)
        .args(["show", "circle_area"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S = π × r²"));
    studylab(&dir).args(["show", "circle_area"]).assert().success();
    studylab(&dir).args(["calc", "speed", "10", "2"]).assert().success();
    studylab(&dir).args(["calc", "speed", "10", "0"]).assert().failure();

    studylab(&dir)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formulas viewed:    1"))
        .stdout(predicate::str::contains("Calculations:       1"))
        .stdout(predicate::str::contains("[x] First Formula"))
        .stdout(predicate::str::contains("[ ] Curious"));

    assert!(dir.path().join("study_progress.json").exists());
}

#[test]
fn progress_json_and_reset() {
    let dir = TempDir::new().unwrap();
    studylab(&dir).args(["calc", "work", "3", "4"]).assert().success();
    studylab(&dir).arg("reset").assert().success().stdout(predicate::str::contains("Progress reset."));

    let output = studylab(&dir).args(["--json", "progress"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["progress"]["calculations_count"], 0);
    assert_eq!(value["achievements"].as_array().unwrap().len(), 26);
}

#[test]
fn exercise_with_wrong_answer() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["exercise", "speed", "--answer", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find the speed."))
        .stdout(predicate::str::contains("Incorrect."));

    studylab(&dir)
        .args(["--json", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"solved_exercises_count\": 0"));
}

#[test]
fn exercise_with_invalid_answer() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .args(["exercise", "force", "--answer", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn config_file_sets_progress_key() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("studylab.toml");
    std::fs::write(&config, "progress_key = \"profile-2\"\n").unwrap();

    studylab(&dir)
        .arg("--config")
        .arg(&config)
        .args(["calc", "power", "100", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00 W"));

    assert!(dir.path().join("profile-2.json").exists());
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    studylab(&dir)
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("progress")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_ERROR"));
}
