use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                            Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                            Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.";

/// Command isolated from the user's configuration file
fn tracker(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fitness-tracker").unwrap();
    cmd.env("FITNESS_TRACKER_CONFIG", temp_dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workout calculator"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("batch"));
}

#[test]
fn test_version_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_fitness-tracker"));
}

#[test]
fn test_demo_prints_sample_reports() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.arg("demo");

    let expected = format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE);
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_calc_running() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["calc", "RUN", "15000", "1", "75"]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_calc_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["--format", "json", "calc", "SWM", "720", "1", "80", "25", "40"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value["training_type"], "Swimming");
    assert!((value["calories"].as_f64().unwrap() - 336.0).abs() < 1e-6);
}

#[test]
fn test_calc_unknown_code() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["calc", "XYZ", "1", "1", "1"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Workout code not supported: XYZ"));
}

#[test]
fn test_calc_missing_height() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["calc", "WLK", "9000", "1", "75"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("WLK expects 4 sensor values, got 3"));
}

#[test]
fn test_calc_zero_duration() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["calc", "RUN", "15000", "0", "75"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Duration must be a positive number"));
}

#[test]
fn test_batch_reports_all_packages() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("packages.json");
    fs::write(
        &file,
        r#"[
            {"code": "RUN", "data": [15000, 1, 75]},
            {"code": "WLK", "data": [9000, 1, 75, 180]}
        ]"#,
    )
    .unwrap();

    let mut cmd = tracker(&temp_dir);
    cmd.arg("batch").arg(&file);

    cmd.assert()
        .success()
        .stdout(format!("{}\n{}\n", RUNNING_LINE, WALKING_LINE));
}

#[test]
fn test_batch_skips_bad_package_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("packages.json");
    fs::write(
        &file,
        r#"[
            {"code": "XYZ", "data": [1, 1, 1]},
            {"code": "RUN", "data": [15000, 1, 75]}
        ]"#,
    )
    .unwrap();

    let mut cmd = tracker(&temp_dir);
    cmd.arg("batch").arg(&file);

    cmd.assert()
        .failure()
        .stdout(format!("{}\n", RUNNING_LINE))
        .stderr(predicate::str::contains("Skipping package 1 (XYZ)"))
        .stderr(predicate::str::contains("1 of 2 packages failed"));
}

#[test]
fn test_batch_fail_fast_from_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[batch]\nfail_fast = true\n",
    )
    .unwrap();

    let file = temp_dir.path().join("packages.json");
    fs::write(
        &file,
        r#"[
            {"code": "WLK", "data": [9000, 1, 75]},
            {"code": "RUN", "data": [15000, 1, 75]}
        ]"#,
    )
    .unwrap();

    let mut cmd = tracker(&temp_dir);
    cmd.arg("batch").arg(&file);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Package 1 (WLK)"));
}

#[test]
fn test_codes_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.arg("codes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SWM"))
        .stdout(predicate::str::contains("SportsWalking"))
        .stdout(predicate::str::contains("length_pool, count_pool"));
}

#[test]
fn test_config_init_and_json_format() {
    let temp_dir = TempDir::new().unwrap();

    let mut init = tracker(&temp_dir);
    init.args(["config", "init"]);
    init.assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));

    let config_file = temp_dir.path().join("config.toml");
    let contents = fs::read_to_string(&config_file).unwrap();
    assert!(contents.contains("format = \"text\""));

    fs::write(&config_file, contents.replace("\"text\"", "\"json\"")).unwrap();

    let mut demo = tracker(&temp_dir);
    demo.arg("demo");
    demo.assert()
        .success()
        .stdout(predicate::str::contains("\"training_type\":\"Running\""));
}

#[test]
fn test_batch_bundled_packages_match_demo() {
    let temp_dir = TempDir::new().unwrap();
    let file = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/packages.json");

    let mut cmd = tracker(&temp_dir);
    cmd.arg("batch").arg(file);

    let expected = format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE);
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_calc_walking_zero_height() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = tracker(&temp_dir);
    cmd.args(["calc", "WLK", "9000", "1", "75", "0"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Height must be a positive number"));
}
