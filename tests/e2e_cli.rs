use assert_cmd::{cargo, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CASE_2: &str = r#"[{"operation":"buy", "unit-cost":10.00, "quantity": 10000},{"operation":"sell", "unit-cost":20.00, "quantity": 5000},{"operation":"sell", "unit-cost":5.00, "quantity": 5000}]"#;
const CASE_1: &str = r#"[{"operation":"buy", "unit-cost":10.00, "quantity": 100},{"operation":"sell", "unit-cost":15.00, "quantity": 50},{"operation":"sell", "unit-cost":15.00, "quantity": 50}]"#;

fn base_cmd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("capital-gains"));
    cmd.env_remove("CAPITAL_GAINS_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn stdin_lines_are_processed_independently() {
    base_cmd()
        .write_stdin(format!("{}\n{}\n", CASE_1, CASE_2))
        .assert()
        .success()
        .stdout(
            "[{\"tax\": 0.0},{\"tax\": 0.0},{\"tax\": 0.0}]\n[{\"tax\": 0.0},{\"tax\": 10000.0},{\"tax\": 0.0}]\n",
        );
}

#[test]
fn blank_line_ends_input() {
    base_cmd()
        .write_stdin(format!("{}\n\n{}\n", CASE_1, CASE_2))
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"tax\": 0.0},{\"tax\": 0.0}]\n");
}

#[test]
fn empty_input_prints_nothing() {
    base_cmd().write_stdin("\n").assert().success().stdout("");
}

#[test]
fn oversell_is_reported_in_output() {
    base_cmd()
        .write_stdin(
            r#"[{"operation":"buy", "unit-cost":10, "quantity": 10000}, {"operation":"sell", "unit-cost":20, "quantity": 11000}]"#,
        )
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"error\": \"Can't sell more stocks than you have\"}]\n");
}

#[test]
fn invalid_json_exits_with_error() {
    base_cmd()
        .write_stdin("{\"invalid operation\": true}\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn reads_operations_from_file() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let input = dir.path().join("operations.txt");
    fs::write(&input, format!("{}\n", CASE_2)).unwrap();

    base_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"tax\": 10000.0},{\"tax\": 0.0}]\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    base_cmd()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open input file"));
}

#[test]
fn config_file_overrides_rules() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = dir.path().join("rules.toml");
    fs::write(&config, "tax_rate = \"0.15\"\nexemption_threshold = \"0\"\n").unwrap();

    base_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin(CASE_1)
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"tax\": 37.5},{\"tax\": 37.5}]\n");
}

#[test]
fn config_from_environment() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = dir.path().join("rules.toml");
    fs::write(&config, "tax_rate = \"0.10\"\n").unwrap();

    base_cmd()
        .env("CAPITAL_GAINS_CONFIG", &config)
        .write_stdin(CASE_2)
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"tax\": 5000.0},{\"tax\": 0.0}]\n");
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = dir.path().join("rules.toml");
    fs::write(&config, "tax_rate = \"2\"\n").unwrap();

    base_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin(CASE_1)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    base_cmd()
        .arg("--verbose")
        .write_stdin(CASE_2)
        .assert()
        .success()
        .stdout("[{\"tax\": 0.0},{\"tax\": 10000.0},{\"tax\": 0.0}]\n")
        .stderr(predicate::str::contains("sell"));
}
