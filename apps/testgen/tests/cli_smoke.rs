//! Smoke tests for the testgen binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn testgen(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("testgen").unwrap();
    cmd.arg("--config-dir")
        .arg(config_dir.path())
        .arg("--format")
        .arg("compact")
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL");
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_names_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = testgen(&dir)
        .arg("names")
        .write_stdin(
            r#"{"methods": [
                {"name": "process", "params": ["String"]},
                {"name": "process", "params": ["int"]},
                {"name": "close"}
            ]}"#,
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"names": ["testProcess_String", "testProcess_int", "testClose"]})
    );
}

#[test]
fn test_names_with_reserved_flag() {
    let dir = TempDir::new().unwrap();
    testgen(&dir)
        .args(["names", "--reserved", "testAdd"])
        .write_stdin(r#"{"methods": [{"name": "add"}]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["testAdd_0args"]"#));
}

#[test]
fn test_names_from_file_with_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("testgen.toml"), "[naming]\ntestPrefix = \"should\"\n").unwrap();
    let batch = dir.path().join("batch.json");
    std::fs::write(&batch, r#"{"methods": [{"name": "add"}], "reserved": []}"#).unwrap();

    testgen(&dir)
        .arg("names")
        .arg("--input")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("shouldAdd"));
}

#[test]
fn test_types_command() {
    let dir = TempDir::new().unwrap();
    let output = testgen(&dir)
        .arg("types")
        .write_stdin(r#"{"types": ["java.util.List<String>", "java.awt.List", "int[]"]}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    let ids: Vec<&str> = json["ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["util_List", "awt_List", "intArr"]);
}

#[test]
fn test_vars_command() {
    let dir = TempDir::new().unwrap();
    testgen(&dir)
        .args(["vars", "result", "_", "count"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"vars":["result_2","arg1","count"]}"#));
}

#[test]
fn test_missing_command() {
    let dir = TempDir::new().unwrap();
    let output = testgen(&dir)
        .arg("missing")
        .write_stdin(
            r#"{
                "methods": [{"name": "area"}, {"name": "perimeter"}],
                "existing": ["testArea"],
                "abstractClass": "Shape"
            }"#,
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            "tests": [{"ordinal": 1, "name": "testPerimeter"}],
            "implClass": {"name": "ShapeImpl", "generate": true}
        })
    );
}

#[test]
fn test_invalid_seed_reports_error_code() {
    let dir = TempDir::new().unwrap();
    testgen(&dir)
        .arg("names")
        .write_stdin(r#"{"methods": [{"name": "not a name"}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""code":"E2001""#));
}

#[test]
fn test_malformed_json_reports_error_code() {
    let dir = TempDir::new().unwrap();
    testgen(&dir)
        .arg("names")
        .write_stdin("{")
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""code":"E1008""#));
}

#[test]
fn test_invalid_config_reports_error_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("testgen.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    testgen(&dir)
        .arg("names")
        .write_stdin(r#"{"methods": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#""code":"E1001""#));
}
