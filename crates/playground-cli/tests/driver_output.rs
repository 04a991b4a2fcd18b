//! End-to-end tests: run the `playground` binary and check exactly what it
//! writes to stdout.

use std::process::Command;

fn playground() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_playground"));
    cmd.env("RUST_LOG", "info");
    cmd
}

/// Default run prints Jim's three-line summary and nothing else.
#[test]
fn test_default_run_stdout() {
    let output = playground().output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Name: Jim \nHeight: 64.0 \nFavorite Food: Pasta\n"
    );
}

/// Logging never leaks into stdout.
#[test]
fn test_logs_stay_on_stderr() {
    let output = playground().env("RUST_LOG", "debug").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(!String::from_utf8(output.stderr).unwrap().contains("Name: Jim"));
}

#[test]
fn test_config_file_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("driver.json");
    let config = serde_json::json!({
        "name": "Sue",
        "height": 58.5,
        "favorite_food": "Tacos",
    });
    std::fs::write(&path, config.to_string()).unwrap();

    let output = playground().arg("--config").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Name: Sue \nHeight: 58.5 \nFavorite Food: Tacos\n"
    );
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = playground()
        .arg("--config")
        .arg(dir.path().join("missing.json"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help() {
    let output = playground().arg("help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage: playground [command]"));
    assert!(!stdout.contains("Name: Jim"));
}

#[test]
fn test_unknown_command() {
    let output = playground().arg("bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
