use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".sleekwatch").join("config.json")
}

const BINARY_NAME: &str = "sleekwatch";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Init command should create the config file with the chosen key.
fn init_command_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("init")
        .arg("--key")
        .arg("56a21a042238079f5cc68a81af8f3689dd923b0b")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    // Confirm the file was created with the key in it
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("56a21a042238079f5cc68a81af8f3689dd923b0b"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Removing configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// A bad daemon URL should be rejected before any request is made.
fn status_rejects_invalid_daemon_url() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .arg("--daemon-url")
        .arg("not-a-url")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid daemon URL"));
}

#[test]
#[ignore] // Requires a running daemon on localhost:9000.
fn status_prints_record_fields_or_fallback() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .arg("--profile")
        .arg("alias")
        .env("HOME", tmp.path())
        .assert()
        .success();
}
