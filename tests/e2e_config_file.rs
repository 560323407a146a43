/// End-to-end tests for config file loading and CLI option merging.
///
/// None of these runs reach the network: every invocation fails during
/// settings resolution, which shows which layer supplied each value.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG_FILENAME: &str = "iq-label-inventory.config.yml";

#[test]
fn test_explicit_config_missing_file() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_explicit_config_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.yml");
    fs::write(&config, "url: [unterminated").unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .arg("-c")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_zero_concurrency_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("iq.yml");
    fs::write(&config, "concurrency: 0\n").unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_config_values_are_applied() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("iq.yml");
    fs::write(&config, "url: ftp://from-config\n").unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ftp://from-config"));
}

#[test]
fn test_cli_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("iq.yml");
    fs::write(&config, "auth: not-valid\nurl: http://localhost:8070\n").unwrap();

    // The config credentials would fail; the CLI ones parse, so the run
    // proceeds to the CLI URL and fails there instead.
    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--auth", "reader:secret", "--url", "ftp://from-cli"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ftp://from-cli"))
        .stderr(predicate::str::contains("Invalid credentials").not());
}

#[test]
fn test_config_auto_discovered_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILENAME), "auth: no-colon-here\n").unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("iq.yml");
    fs::write(&config, "auth: no-colon-here\ntimeout: 30\n").unwrap();

    cargo_bin_cmd!("iq-label-inventory")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown config field"))
        .stderr(predicate::str::contains("timeout"));
}
