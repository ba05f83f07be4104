//! Tests for CLI argument parsing against the built binary.

use std::process::Command;

fn dualcount_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dualcount"))
}

#[test]
fn test_help_lists_options() {
    let output = dualcount_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--variant"));
    assert!(stdout.contains("--props"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_invalid_props_exits_with_error() {
    let output = dualcount_cmd()
        .args(["--props", "{not json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid JSON"), "{stderr}");
}

#[test]
fn test_unknown_variant_exits_with_error() {
    let output = dualcount_cmd()
        .args(["--variant", "hooks"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hooks"), "{stderr}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = dualcount_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "{stderr}");
}
