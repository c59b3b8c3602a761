//! Integration tests for the bol-driver binary

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Test helper to run the driver binary with `args`
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bol-driver"))
        .args(args)
        .env_remove("BOL_URL")
        .env_remove("BOL_ITERATIONS")
        .output()
        .expect("failed to run bol-driver")
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--max-attempts"));
    assert!(stdout.contains("--output-dir"));
}

#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("bol-driver"));
}

#[test]
fn test_cli_invalid_iterations() {
    let output = run_cli(&["--iterations", "lots"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_unreachable_server_skips_without_files() {
    let temp_dir = tempdir().unwrap();
    let out_dir = temp_dir.path().join("pdfs");

    let output = run_cli(&[
        "--url",
        "http://127.0.0.1:9/generate-bill-of-lading/",
        "--iterations",
        "2",
        "--max-attempts",
        "2",
        "--attempt-delay-secs",
        "0",
        "--request-delay-secs",
        "0",
        "--timeout-secs",
        "2",
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--seed",
        "1",
    ]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Testing completed!"));
    assert!(stdout.contains("Generated: 0 | Skipped: 2 | Requests: 4"));

    // Output directory is created even when nothing is written
    assert!(out_dir.is_dir());
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}
