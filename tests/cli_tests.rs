/// End-to-end tests against the built binary
///
/// Run with: cargo test --test cli_tests

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_binary(args: &[&str], stdin: &str) -> Output {
    run_binary_with_env(args, stdin, None)
}

fn run_binary_with_env(args: &[&str], stdin: &str, rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rustmemkv"));
    match rust_log {
        Some(directives) => command.env("RUST_LOG", directives),
        None => command.env_remove("RUST_LOG"),
    };

    let mut child = command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_quit_exits_successfully() {
    let output = run_binary(&[], "WRITE a 1\nREAD a\nQUIT\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> > 1\n> Exiting...\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_quit_inside_transaction_exits_zero() {
    let output = run_binary(&["--no-prompt"], "START\nWRITE a 1\nSTART\nQUIT\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Exiting...\n");
}

#[test]
fn test_end_of_input_exits_with_failure() {
    let output = run_binary(&["--no-prompt"], "START\nWRITE a 1\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error reading standard input: end of input\n"
    );
}

#[test]
fn test_diagnostics_go_to_stderr() {
    let output = run_binary(&["--no-prompt"], "READ a\nCOMMIT\nQUIT\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Exiting...\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Key not found: a\nError: you are not currently in a transaction\n"
    );
}

#[test]
fn test_custom_prompt() {
    let output = run_binary(&["--prompt", "kv> "], "QUIT\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "kv> Exiting...\n");
}

#[test]
fn test_script_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("commands.txt");
    std::fs::write(&script, "WRITE a 1\nSTART\nWRITE a 2\nCOMMIT\nREAD a\nQUIT\n").unwrap();

    let output = run_binary(&["--no-prompt", "--script", script.to_str().unwrap()], "");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\nExiting...\n");
}

#[test]
fn test_missing_script_file_fails() {
    let output = run_binary(&["--script", "/definitely/not/here.txt"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open script"));
}

#[test]
fn test_malformed_rust_log_is_reported() {
    let output = run_binary_with_env(&["--no-prompt"], "QUIT\n", Some("rustmemkv=loud"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Exiting...\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring malformed RUST_LOG"));
}
