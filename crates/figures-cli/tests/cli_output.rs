//! End-to-end tests driving the `figures` binary through pipes
//!
//! Piped stdin is not a terminal, so prompts are suppressed and stdout holds
//! only the session's results.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_figures"))
        .args(args)
        .env("FIGURES_LOG_LEVEL", "off")
        .env_remove("FIGURES_SEED")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn figures binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_stdin_session_lists_figures() {
    let output = run_cli(&[], "stdin\n3\ncircle 5\nrectangle 10 20\ntriangle 3 4 5\n1\n5\n");
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("0. Circle 5\n1. Rectangle 10 20\n2. Triangle 3 4 5\n"));
}

#[test]
fn test_run_with_preset_answers() {
    let output = run_cli(
        &["run", "--input", "random", "--count", "4", "--seed", "42"],
        "1\n5\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().filter(|l| l.starts_with(char::is_numeric)).count(), 4);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let args = ["run", "-i", "random", "-n", "5", "--seed", "7"];
    let first = stdout(&run_cli(&args, "1\n5\n"));
    let second = stdout(&run_cli(&args, "1\n5\n"));
    assert_eq!(first, second);
}

#[test]
fn test_unknown_input_method_exits_with_error() {
    let output = run_cli(&[], "keyboard\n");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown input method"));
}

#[test]
fn test_save_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.txt");
    let path_str = path.to_str().unwrap();

    let script = format!("stdin\n2\nCIRCLE 1.5\nrectangle 2 3\n3\n{}\n5\n", path_str);
    let output = run_cli(&[], &script);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Circle 1.5\nRectangle 2 3\n"
    );

    let output = run_cli(&["validate", "--input", path_str], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("✓ 2 valid figures"));
}

#[test]
fn test_kinds_json() {
    let output = run_cli(&["kinds", "--json"], "");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 3);
}
