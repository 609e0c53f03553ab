use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Writes the filetool definition used across tests and returns its path.
fn write_filetool_definition(dir: &TempDir) -> PathBuf {
    let json = serde_json::json!({
        "program": "filetool",
        "description": "A simple file tool.",
        "version": "0.1.0",
        "usage_examples": ["filetool read -n 5 /tmp/f"],
        "options": [
            { "name": "PATH", "help": "File to operate on.", "kind": "String" },
            { "name": "iterations", "short_form": "n", "help": "Iteration count.", "kind": "Int" },
            { "name": "verbose", "short_form": "v", "help": "Verbose output.", "kind": "Bool" }
        ],
        "actions": [
            { "name": "read", "help": "Read the file." },
            { "name": "write", "help": "Write to the file." }
        ]
    });
    let path = dir.path().join("filetool.json");
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap())
        .expect("failed to write definition");
    path
}

fn run_argline(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argline"))
        .args(args)
        .output()
        .expect("failed to run argline")
}

#[test]
fn no_arguments_prints_own_help() {
    let out = run_argline(&[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage: argline"));
    assert!(stdout.contains("parse"));
    assert!(stdout.contains("show"));
}

#[test]
fn help_flag_alone_prints_help_and_exits_zero() {
    for flag in ["-h", "--help"] {
        let out = run_argline(&[flag]);

        assert!(out.status.success(), "{flag} should exit zero");
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Usage: argline"));
        assert!(out.stderr.is_empty());
    }
}

#[test]
fn show_renders_definition_help() {
    let dir = TempDir::new().unwrap();
    let defs = write_filetool_definition(&dir);

    let out = run_argline(&["show", defs.to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("filetool - A simple file tool."));
    assert!(stdout.contains("-n, --iterations <INT>"));
    assert!(stdout.contains("<PATH>"));
    assert!(stdout.contains("read"));
}

#[test]
fn parse_reports_parameters_as_json() {
    let dir = TempDir::new().unwrap();
    let defs = write_filetool_definition(&dir);

    let out = run_argline(&[
        "parse",
        defs.to_str().unwrap(),
        "filetool",
        "read",
        "-n",
        "5",
        "/tmp/f",
    ]);

    assert!(out.status.success(), "parse should succeed");
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");

    assert_eq!(report["program"], "filetool");
    assert_eq!(report["outcome"], "parsed");
    assert_eq!(report["action"], "read");

    let parameters = report["parameters"].as_array().unwrap();
    assert_eq!(parameters.len(), 3);
    assert_eq!(parameters[0]["name"], "PATH");
    assert_eq!(parameters[0]["value"], "/tmp/f");
    assert_eq!(parameters[1]["name"], "iterations");
    assert_eq!(parameters[1]["value"], "5");
    assert_eq!(parameters[1]["specified"], true);
    assert_eq!(parameters[2]["name"], "verbose");
    assert_eq!(parameters[2]["value"], "False");
}

#[test]
fn parse_with_no_target_tokens_is_empty_outcome() {
    let dir = TempDir::new().unwrap();
    let defs = write_filetool_definition(&dir);

    let out = run_argline(&["parse", defs.to_str().unwrap()]);

    assert!(out.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(report["outcome"], "empty");
}

#[test]
fn parse_failure_prints_target_help_and_fails() {
    let dir = TempDir::new().unwrap();
    let defs = write_filetool_definition(&dir);

    // The flagged option at the end of the vector has no value token.
    let out = run_argline(&["parse", defs.to_str().unwrap(), "filetool", "/tmp/f", "-n"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("filetool"), "target help goes to stderr");
    assert!(stderr.contains("error:"));
}

#[test]
fn missing_definition_file_fails() {
    let out = run_argline(&["show", "/nonexistent/defs.json"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot load definition"));
}

#[test]
fn unknown_action_fails_with_own_help() {
    let dir = TempDir::new().unwrap();
    let defs = write_filetool_definition(&dir);

    let out = run_argline(&["frobnicate", defs.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown action 'frobnicate'"));
    assert!(stderr.contains("Usage: argline"));
}

#[test]
fn invalid_definition_entry_fails() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "program": "bad",
        "options": [
            { "name": "iterations", "short_form": "iter", "kind": "Int" }
        ]
    });
    let path = dir.path().join("bad.json");
    fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();

    let out = run_argline(&["show", path.to_str().unwrap()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("short form"));
}
