//! Integration tests for the cookiecutter CLI
//!
//! These tests run the built binary end-to-end with piped stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the path to the cookiecutter binary
fn cookiecutter_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cookiecutter"))
}

/// Run cookiecutter with `stdin` piped in and return its output
fn run_cookiecutter(args: &[&str], envs: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(cookiecutter_binary());
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("Failed to execute cookiecutter");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for cookiecutter")
}

fn write_context(dir: &Path, content: &str) -> String {
    let path = dir.join("cookiecutter.json");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

/// Parse the JSON document printed after any prompts
fn printed_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find("{\n").unwrap_or(0);
    serde_json::from_str(&stdout[start..]).expect("stdout should end with a JSON document")
}

#[test]
fn test_help() {
    let output = run_cookiecutter(&["--help"], &[], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("confirm"));
}

#[test]
fn test_resolve_no_input_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(
        dir.path(),
        r#"{"cookiecutter": {
            "project_name": "A New Project",
            "pkg_name": "{{ cookiecutter.project_name|lower|replace(' ', '') }}",
            "include_tests": {"default": "yes", "prompt": "Include some test files?", "type": "boolean"}
        }}"#,
    );

    let output = run_cookiecutter(&["resolve", &path, "--no-input"], &[], "");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        printed_json(&output),
        serde_json::json!({
            "project_name": "A New Project",
            "pkg_name": "anewproject",
            "include_tests": true
        })
    );
}

#[test]
fn test_resolve_environment_override_with_no_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(dir.path(), r#"{"cookiecutter": {"repo_name": "something"}}"#);

    let output = run_cookiecutter(
        &["resolve", &path, "--no-input"],
        &[("COOKIECUTTER_REPO_NAME", "better")],
        "",
    );

    assert!(output.status.success());
    assert_eq!(printed_json(&output), serde_json::json!({"repo_name": "better"}));
}

#[test]
fn test_resolve_reads_unicode_answers_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(
        dir.path(),
        r#"{"cookiecutter": {"full_name": "Řekni či napiš své jméno", "email": "you@example.com"}}"#,
    );

    let output = run_cookiecutter(&["resolve", &path], &[], "Pizzä ïs Gööd\n\n");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("full_name [Řekni či napiš své jméno]: "));
    assert_eq!(
        printed_json(&output),
        serde_json::json!({"full_name": "Pizzä ïs Gööd", "email": "you@example.com"})
    );
}

#[test]
fn test_resolve_fails_when_stdin_closes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(dir.path(), r#"{"cookiecutter": {"full_name": "Your Name"}}"#);

    let output = run_cookiecutter(&["resolve", &path], &[], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("full_name"));
}

#[test]
fn test_resolve_invalid_boolean_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(
        dir.path(),
        r#"{"cookiecutter": {"use_ci": {"default": "no", "type": "boolean"}}}"#,
    );

    let output = run_cookiecutter(
        &["resolve", &path, "--no-input"],
        &[("COOKIECUTTER_USE_CI", "perhaps")],
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("use_ci"));
    assert!(stderr.contains("perhaps"));
}

#[test]
fn test_resolve_extra_context_and_yaml_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_context(
        dir.path(),
        r#"{"cookiecutter": {"full_name": "Your Name", "license": ["MIT", "BSD"]}}"#,
    );

    let output = run_cookiecutter(
        &["resolve", &path, "full_name=Audrey Roy", "license=BSD", "--no-input", "--format", "yaml"],
        &[],
        "",
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("full_name: Audrey Roy"));
    assert!(stdout.contains("license: BSD"));
}

#[test]
fn test_confirm_exit_status() {
    let yes = run_cookiecutter(&["confirm", "Proceed?"], &[], "y\n");
    assert!(yes.status.success());
    assert!(String::from_utf8_lossy(&yes.stdout).contains("Proceed? [y/n] "));

    let no = run_cookiecutter(&["confirm", "Proceed?", "--default", "no"], &[], "\n");
    assert_eq!(no.status.code(), Some(1));

    let bad = run_cookiecutter(&["confirm", "Proceed?", "--default", "yn"], &[], "junk\n");
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("Invalid argument"));
}
