//! CLI end-to-end tests.
//!
//! The library entry point is exercised directly, and the `jstidy` binary is
//! spawned to check stdout and exit codes.
//!
//! Exit code expectations:
//! - 0: Success
//! - 2: Invalid arguments or configuration
//! - 3: Missing input file
//! - 4: Unreadable syntax tree

mod support;

use std::fs;
use std::path::Path;
use std::process::Command;

use jstidy::cli::{run_lint, LintOptions};
use jstidy::error::{OutputErrorCode, TidyError};
use serde_json::Value;
use support::*;
use tempfile::TempDir;

const SOURCE: &str = "console.log(\"hi\");\nvar a = \"x\";\na = 'y';";

/// Write `SOURCE` as `app.js` and its tree as `app.js.json` into `dir`.
fn write_fixture(dir: &Path) {
    let tree = program(
        vec![
            console_call("console", "log", vec![string("\"hi\"", 12)], 0),
            declaration("var", "a", string("\"x\"", 27), 19),
            stmt(assign(ident("a", 32), string("'y'", 36))),
        ],
        40,
    );
    fs::write(dir.join("app.js"), SOURCE).unwrap();
    fs::write(dir.join("app.js.json"), tree.to_string()).unwrap();
}

/// Run jstidy with given arguments and return (stdout, stderr, exit_code).
fn run_jstidy(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_jstidy"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute jstidy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Library entry point
// ============================================================================

#[test]
fn run_lint_reports_in_discovery_order() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    let file = temp.path().join("app.js");

    let report = run_lint(&LintOptions::new(&file)).unwrap();
    let display = file.display().to_string();
    assert_eq!(
        report.render(),
        format!(
            "{display}:1:1 - unnecessary console.log\n\
             {display}:1:12 - no using single quote\n\
             {display}:2:8 - no using single quote\n\
             {display}:3:4 - no using single quote"
        )
    );
    assert!(report.fixed_path.is_none());
    assert!(!temp.path().join("app.js.linted.js").exists());
}

#[test]
fn run_lint_fix_mode_writes_rewritten_program() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    let options = LintOptions {
        apply_fix: true,
        ..LintOptions::new(temp.path().join("app.js"))
    };

    let report = run_lint(&options).unwrap();
    let fixed = temp.path().join("app.js.linted.js");
    assert_eq!(report.fixed_path.as_deref(), Some(fixed.as_path()));
    assert_eq!(
        fs::read_to_string(&fixed).unwrap(),
        "let a = 'x';\na = 'y';\n"
    );
}

#[test]
fn run_lint_honours_config_beside_the_file() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    fs::write(
        temp.path().join("jstidy.toml"),
        "[output]\nfixed_suffix = \".out.js\"\nindent = \"    \"\n",
    )
    .unwrap();
    let options = LintOptions {
        apply_fix: true,
        ..LintOptions::new(temp.path().join("app.js"))
    };

    run_lint(&options).unwrap();
    assert!(temp.path().join("app.js.out.js").exists());
}

#[test]
fn run_lint_missing_source_is_file_not_found() {
    let temp = TempDir::new().unwrap();
    let err = run_lint(&LintOptions::new(temp.path().join("nope.js"))).unwrap_err();
    assert!(matches!(err, TidyError::FileNotFound { .. }));
    assert_eq!(err.error_code(), OutputErrorCode::ResolutionError);
}

#[test]
fn run_lint_rejects_source_given_as_its_own_tree() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    let file = temp.path().join("app.js");
    let options = LintOptions {
        ast: Some(file.clone()),
        ..LintOptions::new(&file)
    };
    let err = run_lint(&options).unwrap_err();
    assert!(matches!(err, TidyError::InvalidArguments { .. }));
    assert_eq!(err.error_code(), OutputErrorCode::InvalidArguments);
}

#[test]
fn run_lint_bad_tree_is_tree_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "x;").unwrap();
    fs::write(temp.path().join("app.js.json"), "{\"type\": \"File\"}").unwrap();
    let err = run_lint(&LintOptions::new(temp.path().join("app.js"))).unwrap_err();
    assert_eq!(err.error_code(), OutputErrorCode::TreeError);
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn plain_mode_prints_one_line_per_diagnostic() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    let (stdout, _stderr, exit_code) = run_jstidy(temp.path(), &["--file", "app.js"]);
    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "app.js:1:1 - unnecessary console.log",
            "app.js:1:12 - no using single quote",
            "app.js:2:8 - no using single quote",
            "app.js:3:4 - no using single quote",
        ]
    );
}

#[test]
fn fix_mode_prints_nothing() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    let (stdout, _stderr, exit_code) = run_jstidy(temp.path(), &["-f", "app.js", "-a"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty(), "unexpected stdout: {stdout}");
    assert!(temp.path().join("app.js.linted.js").exists());
}

#[test]
fn json_mode_emits_lint_response() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    let (stdout, _stderr, exit_code) = run_jstidy(temp.path(), &["--file", "app.js", "--json"]);
    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["file"], "app.js");
    assert_eq!(json["diagnostics"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["diagnostics"][0]["message"], "unnecessary console.log");
}

#[test]
fn missing_file_exits_3() {
    let temp = TempDir::new().unwrap();

    let (stdout, _stderr, exit_code) =
        run_jstidy(temp.path(), &["--file", "missing.js", "--json"]);
    assert_eq!(exit_code, 3);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn invalid_tree_exits_4_with_message_on_stderr() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("app.js"), "x;").unwrap();
    fs::write(temp.path().join("app.js.json"), "not json").unwrap();

    let (stdout, stderr, exit_code) = run_jstidy(temp.path(), &["--file", "app.js"]);
    assert_eq!(exit_code, 4);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid syntax tree"), "stderr: {stderr}");
}

#[test]
fn source_as_tree_exits_2() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());

    let (stdout, stderr, exit_code) =
        run_jstidy(temp.path(), &["--file", "app.js", "--ast", "app.js"]);
    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("source file itself"), "stderr: {stderr}");
}

#[test]
fn bad_config_exits_2() {
    let temp = TempDir::new().unwrap();
    write_fixture(temp.path());
    fs::write(temp.path().join("bad.toml"), "[lint\n").unwrap();

    let (_stdout, _stderr, exit_code) =
        run_jstidy(temp.path(), &["--file", "app.js", "--config", "bad.toml"]);
    assert_eq!(exit_code, 2);
}
