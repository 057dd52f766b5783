use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spelt-demo"))
        .args(args)
        .env_remove("SPELT_LOG")
        .output()
        .expect("failed to spawn spelt-demo")
}

#[test]
fn unknown_format_is_fatal() {
    let output = demo(&["-f", "xml"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(101));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal: unknown output format 'xml'"), "{}", stderr);
}

#[test]
fn unknown_flag_prints_usage() {
    let output = demo(&["-x"]);
    assert_eq!(output.status.code(), Some(101));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CLI argument error"), "{}", stderr);
    assert!(stderr.contains("Usage: spelt-demo"), "{}", stderr);
}

#[test]
fn help_exits_successfully() {
    let output = demo(&["-h"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--format"));
}

#[test]
fn unopenable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("results.json");

    let output = demo(&["-o", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(101));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fatal: cannot open"));
}

#[test]
fn terminal_output() {
    let output = demo(&["--color", "never"]);
    assert_eq!(output.status.code(), Some(101));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines[0], "-".repeat(80));
    assert_eq!(lines[1], " main");
    assert_eq!(lines[2], "-".repeat(80));
    assert!(lines.iter().any(|l| l.starts_with(". integers ")));
    assert!(lines.iter().any(|l| l.starts_with("x integer_failure ")
        && l.ends_with("3 is equal to 3 but should be equal to -5")));
    assert!(!stdout.contains('\x1b'));
    assert!(stdout.contains("Tests executed:   17"), "{}", stdout);
    assert!(stdout.contains("Tests passed:     5 (29%)"), "{}", stdout);
    assert!(stdout.contains("Tests failed:     12 (71%)"), "{}", stdout);
}

#[test]
fn json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let output = demo(&["-f", "json", "-o", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(101));
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["name"], "main");
    assert_eq!(doc["results"]["nb_tests"], 17);
    assert_eq!(doc["results"]["nb_passed_tests"], 5);
    assert_eq!(doc["results"]["nb_failed_tests"], 12);

    let tests = doc["tests"].as_object().unwrap();
    assert_eq!(tests.len(), 17);
    assert_eq!(tests["strings"]["passed"], true);
    assert_eq!(
        tests["string_failure_2"]["error_message"],
        "\"foo\" is the string \"foo\" but should be null"
    );
    assert_eq!(
        tests["memory_failure_2"]["error_message"],
        "b\"foo\\nbar\" contains \"foo\\nbar\" but should contain \"foo\\tbar\""
    );
    assert!(tests["memory_failure_2"]["file"]
        .as_str()
        .unwrap()
        .ends_with("spelt-demo.rs"));
}
