// End-to-end tests for the unitmaker binary.

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const SAMPLE: &str = "package sample

import \"strings\"

const Version = \"1\"

type Point struct {
\tX, Y int
}

// Add returns the sum.
func Add(a int, b int) int {
\treturn a + b
}

func NoOp() {}

func Upper(s string) string {
\treturn strings.ToUpper(s)
}
";

fn unitmaker() -> Command {
    Command::cargo_bin("unitmaker").unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_arguments_is_usage_error() {
    let temp = TempDir::new().unwrap();

    unitmaker()
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(contains("Usage"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_two_arguments_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let a = write(&temp, "a.go", SAMPLE);
    let b = write(&temp, "b.go", SAMPLE);

    unitmaker().arg(&a).arg(&b).assert().failure().code(2);

    assert!(!temp.path().join("a_test.go").exists());
    assert!(!temp.path().join("b_test.go").exists());
}

#[test]
fn test_generates_test_file() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);

    unitmaker()
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Generated").and(contains("math_test.go")));

    let out = fs::read_to_string(temp.path().join("math_test.go")).unwrap();
    assert!(out.starts_with("package sample\n\nimport \"testing\"\n\n"));
    assert!(out.contains("// TODO: Generate tests for methods of type Point\n"));
    assert!(out.contains("func TestAdd(t *testing.T) {\n"));
    assert!(out.contains("\tgot := Add(a, b)\n"));
    assert!(out.contains("func TestNoOp(t *testing.T) {\n\tNoOp()\n}\n"));
    assert!(out.contains("\tvar s string"));
    assert!(!out.contains("Version"));
    assert!(!out.contains("strings"));

    let point = out.find("type Point").unwrap();
    let add = out.find("TestAdd").unwrap();
    let noop = out.find("TestNoOp").unwrap();
    let upper = out.find("TestUpper").unwrap();
    assert!(point < add && add < noop && noop < upper);
}

#[test]
fn test_input_without_go_extension() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "snippet", "package snippet\n\nfunc F() {}\n");

    unitmaker().arg(&input).assert().success();

    assert!(temp.path().join("snippet_test.go").exists());
}

#[test]
fn test_syntax_error_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "broken.go", "package broken\n\nfunc Add(a int {\n");

    unitmaker()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unitmaker::syntax_error"));

    assert!(!temp.path().join("broken_test.go").exists());
}

#[test]
fn test_missing_package_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "nopkg.go", "func F() {}\n");

    unitmaker()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("unitmaker::missing_package").or(contains("unitmaker::syntax_error")));

    assert!(!temp.path().join("nopkg_test.go").exists());
}

#[test]
fn test_missing_input_file() {
    let temp = TempDir::new().unwrap();

    unitmaker()
        .arg(temp.path().join("absent.go"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);

    unitmaker()
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(contains("func TestAdd(t *testing.T) {").and(contains("── Summary ──")));

    assert!(!temp.path().join("math_test.go").exists());
}

#[test]
fn test_no_overwrite_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);
    let existing = write(&temp, "math_test.go", "package sample\n");

    unitmaker()
        .arg(&input)
        .arg("--no-overwrite")
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(fs::read_to_string(existing).unwrap(), "package sample\n");
}

#[test]
fn test_overwrites_by_default() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);
    let existing = write(&temp, "math_test.go", "package sample\n");

    unitmaker().arg(&input).assert().success();

    assert!(fs::read_to_string(existing).unwrap().contains("TestAdd"));
}

#[test]
fn test_output_and_indent_width() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);
    let output = temp.path().join("custom.go");

    unitmaker()
        .arg(&input)
        .args(["--indent-width", "4", "-o"])
        .arg(&output)
        .assert()
        .success();

    let out = fs::read_to_string(output).unwrap();
    assert!(out.contains("\n    NoOp()\n"));
    assert!(!temp.path().join("math_test.go").exists());
}

#[test]
fn test_dump_declarations() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "math.go", SAMPLE);

    unitmaker()
        .arg(&input)
        .arg("--dump-declarations")
        .assert()
        .success()
        .stdout(contains("\"package\": \"sample\"").and(contains("\"name\": \"Add\"")));

    assert!(!temp.path().join("math_test.go").exists());
}

#[test]
fn test_method_warning_on_stderr() {
    let temp = TempDir::new().unwrap();
    let input = write(
        &temp,
        "buf.go",
        "package buf\n\ntype B struct{}\n\nfunc (b *B) Len() int { return 0 }\n",
    );

    unitmaker()
        .arg(&input)
        .assert()
        .success()
        .stderr(contains("warning: method 'Len' is stubbed as a plain function"));
}

#[test]
fn test_unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    let input = write(&temp, "a.go", SAMPLE);
    fs::create_dir(temp.path().join("a_test.go")).unwrap();

    unitmaker()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to create test file"));

    assert!(temp.path().join("a_test.go").is_dir());
}
