//! CLI tests for the `cfpl` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_program(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes()).expect("failed to write program");
    file
}

#[test]
fn test_runs_a_program_and_prints_its_output() {
    let program = write_program("VAR x AS INT\nSTART\nx = 6 * 7\nOUTPUT: x\nSTOP\n");

    Command::cargo_bin("cfpl")
        .unwrap()
        .arg(program.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn test_passes_input_values() {
    let program = write_program("VAR a, b AS INT\nSTART\nINPUT: a, b\nOUTPUT: a + b\nSTOP\n");

    Command::cargo_bin("cfpl")
        .unwrap()
        .arg(program.path())
        .arg("--input")
        .arg("20, 22")
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn test_prints_variables_when_asked() {
    let program = write_program("VAR x AS INT\nSTART\nx = 9\nSTOP\n");

    Command::cargo_bin("cfpl")
        .unwrap()
        .arg(program.path())
        .arg("--variables")
        .assert()
        .success()
        .stdout(predicate::str::contains("x = 9"));
}

#[test]
fn test_runtime_error_exits_nonzero() {
    let program = write_program("VAR x AS INT\nSTART\nx = 1 / 0\nSTOP\n");

    Command::cargo_bin("cfpl")
        .unwrap()
        .arg(program.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_parse_error_exits_nonzero() {
    let program = write_program("OUTPUT: 1\n");

    Command::cargo_bin("cfpl")
        .unwrap()
        .arg(program.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected START block"));
}

#[test]
fn test_missing_file_reports_an_error() {
    Command::cargo_bin("cfpl")
        .unwrap()
        .arg("no-such-program.cfpl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
