use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bf").unwrap();
    cmd.timeout(Duration::from_secs(5)).env_remove("BF_TAPE_SIZE");
    cmd
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn no_arguments_prints_usage() {
    cargo_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn two_arguments_print_usage() {
    cargo_bin()
        .args(["one.bf", "two.bf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin()
        .arg(dir.path().join("nope.bf"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not open file"));
}

#[test]
fn source_without_instructions_fails_to_load() {
    let tf = source_file("nothing to see here\n");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no valid Brainfuck instructions"));
}

#[test]
fn unmatched_open_bracket_aborts_at_its_position() {
    let tf = source_file("[");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("unmatched bracket '['")
                .and(predicate::str::contains("at instruction 0")),
        );
}

#[test]
fn unmatched_close_bracket_aborts_when_taken() {
    let tf = source_file("+ comment ]");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("unmatched bracket ']'")
                .and(predicate::str::contains("at instruction 1")),
        );
}

#[test]
fn pointer_underflow_keeps_earlier_output() {
    let tf = source_file("+++.<");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout("\u{3}")
        .stderr(
            predicate::str::contains("Runtime error: pointer out of bounds")
                .and(predicate::str::contains("at instruction 4"))
                .and(predicate::str::contains("    ^")),
        );
}
