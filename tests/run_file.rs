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
fn hello_world_with_comments_prints_exact_bytes() {
    let tf = source_file(
        "Hello World program\n\
         ++++++++++ set counter\n\
         [>+++++++>++++++++++>+++>+<<<<-] fill cells\n\
         >++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>. print\n",
    );
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("Hello World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn clear_loop_produces_no_output() {
    let tf = source_file("+[-]");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_is_raw_bytes_not_numbers() {
    let tf = source_file("+++.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout("\u{3}");
}

#[test]
fn wraparound_warns_on_stderr_and_continues() {
    let tf = source_file("-.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(vec![255u8])
        .stderr(predicate::str::contains("warning: integer underflow at instruction 0"));
}

#[test]
fn quiet_suppresses_warnings() {
    let tf = source_file("-+");
    cargo_bin()
        .arg("--quiet")
        .arg(tf.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_prints_step_table_to_stderr() {
    let tf = source_file(">");
    cargo_bin()
        .arg("--debug")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("STEP | IP")
                .and(predicate::str::contains("Moved pointer head to index 1")),
        );
}

#[test]
fn tape_size_flag_limits_the_tape() {
    let tf = source_file(">>");
    cargo_bin()
        .args(["--tape-size", "2"])
        .arg(tf.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pointer out of bounds"));

    cargo_bin()
        .args(["--tape-size", "3"])
        .arg(tf.path())
        .assert()
        .success();
}

#[test]
fn tape_size_env_is_used_when_flag_is_absent() {
    let tf = source_file(">>");
    cargo_bin()
        .env("BF_TAPE_SIZE", "2")
        .arg(tf.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pointer out of bounds"));

    cargo_bin()
        .env("BF_TAPE_SIZE", "2")
        .args(["--tape-size", "8"])
        .arg(tf.path())
        .assert()
        .success();
}

#[test]
fn invalid_tape_size_env_is_a_usage_error() {
    let tf = source_file("+");
    cargo_bin()
        .env("BF_TAPE_SIZE", "0")
        .arg(tf.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BF_TAPE_SIZE"));
}
