use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("tarpit").unwrap()
}

#[test]
fn leading_left_move_reports_pointer_boundary() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("<")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pointer").or(predicate::str::contains("cell 0")));
}

#[test]
fn unmatched_open_bracket_reports_error_with_position() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("[+")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("unmatched bracket")
                .and(predicate::str::contains("at instruction 0")),
        );
}

#[test]
fn unmatched_close_bracket_reports_error() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+]")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unmatched bracket ']'"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    cargo_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn positional_code_together_with_file_is_a_usage_error() {
    cargo_bin()
        .arg("--file")
        .arg("whatever.tarpit")
        .arg("+++")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot use positional code together with --file"));
}

#[test]
fn missing_source_file_exits_with_runtime_error() {
    cargo_bin()
        .arg("--file")
        .arg("definitely-not-here.tarpit")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read source file"));
}
