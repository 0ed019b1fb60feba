use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command {
    Command::cargo_bin("tarpit").unwrap()
}

#[test]
fn program_output_goes_to_stdout_meta_stays_off_stderr() {
    cargo_bin()
        .arg("+++.")
        .assert()
        .success()
        .stdout("\u{3}\n")
        .stderr(predicate::str::contains("\u{3}").not());
}

#[test]
fn positional_code_parts_are_concatenated() {
    cargo_bin()
        .arg("++")
        .arg("+.")
        .assert()
        .success()
        .stdout("\u{3}\n");
}

#[test]
fn untouched_cells_print_as_zero_bytes() {
    cargo_bin()
        .arg(">>>>>.")
        .assert()
        .success()
        .stdout("\u{0}\n");
}

#[test]
fn loop_zeroes_cell_before_printing() {
    cargo_bin()
        .arg("+++[-].")
        .assert()
        .success()
        .stdout("\u{0}\n");
}

#[test]
fn non_instruction_characters_are_comments() {
    cargo_bin()
        .arg("three plus signs +++ then a dot .")
        .assert()
        .success()
        .stdout("\u{3}\n");
}
