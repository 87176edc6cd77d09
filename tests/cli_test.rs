//! End-to-end scenarios against the real binary.

use assert_cmd::Command;
use predicates::prelude::*;

use rscmd::exitcode;

fn rscmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rscmd"))
}

#[test]
fn no_args_lists_supported_commands() {
    rscmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Example"));
}

#[test]
fn unknown_command_fails_and_prints_listing() {
    rscmd()
        .arg("Bogus")
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("unsupported command: Bogus"))
        .stdout(predicate::str::contains("Supported commands"));
}

#[test]
fn example_echoes_string() {
    rscmd()
        .args([
            "Example",
            "--example",
            "hi",
            "--RequiredInt",
            "5",
            "--Multiple",
            "a",
            "b",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO] hi"));
}

#[test]
fn example_missing_required_option_reports_it_with_usage() {
    rscmd()
        .args(["Example", "--RequiredInt", "5", "--Multiple", "a"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("--example").and(predicate::str::contains("Usage")));
}

#[test]
fn example_help_never_runs_the_body() {
    rscmd()
        .args(["Example", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--RequiredInt").and(predicate::str::contains("[INFO]").not()));
}

#[test]
fn example_rejects_non_integer_value() {
    rscmd()
        .args([
            "Example",
            "--example",
            "hi",
            "--RequiredInt",
            "five",
            "--Multiple",
            "a",
        ])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("RequiredInt"));
}

#[test]
fn top_level_help_lists_supported_commands() {
    rscmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported commands"));
}

#[test]
fn top_level_version_prints_crate_version() {
    rscmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn malformed_top_level_flag_fails_and_prints_listing() {
    rscmd()
        .arg("--frobnicate")
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("--frobnicate"))
        .stdout(predicate::str::contains("Supported commands"));
}
