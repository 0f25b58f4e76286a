//! End-to-end tests for the interactive session, driven through the real
//! binary with scripted stdin.

use assert_cmd::Command;
use predicates::prelude::*;

fn quickcalc() -> Command {
    Command::cargo_bin("quickcalc").unwrap()
}

// ── result formatting ─────────────────────────────────────────────────────────

#[test]
fn addition_prints_formatted_result() {
    quickcalc()
        .write_stdin("1\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0 + 4.0 = 7.0"));
}

#[test]
fn power_prints_caret_format() {
    quickcalc()
        .write_stdin("6\n2\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2.0^10.0 = 1024.0"));
}

#[test]
fn factorial_prints_integer_result() {
    quickcalc()
        .write_stdin("5\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5.0! = 120"));
}

#[test]
fn circle_area_prints_two_decimals() {
    quickcalc()
        .write_stdin("11\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The area of the circle is: 12.57"));
}

// ── error protocol: printed text, exit 0 ──────────────────────────────────────

#[test]
fn division_by_zero_exits_normally() {
    quickcalc()
        .write_stdin("4\n10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Cannot divide by zero."));
}

#[test]
fn invalid_number_exits_normally_without_computing() {
    quickcalc()
        .write_stdin("1\nabc\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid number input."))
        .stdout(predicate::str::contains(" = ").not());
}

#[test]
fn invalid_menu_choice_exits_normally() {
    quickcalc()
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid operation choice."));
}

#[test]
fn closed_stdin_is_an_invalid_choice() {
    quickcalc()
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid operation choice."));
}

#[test]
fn trig_rejects_unparsable_angle() {
    quickcalc()
        .write_stdin("8\nxyz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid input. Please enter a valid number.",
        ))
        .stdout(predicate::str::contains("sin(").not());
}

// ── area subcommand ───────────────────────────────────────────────────────────

#[test]
fn area_subcommand_skips_top_menu() {
    quickcalc()
        .arg("area")
        .write_stdin("1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The area of the circle is: 12.57"))
        .stdout(predicate::str::contains("Available operations").not());
}

#[test]
fn area_subcommand_honours_decimals_flag() {
    quickcalc()
        .args(["area", "--decimals", "4"])
        .write_stdin("2\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The area of the rectangle is: 12.0000"));
}

#[test]
fn area_subcommand_rejects_unknown_shape() {
    quickcalc()
        .arg("area")
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please choose 1, 2, or 3.",
        ));
}

// ── flags ─────────────────────────────────────────────────────────────────────

#[test]
fn help_describes_the_calculator() {
    quickcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator"));
}

#[test]
fn version_matches_cargo() {
    quickcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn quiet_still_prints_the_result() {
    quickcalc()
        .arg("--quiet")
        .write_stdin("1\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0 + 4.0 = 7.0"))
        .stdout(predicate::str::contains("Available operations").not());
}

#[test]
fn unknown_flag_is_an_argument_error() {
    quickcalc().arg("--bogus").assert().code(2);
}
