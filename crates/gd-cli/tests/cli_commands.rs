//! Integration tests for the `guess-duel` command-line binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use gd_core::{Category, DifficultyTable};
use predicates::prelude::*;
use tempfile::TempDir;

fn guess_duel() -> Command {
    let mut cmd = Command::cargo_bin("guess-duel").unwrap();
    cmd.env("NO_COLOR", "1").env("CLICOLOR", "0");
    cmd
}

fn play(secrets: &str) -> Command {
    let mut cmd = guess_duel();
    cmd.args(["play", "--category", "easy", "--seed", "1", "--secrets", secrets]);
    cmd
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_clears_first_level() {
    play("7")
        .write_stdin("3\n9\n7\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Too low HP: 2/3"))
        .stdout(predicate::str::contains("Too high HP: 1/3"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Level 1 cleared! On to level 2."))
        .stdout(predicate::str::contains("Range 1-12"));
}

#[test]
fn play_defeat_reveals_secret() {
    play("7")
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Defeated on level 1"))
        .stdout(predicate::str::contains("The secret was 7."));
}

#[test]
fn play_logs_recorded_runs_at_info() {
    guess_duel()
        .args(["--log-level", "info", "play", "--category", "easy", "--secrets", "7"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("run recorded"))
        .stderr(predicate::str::contains("Attacker wins - Easy level 1"));

    play("7")
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("run recorded").not());
}

#[test]
fn play_guess_after_defeat_is_refused() {
    play("7")
        .write_stdin("1\n2\n3\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("the run is over"));
}

#[test]
fn play_records_history() {
    play("7")
        .write_stdin("1\n2\n3\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attacker wins - Easy level 1"));
}

#[test]
fn play_again_starts_fresh() {
    play("7,5")
        .write_stdin("1\n2\n3\nagain\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 1/5 | Range 1-10 | HP: 3/3"));
}

#[test]
fn play_champion() {
    play("1,1,1,1,1")
        .write_stdin("1\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Champion of Easy!"));
}

#[test]
fn play_invalid_guess_costs_nothing() {
    play("7")
        .write_stdin("abc\n42\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'abc' is not a number"))
        .stdout(predicate::str::contains("42 is outside the range 1-10"))
        .stdout(predicate::str::contains("HP: 3/3"))
        .stdout(predicate::str::contains("HP: 2/3").not());
}

#[test]
fn play_hint_unlocks_on_level_three() {
    play("1,1,4")
        .write_stdin("1\n1\n1\n2\nhint\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint unlocked: The number is even"))
        .stdout(predicate::str::contains("Hint: The number is even"));
}

#[test]
fn play_hot_seat() {
    guess_duel()
        .args(["play", "--hot-seat"])
        .write_stdin("50\n4\n2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attacker, enter the secret (1-10)"))
        .stdout(predicate::str::contains("Invalid secret: 50 is outside the range 1-10"))
        .stdout(predicate::str::contains("Secret locked in."))
        .stdout(predicate::str::contains("Too low HP: 2/3"))
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn play_unknown_category() {
    guess_duel()
        .args(["play", "--category", "nightmare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category: nightmare"));
}

#[test]
fn play_custom_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.json");
    let table = DifficultyTable::default().with_starting_hp(Category::Easy, 5);
    fs::write(&path, table.to_json_pretty().unwrap()).unwrap();

    play("7")
        .arg("--table")
        .arg(&path)
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Too low HP: 4/5"));
}

// ---------------------------------------------------------------------------
// table
// ---------------------------------------------------------------------------

#[test]
fn table_lists_default_ranges() {
    guess_duel()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("1-10"))
        .stdout(predicate::str::contains("10-198"))
        .stdout(predicate::str::contains("100-1998"))
        .stdout(predicate::str::contains("quarter range"));
}

#[test]
fn table_single_category() {
    guess_duel()
        .args(["table", "medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Medium"))
        .stdout(predicate::str::contains("Hard").not());
}

#[test]
fn table_json_is_loadable() {
    let output = guess_duel().args(["table", "--json"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        DifficultyTable::from_json_str(&text).unwrap(),
        DifficultyTable::default()
    );
}

#[test]
fn table_missing_file() {
    guess_duel()
        .args(["table", "--table", "/nonexistent/table.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn table_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.json");
    let table = DifficultyTable::default().with_starting_hp(Category::Hard, 0);
    fs::write(&path, table.to_json_pretty().unwrap()).unwrap();

    guess_duel()
        .arg("table")
        .arg("--table")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid table entry for Hard level 1"));
}

// ---------------------------------------------------------------------------
// rules
// ---------------------------------------------------------------------------

#[test]
fn rules_explains_the_game() {
    guess_duel()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("How to play"))
        .stdout(predicate::str::contains("Category Champion"))
        .stdout(predicate::str::contains("3-digit numbers"));
}
