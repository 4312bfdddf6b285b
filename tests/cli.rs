//! Smoke tests for the `play` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn play() -> Command {
    Command::cargo_bin("play").expect("binary builds")
}

#[test]
fn test_list_shows_roster() {
    play()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("uno"))
        .stdout(predicate::str::contains("othello"))
        .stdout(predicate::str::contains("solitaire"));
}

#[test]
fn test_bot_war_runs_to_a_result() {
    play()
        .args(["--game", "war", "--bots", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wins!").or(predicate::str::contains("draw")));
}

#[test]
fn test_bot_uno_with_house_rules_runs() {
    play()
        .args([
            "--game",
            "uno",
            "--players",
            "4",
            "--bots",
            "--seed",
            "3",
            "--stacking",
            "--jump-in",
            "--seven-zero",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("wins!"));
}

#[test]
fn test_unknown_game_fails() {
    play()
        .args(["--game", "croquet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown game"));
}

#[test]
fn test_bots_rejected_for_puzzles() {
    play()
        .args(["--game", "fifteen", "--bots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no bot"));
}

#[test]
fn test_missing_game_argument_fails() {
    play()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--game"));
}

#[test]
fn test_human_game_accepts_scripted_input() {
    // Solve the first sokoban level from stdin: one push right.
    play()
        .args(["--game", "sokoban", "--level", "0"])
        .write_stdin("r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("solved!"));
}
