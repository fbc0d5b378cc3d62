// Command::cargo_bin is deprecated in newer assert_cmd releases in favour of a
// macro that needs build-dir setup; the function is enough here.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn engine() -> Command {
    Command::cargo_bin("war_mission_engine").expect("binary builds")
}

#[test]
fn test_help_flag() {
    engine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn test_demo_runs_to_an_end() {
    engine()
        .args(["--demo", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your mission:"))
        .stdout(predicate::str::contains("--- ROUND 1 ---"))
        .stdout(
            predicate::str::contains("WINS THE GAME")
                .or(predicate::str::contains("Round limit reached")),
        )
        .stdout(predicate::str::contains("Final standings"));
}

#[test]
fn test_missing_config_fails() {
    engine()
        .args(["--config", "/nonexistent/war.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_interactive_show_map_and_quit() {
    engine()
        .args(["--seed", "1"])
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Territory Map"))
        .stdout(predicate::str::contains("Brasil"))
        .stdout(predicate::str::contains("Leaving the game."));
}

#[test]
fn test_interactive_attack_reports_dice() {
    engine()
        .args(["--seed", "3"])
        .write_stdin("2\n0\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attacker die:"));
}

#[test]
fn test_interactive_rejects_foreign_territory() {
    engine()
        .args(["--seed", "3"])
        .write_stdin("2\n1\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("is not controlled by Green"));
}

#[test]
fn test_entered_map_is_used() {
    engine()
        .args(["--enter-map", "--seed", "5"])
        .write_stdin("2\nLisboa\nBlue\n4\nPorto\nRed\n3\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisboa"))
        .stdout(predicate::str::contains("[Player 2 - Red]"));
}

#[test]
fn test_closed_input_ends_the_game() {
    engine()
        .args(["--seed", "2"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input closed"));
}

#[test]
fn test_input_closed_during_attack_prompts_ends_the_game() {
    engine()
        .args(["--seed", "1"])
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input closed, leaving the game."))
        .stdout(predicate::str::contains("Final standings"));
}
