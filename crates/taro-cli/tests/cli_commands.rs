//! Integration tests for the `taro` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn taro(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taro").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env("NO_COLOR", "1")
        .env_remove("TARO_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn offline_read(data_dir: &Path, spread: &str, name: &str) {
    taro(data_dir)
        .args(["--offline", "read", spread, "--name", name, "--seed", "7"])
        .assert()
        .success();
}

fn saved_readings(data_dir: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(data_dir.join("saved_predictions.json")).unwrap();
    serde_json::from_str::<Value>(&raw)
        .unwrap()
        .as_array()
        .unwrap()
        .clone()
}

fn reading_id(reading: &Value) -> String {
    reading["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_whole_deck() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("King of Pentacles"))
        .stdout(predicate::str::contains("78 cards"));
}

#[test]
fn spreads_lists_categories() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .arg("spreads")
        .assert()
        .success()
        .stdout(predicate::str::contains("love"))
        .stdout(predicate::str::contains("vacation"));
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn seeded_draw_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = taro(dir.path())
        .args(["draw", "--seed", "42"])
        .output()
        .unwrap();
    let second = taro(dir.path())
        .args(["draw", "--seed", "42"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8(first.stdout).unwrap();
    assert!(stdout.contains("  1. "));
    assert!(stdout.contains("  3. "));
    assert!(!stdout.contains("  4. "));
}

#[test]
fn draw_rejects_more_than_the_deck() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["draw", "--count", "79"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn offline_read_saves_reading_and_name() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["--offline", "read", "love", "--name", "  Anna  ", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Anna"));

    let readings = saved_readings(dir.path());
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0]["userName"], "Anna");
    assert_eq!(readings[0]["spreadType"], "love");
    assert_eq!(readings[0]["cards"].as_array().unwrap().len(), 3);
    assert_eq!(readings[0]["isFavorite"], false);

    let settings: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("user_settings.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(settings["userName"], "Anna");
}

#[test]
fn read_uses_saved_name() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["settings", "set", "--name", "Boris"])
        .assert()
        .success();
    taro(dir.path())
        .args(["--offline", "read", "career"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Boris"));
}

#[test]
fn read_without_name_fails() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["--offline", "read", "love"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no name given"));
    assert!(!dir.path().join("saved_predictions.json").exists());
}

#[test]
fn read_rejects_unknown_spread() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["--offline", "read", "astrology", "--name", "Anna"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("astrology"));
}

#[test]
fn unreachable_backend_reports_retry_hint() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "read",
            "future",
            "--name",
            "Anna",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("try once more"));
    assert!(!dir.path().join("saved_predictions.json").exists());
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

#[test]
fn history_lists_newest_first() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "love", "Anna");
    offline_read(dir.path(), "karma", "Anna");

    let readings = saved_readings(dir.path());
    assert_eq!(readings[0]["spreadType"], "karma");
    assert_eq!(readings[1]["spreadType"], "love");

    taro(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Karma"))
        .stdout(predicate::str::contains("Love"))
        .stdout(predicate::str::contains("2 readings"));
}

#[test]
fn empty_history() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
}

#[test]
fn favorite_toggle_and_filter() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "love", "Anna");
    offline_read(dir.path(), "health", "Anna");
    let id = reading_id(&saved_readings(dir.path())[1]);

    taro(dir.path())
        .args(["favorite", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    taro(dir.path())
        .args(["history", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Love"))
        .stdout(predicate::str::contains("1 readings"));

    taro(dir.path())
        .args(["favorite", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    taro(dir.path())
        .args(["history", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite readings."));
}

#[test]
fn clear_keeps_favorites() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "love", "Anna");
    offline_read(dir.path(), "career", "Anna");
    offline_read(dir.path(), "future", "Anna");
    let keep = reading_id(&saved_readings(dir.path())[1]);

    taro(dir.path()).args(["favorite", &keep]).assert().success();
    taro(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 readings, kept 1 favorites."));

    let readings = saved_readings(dir.path());
    assert_eq!(readings.len(), 1);
    assert_eq!(reading_id(&readings[0]), keep);
}

#[test]
fn delete_removes_reading() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "love", "Anna");
    let id = reading_id(&saved_readings(dir.path())[0]);

    taro(dir.path()).args(["delete", &id]).assert().success();
    assert!(saved_readings(dir.path()).is_empty());

    taro(dir.path())
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no reading with id"));
}

#[test]
fn show_and_share() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "vacation", "Anna");
    let id = reading_id(&saved_readings(dir.path())[0]);

    taro(dir.path())
        .args(["show", &id[..6]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation"))
        .stdout(predicate::str::contains(id.as_str()));

    taro(dir.path())
        .args(["share", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("My tarot spread: Vacation"))
        .stdout(predicate::str::contains("Cards: "));
}

#[test]
fn corrupt_history_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("saved_predictions.json"), "{not json").unwrap();
    taro(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_summarizes_history() {
    let dir = TempDir::new().unwrap();
    offline_read(dir.path(), "love", "Anna");
    offline_read(dir.path(), "love", "Anna");
    offline_read(dir.path(), "career", "Anna");

    taro(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total readings:  3"))
        .stdout(predicate::str::contains("Love"))
        .stdout(predicate::str::contains("Last seven days"));
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

#[test]
fn settings_defaults() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("Language:       system"));
}

#[test]
fn settings_set_and_reset() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args([
            "settings",
            "set",
            "--language",
            "en",
            "--dark-mode",
            "true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language:       en"))
        .stdout(predicate::str::contains("Dark mode:      on"));

    taro(dir.path())
        .args(["settings", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Language:       system"));
}

#[test]
fn settings_rejects_unknown_language() {
    let dir = TempDir::new().unwrap();
    taro(dir.path())
        .args(["settings", "set", "--language", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fr"));
}
