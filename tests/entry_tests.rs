//! Integration tests for entry creation, listing, showing and deletion

use chrono::DateTime;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{read_slot, souvenir_cmd};

fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    souvenir_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn new_entry(temp: &TempDir, title: &str, content: &str) {
    souvenir_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", title, "--content", content])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"));
}

#[test]
fn test_new_persists_entry_with_stamped_fields() {
    let temp = init_journal();
    new_entry(&temp, "Beach Day", "Sun.");

    let slot = read_slot(temp.path());
    let entries = slot.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["title"], "Beach Day");
    assert_eq!(entry["content"], "Sun.");
    assert!(!entry["id"].as_str().unwrap().is_empty());
    assert!(DateTime::parse_from_rfc3339(entry["createdAt"].as_str().unwrap()).is_ok());
    assert_eq!(entry["hasVoice"], false);
}

#[test]
fn test_new_empty_title_fails_validation() {
    let temp = init_journal();

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "  "])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("title"));

    assert_eq!(read_slot(temp.path()).as_array().unwrap().len(), 0);
}

#[test]
fn test_list_is_newest_first() {
    let temp = init_journal();
    new_entry(&temp, "first trip", "");
    new_entry(&temp, "second trip", "");

    let output = souvenir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first_pos = stdout.find("first trip").unwrap();
    let second_pos = stdout.find("second trip").unwrap();
    assert!(second_pos < first_pos, "newest entry must come first");
}

#[test]
fn test_list_limit() {
    let temp = init_journal();
    new_entry(&temp, "one", "");
    new_entry(&temp, "two", "");
    new_entry(&temp, "three", "");

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("three"))
        .stdout(predicate::str::contains("one").not());
}

#[test]
fn test_show_displays_entry() {
    let temp = init_journal();
    new_entry(&temp, "Cliff Walk", "Wind and salt.");

    let slot = read_slot(temp.path());
    let id = slot[0]["id"].as_str().unwrap().to_string();

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cliff Walk"))
        .stdout(predicate::str::contains("Wind and salt."));
}

#[test]
fn test_show_unknown_id_fails() {
    let temp = init_journal();

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["show", "no-such-id"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_delete_removes_entry_and_is_idempotent() {
    let temp = init_journal();
    new_entry(&temp, "keep", "");
    new_entry(&temp, "gone", "");

    let slot = read_slot(temp.path());
    let gone_id = slot[0]["id"].as_str().unwrap().to_string();

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["delete", &gone_id])
        .assert()
        .success();

    // Deleting again is a benign no-op
    souvenir_cmd()
        .current_dir(temp.path())
        .args(["delete", &gone_id])
        .assert()
        .success();

    let slot = read_slot(temp.path());
    let entries = slot.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "keep");
}

#[test]
fn test_locate_records_coordinates() {
    let temp = init_journal();

    souvenir_cmd()
        .current_dir(temp.path())
        .env("SOUVENIR_LOCATION", "10.1234,20.5678")
        .args(["new", "--title", "Beach Day", "--locate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Located at 10.1234°, 20.5678°"));

    let slot = read_slot(temp.path());
    assert_eq!(slot[0]["location"]["lat"], 10.1234);
    assert_eq!(slot[0]["location"]["lon"], 20.5678);
}

#[test]
fn test_locate_without_fix_aborts_compose() {
    let temp = init_journal();

    souvenir_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Lost", "--locate"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("SOUVENIR_LOCATION"));

    assert_eq!(read_slot(temp.path()).as_array().unwrap().len(), 0);
}

#[test]
fn test_corrupt_slot_degrades_to_empty() {
    let temp = init_journal();
    new_entry(&temp, "soon lost", "");

    let slot_path = temp
        .path()
        .join(".souvenir")
        .join("travel_journal_entries.json");
    std::fs::write(&slot_path, "{ not json").unwrap();

    souvenir_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));

    // A fresh create rewrites a valid collection
    new_entry(&temp, "fresh", "");
    let slot = read_slot(temp.path());
    let entries = slot.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "fresh");
}
