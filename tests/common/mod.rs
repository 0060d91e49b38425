use assert_cmd::Command;
use std::path::Path;

pub fn souvenir_cmd() -> Command {
    let mut cmd = Command::cargo_bin("souvenir").unwrap();
    cmd.env_remove("SOUVENIR_ROOT");
    cmd.env_remove("SOUVENIR_LOCATION");
    cmd
}

/// Parse the default slot file of an initialized journal.
/// Returns an empty array when the slot has never been written.
#[allow(dead_code)]
pub fn read_slot(root: &Path) -> serde_json::Value {
    let path = root.join(".souvenir").join("travel_journal_entries.json");
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap(),
        Err(_) => serde_json::json!([]),
    }
}
