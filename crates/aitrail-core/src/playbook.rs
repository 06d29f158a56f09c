//! Per-session playbook usage store.
//!
//! One JSON array of pattern id strings per session id, stored alongside
//! the trajectory logs. Single-writer-per-session is assumed; there is no
//! locking, and concurrent writers to the same session file may lose
//! updates (last write wins).

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name convention incorporating the session id.
fn usage_file(dir: &Path, session_id: &str) -> PathBuf {
    dir.join(format!("playbooks-{session_id}.json"))
}

/// Load the stored pattern id list for a session.
///
/// An absent file or one whose contents fail to decode as a string array
/// yields an empty list, not an error.
pub fn load(session_id: &str, dir: &Path) -> Vec<String> {
    let Ok(text) = fs::read_to_string(usage_file(dir, session_id)) else {
        return Vec::new();
    };
    serde_json::from_str(&text).unwrap_or_default()
}

/// Overwrite the session's list wholesale, creating the containing
/// directory if absent.
pub fn save(session_id: &str, ids: &[String], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let text = serde_json::to_string(ids)?;
    fs::write(usage_file(dir, session_id), text)?;
    Ok(())
}

/// Append a pattern id if not already present (set-like semantics over an
/// ordered list). Safe to call before the directory or file exists.
pub fn append(session_id: &str, id: &str, dir: &Path) -> Result<()> {
    let mut ids = load(session_id, dir);
    if ids.iter().any(|existing| existing == id) {
        return Ok(());
    }
    ids.push(id.to_string());
    save(session_id, &ids, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_of_absent_file_yields_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load("ses-1", tmp.path()).is_empty());
    }

    #[test]
    fn load_of_corrupt_file_yields_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(usage_file(tmp.path(), "ses-1"), "{not an array").unwrap();
        assert!(load("ses-1", tmp.path()).is_empty());

        fs::write(usage_file(tmp.path(), "ses-1"), r#"{"wrong": "shape"}"#).unwrap();
        assert!(load("ses-1", tmp.path()).is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let tmp = TempDir::new().unwrap();
        let ids: Vec<String> = ["pb-c", "pb-a", "pb-b"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        save("ses-1", &ids, tmp.path()).unwrap();
        assert_eq!(load("ses-1", tmp.path()), ids);
    }

    #[test]
    fn save_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("state/sessions");
        save("ses-1", &["pb-x".to_string()], &nested).unwrap();
        assert_eq!(load("ses-1", &nested), ["pb-x"]);
    }

    #[test]
    fn append_is_idempotent_per_id() {
        let tmp = TempDir::new().unwrap();
        append("ses-1", "pb-retry", tmp.path()).unwrap();
        append("ses-1", "pb-retry", tmp.path()).unwrap();
        assert_eq!(load("ses-1", tmp.path()), ["pb-retry"]);
    }

    #[test]
    fn append_grows_list_by_one_and_preserves_order() {
        let tmp = TempDir::new().unwrap();
        append("ses-1", "pb-one", tmp.path()).unwrap();
        append("ses-1", "pb-two", tmp.path()).unwrap();
        append("ses-1", "pb-one", tmp.path()).unwrap();
        assert_eq!(load("ses-1", tmp.path()), ["pb-one", "pb-two"]);
    }

    #[test]
    fn append_works_before_directory_exists() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("not/yet/created");
        append("ses-1", "pb-first", &nested).unwrap();
        assert_eq!(load("ses-1", &nested), ["pb-first"]);
    }

    #[test]
    fn sessions_are_isolated() {
        let tmp = TempDir::new().unwrap();
        append("ses-1", "pb-a", tmp.path()).unwrap();
        append("ses-2", "pb-b", tmp.path()).unwrap();
        assert_eq!(load("ses-1", tmp.path()), ["pb-a"]);
        assert_eq!(load("ses-2", tmp.path()), ["pb-b"]);
    }
}
