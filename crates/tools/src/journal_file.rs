//! Journal persistence: atomic JSON writes and loads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use centaur_core::InputJournal;

/// `journal_<seed>.json` inside `dir`.
pub fn path_for_seed(dir: &Path, seed: u64) -> PathBuf {
    dir.join(format!("journal_{seed}.json"))
}

pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use centaur_core::{GameConfig, replay_to_end};
    use tempfile::tempdir;

    fn sample() -> InputJournal {
        let mut journal = InputJournal::new(GameConfig::with_seed(99));
        for line in ["look", "take map", "attack wolf"] {
            journal.append_line(line);
        }
        journal
    }

    #[test]
    fn atomic_write_and_load() {
        let dir = tempdir().expect("tempdir");
        let path = path_for_seed(&dir.path().join("nested"), 99);
        let journal = sample();

        write_atomic(&journal, &path).expect("write");
        assert!(path.exists());
        assert_eq!(load(&path).expect("load"), journal);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn rewrite_replaces_previous_contents() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("run.json");
        let mut journal = sample();
        write_atomic(&journal, &path).expect("first write");
        journal.append_line("attack");
        write_atomic(&journal, &path).expect("second write");

        let loaded = load(&path).expect("load");
        assert_eq!(loaded.inputs.len(), 4);
        assert_eq!(
            replay_to_end(&loaded).expect("replay"),
            replay_to_end(&journal).expect("replay")
        );
    }

    #[test]
    fn garbage_is_invalid_data() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").expect("write");
        assert_eq!(load(&path).unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
