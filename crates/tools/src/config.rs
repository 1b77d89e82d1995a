//! TOML configuration shared by the tools binaries.
//! This module owns locating, parsing and defaulting the config file.
//! It does not own logging setup; see `logging`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use centaur_core::GameConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "centaur.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ToolsConfig {
    /// `tracing` filter directive; `RUST_LOG` overrides it.
    pub log_level: String,
    /// Where `play --record` writes journals. `None` uses the data dir.
    pub journal_dir: Option<PathBuf>,
    pub game: GameConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            journal_dir: None,
            game: GameConfig::default(),
        }
    }
}

impl ToolsConfig {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::get_default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn journal_dir(&self) -> Option<PathBuf> {
        self.journal_dir.clone().or_else(|| {
            ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("journals"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centaur_core::{DiceMode, PathType};
    use tempfile::tempdir;

    #[test]
    fn full_file_parses() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
log_level = "debug"
journal_dir = "/tmp/journals"

[game]
seed = 77
player_name = "Swiftmane"
path = "mystic"
starting_inventory = ["crystal_focus"]

[game.dice]
mode = "fixed"
percent = 75
"#,
        )
        .expect("write");

        let config = ToolsConfig::load(&path).expect("load");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.journal_dir, Some(PathBuf::from("/tmp/journals")));
        assert_eq!(config.game.seed, 77);
        assert_eq!(config.game.player_name, "Swiftmane");
        assert_eq!(config.game.path, Some(PathType::Mystic));
        assert_eq!(config.game.dice, DiceMode::Fixed { percent: 75 });
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[game]\nseed = 3\n").expect("write");

        let config = ToolsConfig::load(&path).expect("load");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.game, GameConfig::with_seed(3));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let err = ToolsConfig::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "log_level = [").expect("write");
        let err = ToolsConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
