use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to rebuild a game: its configuration and every command
/// line the player entered, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub line: String,
}

impl InputJournal {
    pub fn new(config: GameConfig) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            build_id: env!("CARGO_PKG_VERSION").to_string(),
            seed: config.seed,
            config,
            inputs: Vec::new(),
        }
    }

    pub fn append_line(&mut self, line: impl Into<String>) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, line: line.into() });
    }
}
