use thiserror::Error;
use tracing::debug;

use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("unsupported journal format version {found} (expected {expected})")]
    UnsupportedFormat { found: u16, expected: u16 },
    #[error("journal input out of sequence: expected seq {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub commands_run: u64,
    pub final_clock: GameClock,
}

/// Rebuilds the game a journal describes and runs every recorded line.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat {
            found: journal.format_version,
            expected: JOURNAL_FORMAT_VERSION,
        });
    }

    let config = GameConfig { seed: journal.seed, ..journal.config.clone() };
    let mut game = Game::new(config);
    for (expected, record) in (0u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        let response = game.execute(&record.line);
        debug!(seq = record.seq, line = %record.line, bytes = response.len(), "replayed input");
    }

    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        commands_run: game.commands_run(),
        final_clock: *game.clock(),
    })
}
