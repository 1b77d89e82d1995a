use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use centaur_core::{Game, InputJournal};
use clap::Parser;
use tools::{config::ToolsConfig, format_snapshot_hash, journal_file, logging};
use tracing::{error, info};

const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

#[derive(Parser)]
#[command(author, version, about = "Play interactively from the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to centaur.toml in the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the configured seed
    #[arg(short, long)]
    seed: Option<u64>,
    /// Record every command to a journal; without a value the file goes to the journal dir
    #[arg(short, long)]
    record: Option<Option<PathBuf>>,
}

fn journal_path(args: &Args, config: &ToolsConfig) -> Result<Option<PathBuf>> {
    let Some(requested) = &args.record else {
        return Ok(None);
    };
    if let Some(explicit) = requested {
        return Ok(Some(explicit.clone()));
    }
    let dir = config.journal_dir().context("No journal directory available")?;
    Ok(Some(journal_file::path_for_seed(&dir, config.game.seed)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = ToolsConfig::resolve(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.game.seed = seed;
    }
    logging::init(&config.log_level);

    let record_to = journal_path(&args, &config)?;
    let mut journal = record_to.as_ref().map(|_| InputJournal::new(config.game.clone()));
    let mut game = Game::new(config.game.clone());
    info!(seed = game.seed(), recording = record_to.is_some(), "game started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", game.describe_location())?;
    write!(out, "> ")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            break;
        }

        let response = game.execute(trimmed);
        writeln!(out, "{response}\n")?;

        if let (Some(journal), Some(path)) = (journal.as_mut(), record_to.as_ref()) {
            journal.append_line(trimmed);
            if let Err(err) = journal_file::write_atomic(journal, path) {
                error!(%err, path = %path.display(), "journal write failed");
                writeln!(out, "Something went wrong: {err}")?;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out, "\nFarewell. Snapshot {}", format_snapshot_hash(game.snapshot_hash()))?;
    if let Some(path) = record_to {
        writeln!(out, "Journal saved to {}", path.display())?;
    }
    Ok(())
}
