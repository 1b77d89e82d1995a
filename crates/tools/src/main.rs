use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use centaur_core::{ReplayResult, replay::replay_to_end};
use clap::Parser;
use tools::{config::ToolsConfig, format_snapshot_hash, journal_file, logging};
use tracing::error;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded journal and print its final hash", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Config file (defaults to centaur.toml in the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "replay failed");
            eprintln!("Something went wrong: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = ToolsConfig::resolve(args.config.as_deref())?;
    logging::init(&config.log_level);

    let journal = journal_file::load(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;

    let result: ReplayResult = replay_to_end(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Commands: {}", result.commands_run);
    println!("Clock: {}", result.final_clock.formatted());
    println!("Snapshot Hash: {}", format_snapshot_hash(result.final_snapshot_hash));

    Ok(())
}
