//! Tic Tac Toe - terminal game and bot inspector.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{GameConfig, explain_move, init_stderr_logging, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            cell_width,
            cell_height,
        } => run_play(config, seed, cell_width, cell_height),
        Command::Bot {
            board,
            mark,
            seed,
            json,
        } => run_bot(&board, mark.into(), seed, json),
    }
}

/// Run the terminal game.
fn run_play(
    config_path: std::path::PathBuf,
    seed: Option<u64>,
    cell_width: Option<u16>,
    cell_height: Option<u16>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?
        .with_overrides(seed, cell_width, cell_height)?;
    run_tui(config)
}

/// Print the bot's decision for a board.
#[instrument(skip(board))]
fn run_bot(
    board: &str,
    mark: tictactoe_core::Mark,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    init_stderr_logging("warn");
    info!("Running bot inspector");

    let report = explain_move(board, mark, seed).context("Invalid board")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
