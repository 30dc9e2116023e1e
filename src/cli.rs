//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_core::Mark;

/// Tic Tac Toe - play in the terminal against a friend or a greedy bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a greedy bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play {
        /// Path to the TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Seed for the bot's random tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Width of a board cell in terminal columns
        #[arg(long)]
        cell_width: Option<u16>,

        /// Height of a board cell in terminal rows
        #[arg(long)]
        cell_height: Option<u16>,
    },

    /// Show which cell the bot would pick on a given board
    Bot {
        /// Nine cells, row-major: X, O, and . for empty (e.g. "XX./.O./...")
        #[arg(short, long)]
        board: String,

        /// Mark the bot plays
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = MarkArg::O)]
        mark: MarkArg,

        /// Seed for random tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Mark as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
