//! One-shot bot decisions for the `bot` subcommand.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_core::{Board, BoardParseError, Decision, Mark, decide, winner};
use tracing::{info, instrument};

/// What the bot would do on a board.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct BotReport {
    /// The parsed board.
    board: Board,
    /// The mark the bot plays.
    mark: Mark,
    /// A line already on the board, if any.
    existing_winner: Option<Mark>,
    /// The chosen cell, or `None` on a full board.
    decision: Option<Decision>,
}

/// Parses `board` and runs the bot for `mark` on it.
#[instrument]
pub fn explain_move(board: &str, mark: Mark, seed: Option<u64>) -> Result<BotReport, BoardParseError> {
    let board: Board = board.parse()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let decision = decide(&board, mark, mark.opponent(), &mut rng);
    info!(?decision, "Bot decision computed");
    Ok(BotReport {
        existing_winner: winner(&board),
        board,
        mark,
        decision,
    })
}

impl std::fmt::Display for BotReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        if let Some(w) = self.existing_winner {
            writeln!(f, "Note: {} already has three in a row", w)?;
        }
        match &self.decision {
            Some(d) => write!(
                f,
                "Bot ({}) plays {} (row {}, col {}) [{}]",
                self.mark,
                d.position(),
                d.position().row(),
                d.position().col(),
                d.strategy()
            ),
            None => write!(f, "Bot ({}) has no move: the board is full", self.mark),
        }
    }
}
