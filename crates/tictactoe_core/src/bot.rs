//! Greedy bot: a fixed priority list, no search.
//!
//! The bot looks at the live board from scratch on every call and keeps no
//! state between calls. Randomness for breaking ties is passed in, so a
//! seeded generator gives reproducible games.

use crate::rules::check_win;
use crate::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the priority list produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Strategy {
    /// Takes the cell where the opponent would complete a line.
    Block,
    /// Takes the cell that completes the bot's own line.
    Win,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free edge.
    Edge,
    /// Takes any random free cell.
    Any,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Decision {
    position: Position,
    strategy: Strategy,
}

/// Picks the bot's next cell.
///
/// Returns `None` only when the board has no empty cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    bot: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<Position> {
    decide(board, bot, opponent, rng).map(|d| d.position)
}

/// Runs the priority list and reports which rule fired.
///
/// 1. block the opponent's immediate win (first in row-major order)
/// 2. complete the bot's own line (first in row-major order)
/// 3. center
/// 4. random free corner
/// 5. random free edge
/// 6. random free cell
///
/// Blocking is tried before winning. Candidate moves are simulated on
/// copies of `board`, which is never modified.
#[instrument(skip(board, rng), fields(empty = board.empty_positions().len()))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    bot: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<Decision> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("No empty cell left");
        return None;
    }

    let decision = completing_move(board, &empty, opponent)
        .map(|position| Decision {
            position,
            strategy: Strategy::Block,
        })
        .or_else(|| {
            completing_move(board, &empty, bot).map(|position| Decision {
                position,
                strategy: Strategy::Win,
            })
        })
        .or_else(|| {
            board.is_available(Position::Center).then_some(Decision {
                position: Position::Center,
                strategy: Strategy::Center,
            })
        })
        .or_else(|| random_free(board, &Position::CORNERS, Strategy::Corner, rng))
        .or_else(|| random_free(board, &Position::EDGES, Strategy::Edge, rng))
        .or_else(|| random_free(board, &empty, Strategy::Any, rng));

    if let Some(d) = &decision {
        debug!(position = %d.position, strategy = %d.strategy, "Bot chose move");
    }
    decision
}

/// First empty cell (row-major) where `mark` would complete a line.
fn completing_move(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|pos| check_win(&board.with_mark(*pos, mark), mark).has_winner())
}

/// Uniform choice among the free cells of `candidates`.
fn random_free<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Position],
    strategy: Strategy,
    rng: &mut R,
) -> Option<Decision> {
    let free: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|pos| board.is_available(*pos))
        .collect();
    free.choose(rng).map(|position| Decision {
        position: *position,
        strategy,
    })
}
