//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board on which the player who just moved has no line.
///
/// Only the mover can have completed a line with the last move, so this is
/// evaluated right after each placement.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, mover: Mark) -> bool {
    is_full(board) && !check_win(board, mover).has_winner()
}
