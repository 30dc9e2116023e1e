//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Every line in scan order: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The two end cells of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct WinningLine {
    start: Position,
    end: Position,
}

impl WinningLine {
    /// First endpoint (top-most, then left-most, except the anti-diagonal
    /// which starts top-right).
    pub fn start(&self) -> Position {
        self.start
    }

    /// Second endpoint.
    pub fn end(&self) -> Position {
        self.end
    }

    /// The middle cell, which lies halfway between the endpoints.
    pub fn middle(&self) -> Position {
        let row = (self.start.row() + self.end.row()) / 2;
        let col = (self.start.col() + self.end.col()) / 2;
        // Endpoints are both on the board, so their midpoint is too.
        Position::from_row_col(row, col).unwrap_or(Position::Center)
    }

    /// All three cells of the line, in order.
    pub fn cells(&self) -> [Position; 3] {
        [self.start, self.middle(), self.end]
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

/// Result of checking one mark for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    winning_line: Option<WinningLine>,
}

impl WinResult {
    /// True when the checked mark has a completed line.
    pub fn has_winner(&self) -> bool {
        self.winning_line.is_some()
    }

    /// Endpoints of the first completed line found, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }
}

/// Checks whether `mark` has three in a row.
///
/// Lines are scanned in [`LINES`] order and the first match is reported.
/// Two completed lines for the same mark can coexist (a move can finish a
/// row and a column at once); the scan order decides which one is shown.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> WinResult {
    let target = Cell::Occupied(mark);
    let winning_line = LINES
        .iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == target))
        .map(|[start, _, end]| WinningLine::new(*start, *end));
    WinResult { winning_line }
}

/// Returns the mark that has three in a row, if any.
///
/// X is checked before O. In real play at most one mark can have a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| check_win(board, *mark).has_winner())
}
