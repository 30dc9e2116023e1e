//! Tic-tac-toe rules, greedy bot and game controller.
//!
//! This crate holds everything about the game that is not presentation:
//!
//! - **Board**: the 3x3 grid of cells ([`Board`], [`Cell`], [`Position`])
//! - **Rules**: pure win/draw evaluation ([`check_win`], [`is_full`], [`is_draw`])
//! - **Bot**: a fixed-priority greedy move picker ([`select_move`])
//! - **Controller**: the start / in-progress / game-over state machine
//!   ([`GameController`])
//!
//! Nothing here performs I/O. A front end feeds [`Command`]s into the
//! controller and renders from its accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Command, GameController, GameMode, GamePhase, Position};
//!
//! let mut game = GameController::with_seed(7);
//! game.handle(Command::SelectMode(GameMode::PlayerVsBot));
//! game.handle(Command::SelectCell(Position::Center));
//!
//! // The bot has already answered.
//! assert_eq!(game.phase(), GamePhase::InProgress);
//! assert_eq!(game.board().empty_positions().len(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod controller;
mod position;
pub mod rules;
mod types;

pub use bot::{Decision, Strategy, decide, select_move};
pub use controller::{Command, GameController, GameMode, GameOutcome, GamePhase, Response};
pub use position::Position;
pub use rules::{WinResult, WinningLine, check_win, is_draw, is_full, winner};
pub use types::{Board, BoardParseError, Cell, Mark};
