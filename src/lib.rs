//! Tic Tac Toe - terminal front end
//!
//! This library wires the rules engine in `tictactoe_core` to a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui/crossterm presentation layer (layout, hit-testing,
//!   rendering, input translation)
//! - **Report**: one-shot bot decisions for debugging the heuristic
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameConfig, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("tictactoe.toml")?;
//! run_tui(config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
mod report;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MIN_CELL_HEIGHT, MIN_CELL_WIDTH};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Bot report
pub use report::{BotReport, explain_move};

// Crate-level exports - Terminal UI
pub use tui::{App, Button, InputEvent, ScreenLayout, move_cursor, run_tui, translate};
