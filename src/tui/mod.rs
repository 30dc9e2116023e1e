//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{InputEvent, move_cursor, translate};
pub use layout::{Button, ScreenLayout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_core::Response;
use tracing::{debug, error, info, instrument};

use crate::{GameConfig, init_file_logging};

/// Restores the terminal on drop, including on early return or panic unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Runs the game until the player quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    init_file_logging(config.log_file(), config.log_filter())?;

    info!(?config, "Starting Tic Tac Toe TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
    let mut app = App::from_config(&config, area);

    let res = run_loop(&mut terminal, &mut app);

    terminal.show_cursor()?;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Tic Tac Toe TUI exited");
    res
}

/// One event at a time, each processed to completion before the next read.
#[instrument(skip_all)]
fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| {
            app.resize(frame.area());
            ui::draw(frame, app);
        })?;

        // Blocks until the next input; a human turn waits indefinitely.
        let event = event::read().context("Failed to read terminal event")?;
        if app.handle_event(&event) == Response::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
