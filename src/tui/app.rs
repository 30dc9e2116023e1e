//! Application state: the controller plus what only the screen needs.

use crossterm::event::{Event, KeyCode};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_core::{Command, GameController, GameMode, GamePhase, Position, Response};
use tracing::{debug, instrument};

use super::input::{InputEvent, move_cursor, translate};
use super::layout::{Button, ScreenLayout};
use crate::GameConfig;

/// Main application state.
///
/// Owns the [`GameController`] and resolves screen input (clicks, keys)
/// into controller commands.
#[derive(Debug, Getters)]
pub struct App {
    controller: GameController,
    /// Keyboard cursor on the board.
    cursor: Position,
    /// Highlighted start-screen button.
    mode_cursor: GameMode,
    layout: ScreenLayout,
}

impl App {
    /// Creates the application for a terminal of size `area`.
    #[instrument(skip(controller))]
    pub fn new(controller: GameController, area: Rect, cell_width: u16, cell_height: u16) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            mode_cursor: GameMode::PlayerVsPlayer,
            layout: ScreenLayout::new(area, cell_width, cell_height),
        }
    }

    /// Creates the application from configuration, seeding the bot if a
    /// seed is configured.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig, area: Rect) -> Self {
        let controller = match config.seed() {
            Some(seed) => GameController::with_seed(*seed),
            None => GameController::from_entropy(),
        };
        Self::new(controller, area, *config.cell_width(), *config.cell_height())
    }

    /// Recomputes the layout for a new terminal size.
    pub fn resize(&mut self, area: Rect) {
        if area != *self.layout.area() {
            debug!(?area, "Terminal resized");
            self.layout = ScreenLayout::new(area, *self.layout.cell_width(), *self.layout.cell_height());
        }
    }

    /// Handles one terminal event to completion.
    pub fn handle_event(&mut self, event: &Event) -> Response {
        match translate(event, self.controller.phase()) {
            Some(input) => self.handle_input(input),
            None => Response::Ignored,
        }
    }

    /// Handles one translated input.
    #[instrument(skip(self), fields(phase = ?self.controller.phase()))]
    pub fn handle_input(&mut self, input: InputEvent) -> Response {
        let phase = self.controller.phase();
        let command = match input {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::PointerDown { x, y } => self.resolve_pointer(phase, x, y),
            InputEvent::ModeSelected(mode) => Some(Command::SelectMode(mode)),
            InputEvent::RestartRequested => Some(Command::Restart),
            InputEvent::CellChosen(pos) => {
                self.cursor = pos;
                Some(Command::SelectCell(pos))
            }
            InputEvent::Confirm => Some(match phase {
                GamePhase::StartScreen => Command::SelectMode(self.mode_cursor),
                GamePhase::InProgress => Command::SelectCell(self.cursor),
                GamePhase::GameOver => Command::Restart,
            }),
            InputEvent::MoveCursor(key) => return self.move_cursor(phase, key),
            InputEvent::Resize { width, height } => {
                self.resize(Rect::new(0, 0, width, height));
                return Response::Applied;
            }
        };

        match command {
            Some(command) => self.controller.handle(command),
            None => {
                debug!(?input, "Input did not hit anything");
                Response::Ignored
            }
        }
    }

    /// Click on a cell while playing, or on a button otherwise.
    fn resolve_pointer(&mut self, phase: GamePhase, x: u16, y: u16) -> Option<Command> {
        if phase == GamePhase::InProgress {
            let pos = self.layout.cell_at(x, y)?;
            self.cursor = pos;
            return Some(Command::SelectCell(pos));
        }
        match self.layout.button_at(phase, x, y)? {
            Button::Mode(mode) => {
                self.mode_cursor = mode;
                Some(Command::SelectMode(mode))
            }
            Button::Restart => Some(Command::Restart),
        }
    }

    fn move_cursor(&mut self, phase: GamePhase, key: KeyCode) -> Response {
        match (phase, key) {
            (GamePhase::StartScreen, KeyCode::Up) => self.mode_cursor = GameMode::PlayerVsPlayer,
            (GamePhase::StartScreen, KeyCode::Down) => self.mode_cursor = GameMode::PlayerVsBot,
            (GamePhase::InProgress, key) => self.cursor = move_cursor(self.cursor, key),
            _ => return Response::Ignored,
        }
        Response::Applied
    }
}
