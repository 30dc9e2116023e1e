//! Terminal events to game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use tictactoe_core::{GameMode, GamePhase, Position};

/// Input in presentation terms, before pointer positions are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Stop the program.
    Quit,
    /// Left button pressed at a terminal cell.
    PointerDown {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },
    /// A mode picked by key.
    ModeSelected(GameMode),
    /// Restart picked by key.
    RestartRequested,
    /// A board cell picked by number key.
    CellChosen(Position),
    /// Arrow key: move the keyboard cursor.
    MoveCursor(KeyCode),
    /// Enter or space: activate whatever the cursor is on.
    Confirm,
    /// The terminal was resized.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },
}

/// Translates a crossterm event, using `phase` to interpret keys.
///
/// Returns `None` for events the game does not react to.
pub fn translate(event: &Event, phase: GamePhase) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key, phase),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown {
                x: mouse.column,
                y: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent, phase: GamePhase) -> Option<InputEvent> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(InputEvent::Quit);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(InputEvent::Quit),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            return Some(InputEvent::MoveCursor(key.code));
        }
        KeyCode::Enter | KeyCode::Char(' ') => return Some(InputEvent::Confirm),
        _ => {}
    }

    match (phase, key.code) {
        (GamePhase::StartScreen, KeyCode::Char('1' | 'p' | 'P')) => {
            Some(InputEvent::ModeSelected(GameMode::PlayerVsPlayer))
        }
        (GamePhase::StartScreen, KeyCode::Char('2' | 'b' | 'B')) => {
            Some(InputEvent::ModeSelected(GameMode::PlayerVsBot))
        }
        (GamePhase::InProgress, KeyCode::Char(c)) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(InputEvent::CellChosen),
        (GamePhase::GameOver, KeyCode::Char('r' | 'R')) => Some(InputEvent::RestartRequested),
        _ => None,
    }
}

/// Moves the board cursor one step; stays put at the edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let step = match key {
        KeyCode::Up => cursor.offset(-1, 0),
        KeyCode::Down => cursor.offset(1, 0),
        KeyCode::Left => cursor.offset(0, -1),
        KeyCode::Right => cursor.offset(0, 1),
        _ => None,
    };
    step.unwrap_or(cursor)
}
