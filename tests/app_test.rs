//! Tests for pointer and keyboard input through the application state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe::{App, Button, InputEvent};
use tictactoe_core::{
    Board, Cell, GameController, GameMode, GamePhase, Mark, Position, Response,
};

fn app() -> App {
    App::new(GameController::with_seed(4), Rect::new(0, 0, 80, 24), 9, 3)
}

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn click_button(app: &mut App, button: Button) -> Response {
    let rect = app.layout().button_rect(button);
    app.handle_event(&click(rect.x + 1, rect.y + 1))
}

fn click_cell(app: &mut App, pos: Position) -> Response {
    let rect = app.layout().cell_rect(pos);
    app.handle_event(&click(rect.x + rect.width / 2, rect.y + rect.height / 2))
}

#[test]
fn test_mode_button_click_starts_game() {
    let mut app = app();
    let response = click_button(&mut app, Button::Mode(GameMode::PlayerVsBot));
    assert_eq!(response, Response::Applied);
    assert_eq!(app.controller().phase(), GamePhase::InProgress);
    assert_eq!(app.controller().mode(), Some(GameMode::PlayerVsBot));
}

#[test]
fn test_click_outside_buttons_is_ignored() {
    let mut app = app();
    assert_eq!(app.handle_event(&click(0, 0)), Response::Ignored);
    assert_eq!(app.controller().phase(), GamePhase::StartScreen);
}

#[test]
fn test_cell_click_places_mark() {
    let mut app = app();
    app.handle_event(&key('1'));
    assert_eq!(click_cell(&mut app, Position::BottomLeft), Response::Applied);
    assert_eq!(
        app.controller().board().get(Position::BottomLeft),
        Cell::Occupied(Mark::X)
    );
    assert_eq!(*app.cursor(), Position::BottomLeft);

    // Clicking the same cell again changes nothing.
    let before = *app.controller().board();
    assert_eq!(click_cell(&mut app, Position::BottomLeft), Response::Ignored);
    assert_eq!(app.controller().board(), &before);
}

#[test]
fn test_click_off_board_is_ignored() {
    let mut app = app();
    app.handle_event(&key('1'));
    assert_eq!(app.handle_event(&click(0, 0)), Response::Ignored);
    assert_eq!(app.controller().board(), &Board::new());
}

#[test]
fn test_keyboard_game_to_restart() {
    let mut app = app();
    app.handle_event(&key('p'));
    for c in ['1', '4', '2', '5', '3'] {
        assert_eq!(app.handle_event(&key(c)), Response::Applied);
    }
    assert_eq!(app.controller().phase(), GamePhase::GameOver);
    assert_eq!(app.controller().winner(), Some(Mark::X));

    // Cells are dead on the game-over screen; the restart button is live.
    assert_eq!(click_cell(&mut app, Position::BottomRight), Response::Ignored);
    assert_eq!(click_button(&mut app, Button::Restart), Response::Applied);
    assert_eq!(app.controller().phase(), GamePhase::StartScreen);
    assert_eq!(app.controller().board(), &Board::new());
}

#[test]
fn test_arrow_cursor_and_enter() {
    let mut app = app();
    app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
    assert_eq!(*app.mode_cursor(), GameMode::PlayerVsBot);
    app.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert_eq!(app.controller().mode(), Some(GameMode::PlayerVsBot));

    // Cursor starts in the center; move it to the top-left and place X.
    app.handle_input(InputEvent::MoveCursor(KeyCode::Up));
    app.handle_input(InputEvent::MoveCursor(KeyCode::Left));
    assert_eq!(*app.cursor(), Position::TopLeft);
    assert_eq!(app.handle_input(InputEvent::Confirm), Response::Applied);
    assert_eq!(
        app.controller().board().get(Position::TopLeft),
        Cell::Occupied(Mark::X)
    );
    // The bot answered with the center.
    assert_eq!(
        app.controller().board().get(Position::Center),
        Cell::Occupied(Mark::O)
    );
}

#[test]
fn test_resize_moves_the_board() {
    let mut app = app();
    app.handle_event(&key('1'));
    app.handle_event(&Event::Resize(40, 12));
    assert_eq!(*app.layout().area(), Rect::new(0, 0, 40, 12));
    // Board is now 27x9 centered in 40x12.
    assert_eq!(*app.layout().board(), Rect::new(6, 1, 27, 9));
    assert_eq!(click_cell(&mut app, Position::Center), Response::Applied);
}

#[test]
fn test_quit() {
    let mut app = app();
    assert_eq!(app.handle_event(&key('q')), Response::Quit);
}
