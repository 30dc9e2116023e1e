//! Screen geometry and hit-testing.
//!
//! All rectangles are derived from the terminal size and the configured
//! cell size, so rendering and pointer resolution always agree.

use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_core::{GameMode, GamePhase, Position};
use tracing::instrument;

/// Something clickable outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Start-screen mode button.
    Mode(GameMode),
    /// Game-over restart button.
    Restart,
}

impl Button {
    /// Text shown on the button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mode(mode) => mode.label(),
            Self::Restart => "Restart",
        }
    }
}

/// Where everything goes for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ScreenLayout {
    area: Rect,
    title: Rect,
    board: Rect,
    banner: Rect,
    status: Rect,
    player_vs_player: Rect,
    player_vs_bot: Rect,
    restart: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl ScreenLayout {
    /// Lays out a screen of `area` with cells of the given size.
    ///
    /// Cell sizes of zero are treated as one.
    #[instrument]
    pub fn new(area: Rect, cell_width: u16, cell_height: u16) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);

        let board = centered(
            area,
            cell_width.saturating_mul(3),
            cell_height.saturating_mul(3),
        );

        let title = Rect::new(area.x, area.y, area.width, 3.min(area.height)).intersection(area);
        let status = Rect::new(
            area.x,
            area.bottom().saturating_sub(1),
            area.width,
            1.min(area.height),
        )
        .intersection(area);
        let banner = Rect::new(area.x, board.bottom(), area.width, 1).intersection(area);

        // Start-screen buttons at one half and three quarters of the height,
        // restart just above the status line.
        let player_vs_player = button_at_row(
            area,
            area.y + area.height / 2,
            GameMode::PlayerVsPlayer.label(),
        );
        let player_vs_bot = button_at_row(
            area,
            area.y + area.height * 3 / 4,
            GameMode::PlayerVsBot.label(),
        );
        let restart = button_at_row(
            area,
            area.bottom().saturating_sub(3),
            Button::Restart.label(),
        );

        Self {
            area,
            title,
            board,
            banner,
            status,
            player_vs_player,
            player_vs_bot,
            restart,
            cell_width,
            cell_height,
        }
    }

    /// Resolves a pointer position to a board cell.
    ///
    /// The offset into the board is integer-divided by the cell size.
    /// Positions outside the board give `None`.
    #[instrument(skip(self))]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        if !contains(self.board, x, y) {
            return None;
        }
        let col = (x - self.board.x) / self.cell_width;
        let row = (y - self.board.y) / self.cell_height;
        Position::from_row_col(row as usize, col as usize)
    }

    /// Screen rectangle of one cell, clipped to the visible board.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            self.board
                .x
                .saturating_add((pos.col() as u16).saturating_mul(self.cell_width)),
            self.board
                .y
                .saturating_add((pos.row() as u16).saturating_mul(self.cell_height)),
            self.cell_width,
            self.cell_height,
        )
        .intersection(self.board)
    }

    /// Screen rectangle of a button.
    pub fn button_rect(&self, button: Button) -> Rect {
        match button {
            Button::Mode(GameMode::PlayerVsPlayer) => self.player_vs_player,
            Button::Mode(GameMode::PlayerVsBot) => self.player_vs_bot,
            Button::Restart => self.restart,
        }
    }

    /// Buttons that exist in `phase`.
    pub fn buttons(phase: GamePhase) -> &'static [Button] {
        match phase {
            GamePhase::StartScreen => &[
                Button::Mode(GameMode::PlayerVsPlayer),
                Button::Mode(GameMode::PlayerVsBot),
            ],
            GamePhase::InProgress => &[],
            GamePhase::GameOver => &[Button::Restart],
        }
    }

    /// Hit-tests the buttons visible in `phase`.
    #[instrument(skip(self))]
    pub fn button_at(&self, phase: GamePhase, x: u16, y: u16) -> Option<Button> {
        Self::buttons(phase)
            .iter()
            .copied()
            .find(|b| contains(self.button_rect(*b), x, y))
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
    .intersection(area)
}

/// A three-row bordered button centered horizontally on `row`.
fn button_at_row(area: Rect, row: u16, label: &str) -> Rect {
    // Two border columns plus one space of padding on each side.
    let width = label.chars().count() as u16 + 4;
    let height = 3;
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        row.saturating_sub(height / 2).max(area.y),
        width,
        height,
    )
    .intersection(area)
}
