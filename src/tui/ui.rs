//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, GameOutcome, GamePhase, Mark, Position};

use super::app::App;
use super::layout::{Button, ScreenLayout};

const BG_COLOR: Color = Color::Rgb(28, 170, 156);
const LINE_COLOR: Color = Color::Rgb(23, 145, 135);
const CIRCLE_COLOR: Color = Color::Rgb(239, 231, 200);
const CROSS_COLOR: Color = Color::Rgb(66, 66, 66);
const HIGHLIGHT_COLOR: Color = Color::Yellow;

/// Renders the whole screen for the current phase.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_COLOR)),
        *layout.area(),
    );

    match app.controller().phase() {
        GamePhase::StartScreen => draw_start_screen(frame, app),
        GamePhase::InProgress | GamePhase::GameOver => draw_game(frame, app),
    }
}

fn draw_start_screen(frame: &mut Frame, app: &App) {
    let layout = app.layout();
    let area = *layout.area();

    // Title at a quarter of the height.
    let title_row = Rect::new(area.x, area.y + area.height / 4, area.width, 1).intersection(area);
    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(LINE_COLOR).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_row);

    for button in ScreenLayout::buttons(GamePhase::StartScreen) {
        let selected = matches!(button, Button::Mode(mode) if *mode == *app.mode_cursor());
        draw_button(frame, layout, *button, selected);
    }

    draw_status(
        frame,
        layout,
        "Click a mode, or 1/2 | ↑↓ + Enter | q: Quit",
    );
}

fn draw_game(frame: &mut Frame, app: &App) {
    let layout = app.layout();
    let controller = app.controller();

    let title_text = match controller.mode() {
        Some(mode) => format!("Tic Tac Toe - {}", mode),
        None => "Tic Tac Toe".to_string(),
    };
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(LINE_COLOR).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, *layout.title());

    let cursor = (controller.phase() == GamePhase::InProgress).then_some(*app.cursor());
    let winning_line = controller.winning_line();
    for pos in Position::ALL {
        let highlighted = winning_line.is_some_and(|line| line.contains(pos));
        draw_cell(frame, layout, controller.board().get(pos), pos, cursor == Some(pos), highlighted);
    }

    match controller.outcome() {
        Some(outcome) => {
            let color = match outcome {
                GameOutcome::Win { mark, .. } => mark_color(mark),
                GameOutcome::Draw => LINE_COLOR,
            };
            let banner = Paragraph::new(outcome.to_string())
                .style(Style::default().fg(color).bg(Color::Black).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            frame.render_widget(banner, *layout.banner());
            draw_button(frame, layout, Button::Restart, true);
            draw_status(frame, layout, "Click Restart or press r | q: Quit");
        }
        None => {
            let status = format!(
                "{} | click a cell, 1-9, or arrows + Enter | q: Quit",
                controller.status_message()
            );
            draw_status(frame, layout, &status);
        }
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => CROSS_COLOR,
        Mark::O => CIRCLE_COLOR,
    }
}

fn draw_cell(
    frame: &mut Frame,
    layout: &ScreenLayout,
    cell: Cell,
    pos: Position,
    is_cursor: bool,
    on_winning_line: bool,
) {
    let area = layout.cell_rect(pos);
    if area.is_empty() {
        return;
    }

    let (symbol, mut style) = match cell {
        Cell::Empty => (" ", Style::default()),
        Cell::Occupied(mark) => (
            if mark == Mark::X { "X" } else { "O" },
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };
    if on_winning_line {
        style = style.bg(HIGHLIGHT_COLOR);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark inside the border.
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::from(""); (inner_height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(LINE_COLOR))
        .style(if on_winning_line {
            Style::default().bg(HIGHLIGHT_COLOR)
        } else {
            Style::default()
        });
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_button(frame: &mut Frame, layout: &ScreenLayout, button: Button, selected: bool) {
    let area = layout.button_rect(button);
    if area.is_empty() {
        return;
    }
    let style = if selected {
        Style::default().fg(Color::Black).bg(HIGHLIGHT_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LINE_COLOR).bg(CIRCLE_COLOR)
    };
    let paragraph = Paragraph::new(button.label())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, layout: &ScreenLayout, text: &str) {
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(status, *layout.status());
}
