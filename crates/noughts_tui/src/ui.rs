//! Stateless UI rendering for the board.

use crate::app::App;
use crate::geometry::BoardGeometry;
use noughts_engine::{Cell, GameEngine, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Context, Line as Stroke},
    },
};

const BACKGROUND: Color = Color::Rgb(34, 34, 34);
const GRID: Color = Color::DarkGray;
const X_COLOR: Color = Color::Green;
const O_COLOR: Color = Color::Red;
const WIN_COLOR: Color = Color::Yellow;

/// Draws the whole screen and returns where the board landed.
pub fn draw(frame: &mut Frame, app: &App, padding: f64) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let geometry = BoardGeometry::fit(chunks[1]);
    draw_board(frame, geometry.area(), app.engine(), padding);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Click a cell or press 1-9 | Enter: New game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if let Some(message) = app.prompt().and_then(|outcome| outcome.message()) {
        draw_prompt(frame, message);
    }

    geometry
}

fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, padding: f64) {
    let canvas = Canvas::default()
        .background_color(BACKGROUND)
        .marker(Marker::Braille)
        .x_bounds(BoardGeometry::canvas_bounds())
        .y_bounds(BoardGeometry::canvas_bounds())
        .paint(|ctx| {
            draw_grid(ctx);
            for (cell, mark) in engine.board().cells() {
                draw_mark(ctx, cell, mark, padding);
            }
            if let Some(line) = engine.winning_line() {
                let [first, _, last] = line.cells();
                let (x1, y1) = BoardGeometry::cell_center(first);
                let (x2, y2) = BoardGeometry::cell_center(last);
                ctx.draw(&Stroke::new(x1, y1, x2, y2, WIN_COLOR));
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_grid(ctx: &mut Context<'_>) {
    let [start, end] = BoardGeometry::canvas_bounds();
    for i in 1..3 {
        let at = i as f64;
        ctx.draw(&Stroke::new(at, start, at, end, GRID));
        ctx.draw(&Stroke::new(start, at, end, at, GRID));
    }
}

fn draw_mark(ctx: &mut Context<'_>, cell: Cell, mark: Mark, padding: f64) {
    let (left, top) = BoardGeometry::cell_origin(cell);
    let (right, bottom) = (left + 1.0, top - 1.0);

    match mark {
        Mark::X => {
            ctx.draw(&Stroke::new(
                left + padding,
                top - padding,
                right - padding,
                bottom + padding,
                X_COLOR,
            ));
            ctx.draw(&Stroke::new(
                right - padding,
                top - padding,
                left + padding,
                bottom + padding,
                X_COLOR,
            ));
        }
        Mark::O => {
            let (x, y) = BoardGeometry::cell_center(cell);
            ctx.draw(&Circle {
                x,
                y,
                radius: 0.5 - padding,
                color: O_COLOR,
            });
        }
        Mark::Empty => {}
    }
}

fn draw_prompt(frame: &mut Frame, message: &str) {
    let area = center_rect(frame.area(), 24, 5);
    let text = vec![
        Line::from(message).style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("[ OK ]").style(Style::default().fg(Color::Black).bg(Color::White)),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
