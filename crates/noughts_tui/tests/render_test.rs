//! Rendering tests against an in-memory terminal.

use noughts_engine::Outcome;
use noughts_tui::{App, BoardGeometry, draw};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

fn render(app: &App) -> (Buffer, BoardGeometry) {
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    let mut board = BoardGeometry::default();
    terminal.draw(|f| board = draw(f, app, 0.1)).unwrap();
    (terminal.backend().buffer().clone(), board)
}

fn text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn play(app: &mut App, digits: &[u32]) {
    for &digit in digits {
        app.press_digit(digit);
    }
}

#[test]
fn test_fresh_board_shows_status() {
    let (buffer, board) = render(&App::new());
    let screen = text(&buffer);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player X's turn"));
    assert!(!screen.contains("[ OK ]"));
    // 30 rows minus title, status and help leaves 25; the board takes 24.
    assert_eq!(board.area(), Rect::new(6, 1, 48, 24));
}

#[test]
fn test_board_geometry_maps_back_to_cells() {
    let mut app = App::new();
    let (_, board) = render(&app);
    let area = board.area();

    // Press in the middle of the bottom-right cell.
    let (col, row) = board
        .cell_at(area.x + area.width * 5 / 6, area.y + area.height * 5 / 6)
        .unwrap();
    assert_eq!((col, row), (2, 2));
    app.click(col, row);
    assert_eq!(app.engine().board().get(2, 2), Some(noughts_engine::Mark::X));
}

#[test]
fn test_win_shows_prompt() {
    let mut app = App::new();
    play(&mut app, &[1, 5, 4, 9, 7]);
    assert_eq!(app.prompt(), Some(Outcome::XWins));

    let screen = text(&render(&app).0);
    assert!(screen.contains("X WINS"));
    assert!(screen.contains("[ OK ]"));
}

#[test]
fn test_draw_shows_cats_game() {
    let mut app = App::new();
    // X O X / X O O / O X X
    play(&mut app, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    assert_eq!(app.prompt(), Some(Outcome::Draw));

    let screen = text(&render(&app).0);
    assert!(screen.contains("CATS GAME"));
}

#[test]
fn test_acknowledge_clears_prompt_and_board() {
    let mut app = App::new();
    play(&mut app, &[1, 5, 4, 9, 7]);
    app.acknowledge();

    let screen = text(&render(&app).0);
    assert!(!screen.contains("X WINS"));
    assert!(screen.contains("Player X's turn"));
    assert_eq!(app.engine().board().empty_count(), 9);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
    let mut app = App::new();
    play(&mut app, &[1, 5, 4, 9, 7]);
    terminal.draw(|f| {
        draw(f, &app, 0.1);
    })
    .unwrap();
}
