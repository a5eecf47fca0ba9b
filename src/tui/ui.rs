//! Stateless rendering and screen geometry.
//!
//! Layout comes from pure functions over the frame size, so drawing and
//! mouse hit-testing always agree on where things are.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_rewind::{Cell, Mark, Spot};

use super::app::App;

/// Board footprint: three cell rows of height 3 plus two separator rows.
const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;
const CELL_WIDTH: u16 = 12;

/// Where everything lands for one frame size.
pub struct ScreenAreas {
    /// Title bar across the top.
    pub title: Rect,
    /// The whole board, centered in its region.
    pub board: Rect,
    /// One rect per cell, indexed like [`Spot::index`].
    pub cells: [Rect; 9],
    /// Status line under the board.
    pub status: Rect,
    /// History controls box.
    pub jumps: Rect,
    /// Key hints at the bottom.
    pub help: Rect,
}

/// Computes the screen regions for a frame of the given size.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(4),         // History controls
            Constraint::Length(1),         // Help
        ])
        .split(area);

    let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    ScreenAreas {
        title: chunks[0],
        board,
        cells: cell_rects(board),
        status: chunks[2],
        jumps: chunks[3],
        help: chunks[4],
    }
}

/// The board cell under the given screen coordinates, if any.
pub fn hit_cell(areas: &ScreenAreas, column: u16, row: u16) -> Option<Spot> {
    let position = Position::new(column, row);
    Spot::ALL
        .iter()
        .copied()
        .find(|spot| areas.cells[spot.index()].contains(position))
}

/// The history-control row under the given screen coordinates, if any.
///
/// Returns an index into [`Game::available_jumps`]; the caller checks it
/// against the controls actually offered.
///
/// [`Game::available_jumps`]: tictactoe_rewind::Game::available_jumps
pub fn hit_jump(areas: &ScreenAreas, column: u16, row: u16) -> Option<usize> {
    let inner = areas.jumps.inner(Margin::new(1, 1));
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    Some((row - inner.y) as usize)
}

/// Renders one frame from the engine's display queries.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = screen_areas(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, areas.title);

    draw_board(frame, &areas, app);

    let status = Paragraph::new(game.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    draw_jumps(frame, &areas, app);

    let help =
        Paragraph::new("arrows/click: select  enter/space/1-9: place  u: undo  r: reset  q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(help, areas.help);
}

fn draw_board(frame: &mut Frame, areas: &ScreenAreas, app: &App) {
    let winning: Vec<Spot> = app
        .game()
        .win()
        .map(|win| win.spots().to_vec())
        .unwrap_or_default();

    draw_separators(frame, areas.board);
    for spot in Spot::ALL {
        draw_cell(frame, areas.cells[spot.index()], app, &winning, spot);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, winning: &[Spot], spot: Spot) {
    let (text, style) = match app.game().board().cell(spot) {
        Cell::Empty => (
            format!("{}", spot.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning.contains(&spot) {
        style.bg(Color::Green).fg(Color::Black)
    } else if spot == *app.cursor() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    // Leading newline drops the mark onto the middle row of the cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_jumps(frame: &mut Frame, areas: &ScreenAreas, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .available_jumps()
        .iter()
        .map(|jump| {
            let key = if jump.step() == 0 { 'r' } else { 'u' };
            ListItem::new(format!("[{key}] {}", jump.label()))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .style(Style::default().fg(Color::White));
    frame.render_widget(list, areas.jumps);
}

fn draw_separators(frame: &mut Frame, board: Rect) {
    // Skip the hand-placed grid lines when the terminal is too small to
    // hold the full board.
    if board.width < BOARD_WIDTH || board.height < BOARD_HEIGHT {
        return;
    }
    let style = Style::default().fg(Color::DarkGray);
    for row in 0..3u16 {
        let y = board.y + row * 4;
        for column in [CELL_WIDTH, 2 * CELL_WIDTH + 1] {
            let area = Rect::new(board.x + column, y, 1, 3);
            frame.render_widget(Paragraph::new("│\n│\n│").style(style), area);
        }
    }
    for y in [board.y + 3, board.y + 7] {
        let area = Rect::new(board.x, y, board.width, 1);
        let line = "─".repeat(board.width as usize);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn cell_rects(board: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (column, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + column] = cell_area;
        }
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
