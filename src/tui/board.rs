//! Stateless board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::games::connect_four::{Board, Cell, Player};

/// Character columns per board cell.
const CELL_W: usize = 4;

/// Style for a disc of the given color.
pub fn disc_style(player: Player) -> Style {
    match player {
        Player::Red => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Player::Yellow => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

/// Renders the board grid, centered in `area`.
///
/// `cursor_col` draws the drop marker above that column; `highlight` marks
/// the winning four.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor_col: Option<usize>,
    highlight: Option<[(usize, usize); 4]>,
) {
    let width = (board.cols() * CELL_W) as u16;
    let height = (board.rows() + 2) as u16;
    let board_area = center_rect(area, width, height);

    let mut lines = Vec::with_capacity(board.rows() + 2);

    // Drop marker row.
    let marker_spans: Vec<Span> = (0..board.cols())
        .map(|col| {
            let symbol = if cursor_col == Some(col) { "▼" } else { " " };
            Span::styled(
                format!("{:^CELL_W$}", symbol),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(marker_spans));

    for row in 0..board.rows() {
        let spans: Vec<Span> = (0..board.cols())
            .map(|col| {
                let (symbol, mut style) = match board.cell(row, col) {
                    Some(Cell::Occupied(player)) => ("●", disc_style(player)),
                    _ => ("·", Style::default().fg(Color::DarkGray)),
                };
                if let Some(cells) = highlight
                    && cells.contains(&(row, col))
                {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(format!("{:^CELL_W$}", symbol), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Column numbers for direct-drop keys.
    let label_spans: Vec<Span> = (0..board.cols())
        .map(|col| {
            Span::styled(
                format!("{:^CELL_W$}", col + 1),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();
    lines.push(Line::from(label_spans));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, board_area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
