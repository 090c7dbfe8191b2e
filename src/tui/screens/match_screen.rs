//! In-game screen: the board, the column cursor, and the end-of-game menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::ResultsService;
use crate::games::connect_four::{DropOutcome, GamePhase, winning_line};
use crate::session::MatchSession;
use crate::tui::board::{disc_style, draw_board};
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the in-game screen: the session plus presentation-only state
/// (cursor column and the last rejection notice).
#[derive(Debug)]
pub struct MatchScreen {
    session: MatchSession,
    cursor_col: usize,
    notice: Option<String>,
}

impl MatchScreen {
    /// Creates the screen around a fresh session, cursor on the middle
    /// column.
    #[instrument(skip(session))]
    pub fn new(session: MatchSession) -> Self {
        let cursor_col = session.board().cols() / 2;
        Self {
            session,
            cursor_col,
            notice: None,
        }
    }

    /// Submits a drop into `col` and keeps the rejection notice current.
    #[instrument(skip(self, results))]
    fn drop_at(&mut self, col: usize, results: &ResultsService) {
        match self.session.submit_move(col, results) {
            DropOutcome::Placed { row } => {
                debug!(col, row, "Placed");
                self.notice = None;
            }
            DropOutcome::Rejected(reason) => {
                // Move not applied; keep the turn and tell the player why.
                self.notice = Some(format!("Move not applied: {}", reason));
            }
            DropOutcome::Ignored => {}
        }
    }

    fn in_progress(&self) -> bool {
        self.session.phase() == GamePhase::InProgress
    }
}

impl Screen for MatchScreen {
    #[instrument(skip(self, frame, _results))]
    fn render(&self, frame: &mut Frame, _results: &ResultsService) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Connect Four")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let status_style = match self.session.phase() {
            GamePhase::InProgress => disc_style(self.session.current_disc()),
            GamePhase::Won(disc) => disc_style(disc),
            GamePhase::Draw => Style::default().fg(Color::White),
        };
        let status_text = match &self.notice {
            Some(notice) => format!("{}  ({})", self.session.status_line(), notice),
            None => self.session.status_line(),
        };
        let status = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        let highlight = match self.session.phase() {
            GamePhase::Won(disc) => winning_line(self.session.board(), disc),
            _ => None,
        };
        let cursor = self.in_progress().then_some(self.cursor_col);
        draw_board(frame, chunks[2], self.session.board(), cursor, highlight);

        let help_text = if self.in_progress() {
            format!(
                "Move {} | ←/→: aim | Enter/Space: drop | 1-{}: drop in column | q: quit",
                self.session.moves_played() + 1,
                self.session.board().cols().min(9),
            )
        } else {
            "r: rematch | n: new players | s: standings | q: quit".to_string()
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, results))]
    fn handle_key(&mut self, key: KeyEvent, results: &ResultsService) -> ScreenTransition {
        if self.in_progress() {
            match key.code {
                KeyCode::Left => {
                    self.cursor_col = self.cursor_col.saturating_sub(1);
                    ScreenTransition::Stay
                }
                KeyCode::Right => {
                    if self.cursor_col + 1 < self.session.board().cols() {
                        self.cursor_col += 1;
                    }
                    ScreenTransition::Stay
                }
                KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                    self.drop_at(self.cursor_col, results);
                    ScreenTransition::Stay
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10)
                        && digit >= 1
                    {
                        // Column numbers are 1-based on the keyboard; range
                        // checking is the engine's job.
                        self.drop_at(digit as usize - 1, results);
                    }
                    ScreenTransition::Stay
                }
                KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
                _ => ScreenTransition::Stay,
            }
        } else {
            match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::Rematch,
                KeyCode::Char('n') | KeyCode::Char('N') => ScreenTransition::NewPlayers,
                KeyCode::Char('s') | KeyCode::Char('S') => ScreenTransition::ShowStandings,
                KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
                _ => ScreenTransition::Stay,
            }
        }
    }
}
