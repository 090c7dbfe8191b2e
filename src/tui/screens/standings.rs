//! Standings screen: win/loss table and recent match history.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tracing::{debug, instrument, warn};

use crate::ResultsService;
use crate::db::{GameResultRecord, PlayerRecord};
use crate::tui::screen::{Screen, ScreenTransition};

/// How many history rows the screen shows.
const HISTORY_LIMIT: i64 = 10;

/// State for the standings screen. Loads once on entry; the data only
/// changes between matches.
#[derive(Debug)]
pub struct StandingsScreen {
    players: Vec<PlayerRecord>,
    matches: Vec<GameResultRecord>,
    load_error: Option<String>,
}

impl StandingsScreen {
    /// Creates the screen, reading standings and history from the store.
    #[instrument(skip(results))]
    pub fn new(results: &ResultsService) -> Self {
        let mut load_error = None;
        let players = results.standings().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load standings");
            load_error = Some(format!("Could not load standings: {}", e));
            Vec::new()
        });
        let matches = results.recent_matches(HISTORY_LIMIT).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load match history");
            load_error = Some(format!("Could not load match history: {}", e));
            Vec::new()
        });
        debug!(
            players = players.len(),
            matches = matches.len(),
            "StandingsScreen initialized"
        );
        Self {
            players,
            matches,
            load_error,
        }
    }
}

impl Screen for StandingsScreen {
    #[instrument(skip(self, frame, _results))]
    fn render(&self, frame: &mut Frame, _results: &ResultsService) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(HISTORY_LIMIT as u16 + 2),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Standings")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let rows: Vec<ListItem> = if self.players.is_empty() {
            vec![ListItem::new("No players recorded yet")]
        } else {
            self.players
                .iter()
                .map(|p| {
                    ListItem::new(format!(
                        "{:<15}  {:>3} W  {:>3} L  {:>5.1}%",
                        p.name(),
                        p.wins(),
                        p.losses(),
                        p.win_rate(),
                    ))
                })
                .collect()
        };
        let standings = List::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Players (wins / losses)"),
        );
        frame.render_widget(standings, chunks[1]);

        let history: Vec<ListItem> = if self.matches.is_empty() {
            vec![ListItem::new("No matches recorded yet")]
        } else {
            self.matches
                .iter()
                .map(|m| {
                    ListItem::new(format!(
                        "{}  {} vs {}  ->  {}",
                        m.played_at().format("%Y-%m-%d %H:%M"),
                        m.player1(),
                        m.player2(),
                        m.winner(),
                    ))
                })
                .collect()
        };
        let recent = List::new(history).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent matches"),
        );
        frame.render_widget(recent, chunks[2]);

        let footer_text = match &self.load_error {
            Some(e) => e.as_str(),
            None => "Esc/q: back",
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    #[instrument(skip(self, key, _results))]
    fn handle_key(&mut self, key: KeyEvent, _results: &ResultsService) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('b') | KeyCode::Enter => {
                ScreenTransition::LeaveStandings
            }
            _ => ScreenTransition::Stay,
        }
    }
}
