//! Name entry screen: both players type their names before the match.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::ResultsService;
use crate::session::{MAX_NAME_LEN, PlayerName};
use crate::tui::screen::{Screen, ScreenTransition};

/// Which input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PlayerOne,
    PlayerTwo,
}

/// State for the name entry screen.
#[derive(Debug)]
pub struct NameEntryScreen {
    player_one_input: String,
    player_two_input: String,
    focus: Field,
    error_message: Option<String>,
}

impl NameEntryScreen {
    /// Creates an empty name entry screen with focus on player one.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            player_one_input: String::new(),
            player_two_input: String::new(),
            focus: Field::PlayerOne,
            error_message: None,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::PlayerOne => &mut self.player_one_input,
            Field::PlayerTwo => &mut self.player_two_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::PlayerOne => Field::PlayerTwo,
            Field::PlayerTwo => Field::PlayerOne,
        };
    }

    /// Validates both names, returning the transition into the match.
    #[instrument(skip(self))]
    fn try_start(&mut self) -> ScreenTransition {
        let one = PlayerName::new(self.player_one_input.trim());
        let two = PlayerName::new(self.player_two_input.trim());
        match (one, two) {
            (Ok(player_one), Ok(player_two)) => {
                info!(player_one = %player_one, player_two = %player_two, "Names accepted");
                self.error_message = None;
                ScreenTransition::StartMatch {
                    player_one,
                    player_two,
                }
            }
            (Err(e), _) => {
                self.error_message = Some(format!("Player 1: {}", e));
                ScreenTransition::Stay
            }
            (_, Err(e)) => {
                self.error_message = Some(format!("Player 2: {}", e));
                ScreenTransition::Stay
            }
        }
    }

    fn render_field(&self, frame: &mut Frame, area: ratatui::layout::Rect, field: Field) {
        let (title, value) = match field {
            Field::PlayerOne => ("Player 1 (Red)", self.player_one_input.as_str()),
            Field::PlayerTwo => ("Player 2 (Yellow)", self.player_two_input.as_str()),
        };
        let focused = self.focus == field;
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let shown = if value.is_empty() && !focused {
            "Enter your name"
        } else {
            value
        };
        let input = Paragraph::new(shown)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, area);
    }
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _results))]
    fn render(&self, frame: &mut Frame, _results: &ResultsService) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
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

        self.render_field(frame, chunks[1], Field::PlayerOne);
        self.render_field(frame, chunks[2], Field::PlayerTwo);

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Tab: switch field | Enter: start game | Esc: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, _results))]
    fn handle_key(&mut self, key: KeyEvent, _results: &ResultsService) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                // Same acceptance rule as name validation: printable ASCII,
                // capped at the maximum length.
                let input = self.focused_input_mut();
                if c.is_ascii() && !c.is_ascii_control() && input.len() < MAX_NAME_LEN {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input_mut().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.toggle_focus();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.try_start(),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
