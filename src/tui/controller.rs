//! App controller: the state machine driving the screens.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::ResultsService;
use crate::games::connect_four::{BoardConfig, Player};
use crate::record::MatchRecorder;
use crate::session::{MatchSession, PlayerName};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{MatchScreen, NameEntryScreen, StandingsScreen};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    Match(MatchScreen),
    Standings(StandingsScreen),
}

/// Controller that drives the screen state machine.
///
/// Owns the results service, the board configuration, and the last pair of
/// player names. Restart requests construct a fresh session here in the
/// outer loop; no screen re-enters itself.
#[derive(Debug)]
pub struct AppController {
    results: ResultsService,
    config: BoardConfig,
    first_player: Player,
    names: Option<(PlayerName, PlayerName)>,
}

impl AppController {
    /// Creates a new controller.
    #[instrument(skip(results))]
    pub fn new(results: ResultsService, config: BoardConfig, first_player: Player) -> Self {
        info!(first = first_player.label(), "Creating AppController");
        Self {
            results,
            config,
            first_player,
            names: None,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");

        let mut screen = ActiveScreen::NameEntry(NameEntryScreen::new());

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::NameEntry(s) => s.render(f, &self.results),
                ActiveScreen::Match(s) => s.render(f, &self.results),
                ActiveScreen::Standings(s) => s.render(f, &self.results),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::NameEntry(s) => s.handle_key(key, &self.results),
                    ActiveScreen::Match(s) => s.handle_key(key, &self.results),
                    ActiveScreen::Standings(s) => s.handle_key(key, &self.results),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to
    /// quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::StartMatch {
                player_one,
                player_two,
            } => {
                self.register_players(&player_one, &player_two);
                self.names = Some((player_one.clone(), player_two.clone()));
                Some(self.new_match(player_one, player_two))
            }

            ScreenTransition::Rematch => match self.names.clone() {
                Some((player_one, player_two)) => {
                    info!("Rematch with the same players");
                    Some(self.new_match(player_one, player_two))
                }
                None => {
                    warn!("Rematch requested with no previous players");
                    Some(ActiveScreen::NameEntry(NameEntryScreen::new()))
                }
            },

            ScreenTransition::NewPlayers => {
                info!("Returning to name entry");
                Some(ActiveScreen::NameEntry(NameEntryScreen::new()))
            }

            ScreenTransition::ShowStandings => {
                info!("Showing standings");
                Some(ActiveScreen::Standings(StandingsScreen::new(&self.results)))
            }

            ScreenTransition::LeaveStandings => {
                Some(ActiveScreen::NameEntry(NameEntryScreen::new()))
            }

            ScreenTransition::Quit => None,
        }
    }

    /// Builds a fresh session and its screen.
    fn new_match(&self, player_one: PlayerName, player_two: PlayerName) -> ActiveScreen {
        ActiveScreen::Match(MatchScreen::new(MatchSession::new(
            player_one,
            player_two,
            self.config,
            self.first_player,
        )))
    }

    /// Upserts both player rows before the match. Failures are logged and
    /// do not stop the match from starting.
    #[instrument(skip(self))]
    fn register_players(&self, player_one: &PlayerName, player_two: &PlayerName) {
        let mut names = vec![player_one.as_str()];
        if player_two.as_str() != player_one.as_str() {
            names.push(player_two.as_str());
        }
        for name in names {
            if let Err(e) = self.results.ensure_player(name) {
                warn!(name = %name, error = %e, "Failed to register player");
            }
        }
    }
}
