//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::ResultsService;
use crate::session::PlayerName;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](crate::AppController) state machine. Restart is an
/// explicit transition: the controller constructs a fresh session rather
/// than re-entering the old one.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Begin a match between the two named players.
    StartMatch {
        /// Name bound to Red.
        player_one: PlayerName,
        /// Name bound to Yellow.
        player_two: PlayerName,
    },
    /// Play again with the same two players.
    Rematch,
    /// Return to name entry for a new pair of players.
    NewPlayers,
    /// Show the standings table.
    ShowStandings,
    /// Leave the standings table.
    LeaveStandings,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, results: &ResultsService);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, results: &ResultsService) -> ScreenTransition;
}
