//! Match session: two named players bound to disc colors over one game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::games::connect_four::{Board, BoardConfig, DropOutcome, Game, GamePhase, Player};
use crate::record::{MatchOutcome, MatchRecord, MatchRecorder};

/// Longest accepted player name.
pub const MAX_NAME_LEN: usize = 15;

/// Why a player name was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// The name is empty.
    #[display("name cannot be empty")]
    Empty,
    /// The name exceeds [`MAX_NAME_LEN`] characters.
    #[display("name is longer than {MAX_NAME_LEN} characters")]
    TooLong,
    /// The name contains a non-printable or non-ASCII character.
    #[display("name contains unprintable characters")]
    Unprintable,
}

/// A validated player name: 1 to 15 printable ASCII characters, fixed for
/// the duration of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{_0}")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates and wraps a raw name.
    #[instrument]
    pub fn new(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            return Err(NameError::Unprintable);
        }
        if raw.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        Ok(Self(raw.to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One seat at the table: a name bound to a disc color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPlayer {
    /// The player's name.
    pub name: PlayerName,
    /// Which discs this player drops.
    pub disc: Player,
}

/// A single match between two named players.
///
/// Owns the [`Game`] for the lifetime of the match and emits to a
/// [`MatchRecorder`] exactly once when the game reaches a terminal phase.
/// Recorder failures are logged and never influence game state.
#[derive(Debug, Clone)]
pub struct MatchSession {
    game: Game,
    player_one: NamedPlayer,
    player_two: NamedPlayer,
}

impl MatchSession {
    /// Creates a session. `player_one` plays Red, `player_two` Yellow;
    /// `first_player` chooses who opens the game.
    #[instrument(skip(config))]
    pub fn new(
        player_one: PlayerName,
        player_two: PlayerName,
        config: BoardConfig,
        first_player: Player,
    ) -> Self {
        info!(
            player_one = %player_one,
            player_two = %player_two,
            first = first_player.label(),
            "Starting match session"
        );
        Self {
            game: Game::with_first_player(config, first_player),
            player_one: NamedPlayer {
                name: player_one,
                disc: Player::Red,
            },
            player_two: NamedPlayer {
                name: player_two,
                disc: Player::Yellow,
            },
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.state().board()
    }

    /// Returns the game phase.
    pub fn phase(&self) -> GamePhase {
        self.game.state().phase()
    }

    /// Number of discs placed so far.
    pub fn moves_played(&self) -> usize {
        self.game.state().history().len()
    }

    /// The seat holding the given disc color.
    pub fn player_for(&self, disc: Player) -> &NamedPlayer {
        if self.player_one.disc == disc {
            &self.player_one
        } else {
            &self.player_two
        }
    }

    /// Name of the player whose turn it is.
    pub fn current_player_name(&self) -> &PlayerName {
        &self.player_for(self.game.state().current_player()).name
    }

    /// Disc color whose turn it is.
    pub fn current_disc(&self) -> Player {
        self.game.state().current_player()
    }

    /// Submits a column drop for the player to move.
    ///
    /// Delegates to the game engine; when the move ends the match, emits
    /// the win/loss increments and the match record to `recorder`.
    /// Rejected moves change nothing and emit nothing; the caller should
    /// re-prompt.
    #[instrument(skip(self, recorder))]
    pub fn submit_move(&mut self, col: usize, recorder: &dyn MatchRecorder) -> DropOutcome {
        let outcome = self.game.drop_disc(col);

        match outcome {
            DropOutcome::Placed { row } => {
                debug!(col, row, "Disc placed");
                match self.game.state().phase() {
                    GamePhase::Won(disc) => {
                        let winner = self.player_for(disc).name.clone();
                        let loser = self.player_for(disc.opponent()).name.clone();
                        info!(winner = %winner, "Match won");
                        self.emit(
                            recorder,
                            MatchOutcome::Win {
                                winner: winner.as_str().to_string(),
                                loser: loser.as_str().to_string(),
                            },
                        );
                    }
                    GamePhase::Draw => {
                        info!("Match drawn");
                        self.emit(recorder, MatchOutcome::Draw);
                    }
                    GamePhase::InProgress => {}
                }
            }
            DropOutcome::Rejected(reason) => {
                debug!(col, %reason, "Move rejected");
            }
            DropOutcome::Ignored => {
                debug!(col, "Move ignored, match already over");
            }
        }

        outcome
    }

    /// Starts a fresh game with the same players and first mover.
    /// Always possible regardless of recorder outcomes.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting match session");
        self.game.reset();
    }

    /// Human-readable status for the presenter.
    pub fn status_line(&self) -> String {
        match self.game.state().phase() {
            GamePhase::InProgress => format!("{}'s Turn", self.current_player_name()),
            GamePhase::Won(disc) => format!("{} Wins!", self.player_for(disc).name),
            GamePhase::Draw => "It's a Draw!".to_string(),
        }
    }

    /// Hands the terminal result to the recorder. Failures are logged and
    /// dropped: persistence must never block the next match.
    fn emit(&self, recorder: &dyn MatchRecorder, outcome: MatchOutcome) {
        if let MatchOutcome::Win { winner, loser } = &outcome
            && let Err(e) = recorder.record_win_loss(winner, loser)
        {
            warn!(error = %e, "Failed to record win/loss");
        }

        let record = MatchRecord::new(
            self.player_one.name.as_str().to_string(),
            self.player_two.name.as_str().to_string(),
            outcome,
        );
        if let Err(e) = recorder.record_match(&record) {
            warn!(error = %e, "Failed to record match");
        }
    }
}
