//! Match records and the recorder boundary.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::DbError;

/// Marker stored in the `winner` column for drawn matches.
pub const DRAW_MARKER: &str = "Draw";

/// How a completed match ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// One player connected four.
    Win {
        /// Name of the winning player.
        winner: String,
        /// Name of the losing player.
        loser: String,
    },
    /// The board filled with no winner.
    Draw,
}

impl MatchOutcome {
    /// The string stored in the match record's winner column: the winner's
    /// name, or the draw marker.
    pub fn marker(&self) -> &str {
        match self {
            Self::Win { winner, .. } => winner,
            Self::Draw => DRAW_MARKER,
        }
    }
}

/// Record of one completed match, created exactly once on termination.
/// Ownership passes to the recorder; the engine never reads it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchRecord {
    /// First player's name.
    player_one: String,
    /// Second player's name.
    player_two: String,
    /// How the match ended.
    outcome: MatchOutcome,
}

/// Persistence collaborator for match results.
///
/// All three operations are fire-and-forget from the engine's point of
/// view: the session invokes them on termination, logs failures, and never
/// lets a recorder error reach game state.
pub trait MatchRecorder {
    /// Idempotent upsert of a player row; called once per distinct name
    /// before a match starts.
    fn ensure_player(&self, name: &str) -> Result<(), DbError>;

    /// Increments the winner's win count and the loser's loss count.
    /// Called only on a won match.
    fn record_win_loss(&self, winner: &str, loser: &str) -> Result<(), DbError>;

    /// Appends the match record. Called on every terminal transition.
    fn record_match(&self, record: &MatchRecord) -> Result<(), DbError>;
}
