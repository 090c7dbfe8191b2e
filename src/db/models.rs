//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// Player row: running win/loss tallies keyed by name.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::players)]
pub struct PlayerRecord {
    id: i32,
    name: String,
    wins: i32,
    losses: i32,
}

impl PlayerRecord {
    /// Total matches recorded for this player, draws excluded.
    pub fn decided_games(&self) -> i32 {
        self.wins + self.losses
    }

    /// Win rate as a percentage of decided games (0.0 to 100.0).
    pub fn win_rate(&self) -> f64 {
        if self.decided_games() == 0 {
            0.0
        } else {
            (self.wins as f64 / self.decided_games() as f64) * 100.0
        }
    }
}

/// Insertable player model for first-time registration.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::players)]
pub struct NewPlayer {
    name: String,
}

/// Match history row: two player names and the winner's name, or the draw
/// marker, plus when the match was played.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct GameResultRecord {
    id: i32,
    player1: String,
    player2: String,
    winner: String,
    played_at: NaiveDateTime,
}

/// Insertable match result; `played_at` is filled by the database.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::game_results)]
pub struct NewGameResult {
    player1: String,
    player2: String,
    winner: String,
}
