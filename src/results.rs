//! Results service: the persistence collaborator behind the recorder seam.

use tracing::{debug, info, instrument};

use crate::db::{DbError, GameRepository, GameResultRecord, NewGameResult, PlayerRecord};
use crate::record::{MatchRecord, MatchRecorder};

/// Service layer over [`GameRepository`] implementing [`MatchRecorder`].
///
/// Also provides the standings and history reads used by the presenter and
/// the `standings` subcommand.
#[derive(Debug, Clone)]
pub struct ResultsService {
    repository: GameRepository,
}

impl ResultsService {
    /// Creates a results service backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: GameRepository) -> Self {
        info!("Creating ResultsService");
        Self { repository }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &GameRepository {
        &self.repository
    }

    /// All players, best record first.
    #[instrument(skip(self))]
    pub fn standings(&self) -> Result<Vec<PlayerRecord>, DbError> {
        debug!("Loading standings");
        self.repository.list_players()
    }

    /// The most recent matches, newest first.
    #[instrument(skip(self))]
    pub fn recent_matches(&self, limit: i64) -> Result<Vec<GameResultRecord>, DbError> {
        debug!(limit, "Loading match history");
        self.repository.recent_matches(limit)
    }
}

impl MatchRecorder for ResultsService {
    #[instrument(skip(self))]
    fn ensure_player(&self, name: &str) -> Result<(), DbError> {
        self.repository.ensure_player(name).map(|_| ())
    }

    #[instrument(skip(self))]
    fn record_win_loss(&self, winner: &str, loser: &str) -> Result<(), DbError> {
        self.repository.add_win(winner)?;
        self.repository.add_loss(loser)
    }

    #[instrument(skip(self, record), fields(winner = %record.outcome().marker()))]
    fn record_match(&self, record: &MatchRecord) -> Result<(), DbError> {
        let row = NewGameResult::new(
            record.player_one().clone(),
            record.player_two().clone(),
            record.outcome().marker().to_string(),
        );
        self.repository.record_match(row).map(|_| ())
    }
}
