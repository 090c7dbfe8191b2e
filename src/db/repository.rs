//! Database repository for player tallies and match history.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, GameResultRecord, NewGameResult, NewPlayer, PlayerRecord, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for player and match-result operations.
#[derive(Debug, Clone)]
pub struct GameRepository {
    db_path: String,
}

impl GameRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating GameRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// Run once at startup; the schema bootstrap the application relies on.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Registers a player if not already present and returns the row.
    ///
    /// Idempotent: an existing row is left untouched (its tallies are
    /// preserved).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn ensure_player(&self, name: &str) -> Result<PlayerRecord, DbError> {
        debug!(name = %name, "Ensuring player exists");
        let mut conn = self.connection()?;

        diesel::insert_into(schema::players::table)
            .values(&NewPlayer::new(name.to_string()))
            .on_conflict(schema::players::name)
            .do_nothing()
            .execute(&mut conn)?;

        let player = schema::players::table
            .filter(schema::players::name.eq(name))
            .first::<PlayerRecord>(&mut conn)?;

        debug!(player_id = player.id(), "Player ensured");
        Ok(player)
    }

    /// Gets a player by name. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_player_by_name(&self, name: &str) -> Result<Option<PlayerRecord>, DbError> {
        debug!(name = %name, "Looking up player by name");
        let mut conn = self.connection()?;

        let player = schema::players::table
            .filter(schema::players::name.eq(name))
            .first::<PlayerRecord>(&mut conn)
            .optional()?;

        Ok(player)
    }

    /// Increments a player's win tally.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn add_win(&self, name: &str) -> Result<(), DbError> {
        debug!(name = %name, "Adding win");
        let mut conn = self.connection()?;

        let updated = diesel::update(schema::players::table.filter(schema::players::name.eq(name)))
            .set(schema::players::wins.eq(schema::players::wins + 1))
            .execute(&mut conn)?;

        if updated == 0 {
            warn!(name = %name, "No player row to credit the win to");
        }
        Ok(())
    }

    /// Increments a player's loss tally.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn add_loss(&self, name: &str) -> Result<(), DbError> {
        debug!(name = %name, "Adding loss");
        let mut conn = self.connection()?;

        let updated = diesel::update(schema::players::table.filter(schema::players::name.eq(name)))
            .set(schema::players::losses.eq(schema::players::losses + 1))
            .execute(&mut conn)?;

        if updated == 0 {
            warn!(name = %name, "No player row to charge the loss to");
        }
        Ok(())
    }

    /// Appends a completed match to the history.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, result), fields(player1 = %result.player1(), player2 = %result.player2(), winner = %result.winner()))]
    pub fn record_match(&self, result: NewGameResult) -> Result<GameResultRecord, DbError> {
        debug!("Recording match result");
        let mut conn = self.connection()?;

        let recorded = diesel::insert_into(schema::game_results::table)
            .values(&result)
            .returning(GameResultRecord::as_returning())
            .get_result(&mut conn)?;

        info!(result_id = recorded.id(), winner = %recorded.winner(), "Match recorded");
        Ok(recorded)
    }

    /// Lists all players, best record first (wins descending, then losses
    /// ascending, then name).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_players(&self) -> Result<Vec<PlayerRecord>, DbError> {
        debug!("Listing players");
        let mut conn = self.connection()?;

        let players = schema::players::table
            .order((
                schema::players::wins.desc(),
                schema::players::losses.asc(),
                schema::players::name.asc(),
            ))
            .load::<PlayerRecord>(&mut conn)?;

        info!(count = players.len(), "Players loaded");
        Ok(players)
    }

    /// Returns the most recent matches, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent_matches(&self, limit: i64) -> Result<Vec<GameResultRecord>, DbError> {
        debug!(limit, "Loading recent matches");
        let mut conn = self.connection()?;

        let matches = schema::game_results::table
            .order(schema::game_results::played_at.desc())
            .then_order_by(schema::game_results::id.desc())
            .limit(limit)
            .load::<GameResultRecord>(&mut conn)?;

        debug!(count = matches.len(), "Recent matches loaded");
        Ok(matches)
    }
}
