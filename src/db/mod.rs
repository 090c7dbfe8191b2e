//! Database persistence layer for player records and match history.

// Private module declarations
mod error;
mod models;
mod repository;
mod schema; // Diesel table definitions - internal use only

// Crate-level exports via pub use
pub use error::DbError;
pub use models::{GameResultRecord, NewGameResult, NewPlayer, PlayerRecord};
pub use repository::GameRepository;
