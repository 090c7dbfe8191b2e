//! Connect Four library - game engine, score persistence, and terminal UI.
//!
//! # Architecture
//!
//! - **Engine**: board, move resolution, win/draw detection, and the
//!   turn/phase state machine ([`Game`], [`MatchSession`])
//! - **Persistence**: diesel/SQLite win-loss tallies and match history
//!   behind the [`MatchRecorder`] seam
//! - **Presenter**: ratatui screens driven by [`AppController`]
//!
//! # Example
//!
//! ```
//! use connect_four::{BoardConfig, DropOutcome, Game, GamePhase};
//!
//! let mut game = Game::new(BoardConfig::default());
//! assert_eq!(game.drop_disc(3), DropOutcome::Placed { row: 5 });
//! assert_eq!(game.state().phase(), GamePhase::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod db;
mod games;
mod record;
mod results;
mod session;
mod tui;

// Crate-level exports - Game engine
pub use games::connect_four::{
    Board, BoardConfig, Cell, DropOutcome, Game, GamePhase, GameState, MoveRejection, Player,
    has_four_in_a_row, is_draw, winning_line,
};

// Crate-level exports - Sessions and records
pub use record::{DRAW_MARKER, MatchOutcome, MatchRecord, MatchRecorder};
pub use session::{MAX_NAME_LEN, MatchSession, NameError, NamedPlayer, PlayerName};

// Crate-level exports - Persistence
pub use db::{DbError, GameRepository, GameResultRecord, NewGameResult, NewPlayer, PlayerRecord};
pub use results::ResultsService;

// Crate-level exports - Terminal UI
pub use tui::{AppController, run_tui};
