//! Connect Four game engine.

mod rules;
mod types;

pub use rules::{DropOutcome, Game, MoveRejection, has_four_in_a_row, is_draw, winning_line};
pub use types::{Board, BoardConfig, Cell, GamePhase, GameState, Player};
