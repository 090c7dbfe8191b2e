//! Core domain types for Connect Four.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Player disc color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Red discs (moves first by default).
    Red,
    /// Yellow discs.
    Yellow,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Display label for the disc color.
    pub fn label(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's disc.
    Occupied(Player),
}

/// Immutable board dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardConfig {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl BoardConfig {
    /// Standard board height.
    pub const DEFAULT_ROWS: usize = 6;
    /// Standard board width.
    pub const DEFAULT_COLS: usize = 7;

    /// Creates a configuration with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

/// R x C Connect Four board. Row 0 is the top, row R-1 the bottom.
///
/// Occupied cells in a column always form a contiguous run from the bottom
/// row upward; the only writer is the drop resolution in the rules module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new all-empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            rows: *config.rows(),
            cols: *config.cols(),
            cells: vec![Cell::Empty; config.rows() * config.cols()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the cell at the given coordinates, or `None` if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Number of occupied cells in a column (0..=rows).
    ///
    /// Counts from the bottom; the gravity invariant makes the occupied
    /// cells contiguous.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .rev()
            .take_while(|&row| matches!(self.cell(row, col), Some(Cell::Occupied(_))))
            .count()
    }

    /// True when no empty cell remains in the top row.
    ///
    /// Sufficient under the gravity invariant: a column with an empty cell
    /// anywhere has an empty cell in row 0.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.cell(0, col) != Some(Cell::Empty))
    }

    /// Iterates all cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Writes a cell. Restricted to the rules module.
    pub(super) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = cell;
    }
}

/// Phase of a game. Transitions are one-way: a terminal phase accepts no
/// further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with a full board and no winner.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: GamePhase,
    /// Columns played, in order.
    history: Vec<usize>,
}

impl GameState {
    /// Creates a fresh state with an empty board and the given first mover.
    pub fn new(config: BoardConfig, first_player: Player) -> Self {
        Self {
            board: Board::new(config),
            current_player: first_player,
            phase: GamePhase::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is. On a won game this is the
    /// winner: the turn does not pass after a winning move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the columns played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places a disc for the current player (unchecked, rules module only).
    pub(super) fn place(&mut self, row: usize, col: usize) {
        self.board.set(row, col, Cell::Occupied(self.current_player));
        self.history.push(col);
    }

    /// Passes the turn to the other player.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game phase.
    pub(super) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardConfig::default(), Player::Red)
    }
}
