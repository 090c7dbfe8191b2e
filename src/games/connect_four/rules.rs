//! Game logic and rules for Connect Four.

use super::types::{Board, BoardConfig, Cell, GamePhase, GameState, Player};
use derive_more::Display;
use tracing::{debug, instrument};

/// Why a submitted move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The column index is outside the board.
    #[display("column out of range")]
    ColumnOutOfRange,
    /// Every cell in the column is occupied.
    #[display("column is full")]
    ColumnFull,
}

/// Outcome of submitting a column drop.
///
/// Rejection and the post-game no-op are ordinary outcomes, not errors: an
/// illegal move is routine user input and the caller simply re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The disc landed in the given row.
    Placed {
        /// Row the disc came to rest in.
        row: usize,
    },
    /// The move was not applied; the board is unchanged.
    Rejected(MoveRejection),
    /// The game is already over; the move was ignored.
    Ignored,
}

/// Connect Four game engine: gravity drops, win/draw detection, and the
/// turn/phase state machine.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    first_player: Player,
}

impl Game {
    /// Creates a new game with Red to move.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        Self::with_first_player(config, Player::Red)
    }

    /// Creates a new game with the given first mover.
    #[instrument]
    pub fn with_first_player(config: BoardConfig, first_player: Player) -> Self {
        Self {
            state: GameState::new(config, first_player),
            first_player,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drops the current player's disc into `col`.
    ///
    /// The disc settles on the lowest empty cell of the column. A move into
    /// a full or out-of-range column is rejected with the board unchanged;
    /// a move after the game has ended is ignored. On a winning move the
    /// phase becomes [`GamePhase::Won`] and the turn does not pass; a move
    /// that fills the board without winning ends in [`GamePhase::Draw`].
    /// Win detection runs strictly before the full-board check, so filling
    /// the last cell with a connecting four is a win, not a draw.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn drop_disc(&mut self, col: usize) -> DropOutcome {
        if self.state.phase() != GamePhase::InProgress {
            debug!(phase = ?self.state.phase(), "Move ignored, game is over");
            return DropOutcome::Ignored;
        }

        if col >= self.state.board().cols() {
            debug!(col, "Move rejected, column out of range");
            return DropOutcome::Rejected(MoveRejection::ColumnOutOfRange);
        }

        // Lowest empty cell: highest row index still empty in this column.
        let row = match (0..self.state.board().rows())
            .rev()
            .find(|&row| self.state.board().cell(row, col) == Some(Cell::Empty))
        {
            Some(row) => row,
            None => {
                debug!(col, "Move rejected, column is full");
                return DropOutcome::Rejected(MoveRejection::ColumnFull);
            }
        };

        let player = self.state.current_player();
        self.state.place(row, col);

        if has_four_in_a_row(self.state.board(), player) {
            debug!(?player, "Winning move");
            self.state.set_phase(GamePhase::Won(player));
        } else if self.state.board().is_full() {
            debug!("Board full, game drawn");
            self.state.set_phase(GamePhase::Draw);
        } else {
            self.state.switch_player();
        }

        DropOutcome::Placed { row }
    }

    /// Restores the initial state: empty board, original first mover,
    /// phase back to [`GamePhase::InProgress`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let config = BoardConfig::new(self.state.board().rows(), self.state.board().cols());
        self.state = GameState::new(config, self.first_player);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

/// The four line orientations: east, south, southeast, northeast. Together
/// with their reversals these cover every straight line of four.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Finds a line of four consecutive cells occupied by `player`, returning
/// its coordinates, or `None` if the player has no connecting four.
pub fn winning_line(board: &Board, player: Player) -> Option<[(usize, usize); 4]> {
    for (row, col, cell) in board.cells() {
        if cell != Cell::Occupied(player) {
            continue;
        }
        'dir: for (dr, dc) in DIRECTIONS {
            let mut line = [(row, col); 4];
            for (step, slot) in line.iter_mut().enumerate().skip(1) {
                let r = row as isize + dr * step as isize;
                let c = col as isize + dc * step as isize;
                if r < 0 || c < 0 {
                    continue 'dir;
                }
                if board.cell(r as usize, c as usize) != Some(Cell::Occupied(player)) {
                    continue 'dir;
                }
                *slot = (r as usize, c as usize);
            }
            return Some(line);
        }
    }
    None
}

/// True if `player` has four discs in a straight line in any orientation.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// True if the board is full and neither player has a connecting four.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && winning_line(board, Player::Red).is_none()
        && winning_line(board, Player::Yellow).is_none()
}
