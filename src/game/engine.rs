//! Game lifecycle and move application.
//!
//! Every operation validates before it mutates, so a rejected move leaves
//! the game exactly as it found it.

use super::rules;
use super::types::{Board, Game, GameId, Mark, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Move attempted on a game that already has a winner or a draw.
    #[display("Game has already finished")]
    AlreadyFinished,
    /// Move attempted by the mark that is not currently due.
    #[display("It is not {player}'s turn")]
    WrongTurn {
        /// Mark that attempted the move.
        player: Mark,
    },
    /// Position outside the 0-8 board range.
    #[display("Position {position} is out of range (0-8)")]
    OutOfRange {
        /// The rejected raw index.
        position: usize,
    },
    /// Move targets a square that is already occupied.
    #[display("Cell already occupied")]
    CellOccupied,
}

impl Game {
    /// Creates a new game with an empty board and the given starting mark.
    #[instrument]
    pub fn new(id: GameId, starting_mark: Mark) -> Self {
        Self {
            id,
            board: Board::new(),
            current_player: starting_mark,
            winner: None,
            is_draw: false,
            moves_count: 0,
        }
    }

    /// True once the game has a winner or ended in a draw.
    ///
    /// Finished games accept no further moves.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Places `acting_mark` at `position` and updates the derived state.
    ///
    /// On success the move counter is incremented and either a winner is
    /// recorded, the game is marked as a draw, or the turn passes to the
    /// other mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::AlreadyFinished`] if the game is already terminal.
    /// - [`MoveError::WrongTurn`] if it is not `acting_mark`'s turn.
    /// - [`MoveError::CellOccupied`] if the target square is taken.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn apply_move(&mut self, position: Position, acting_mark: Mark) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::AlreadyFinished);
        }
        if acting_mark != self.current_player {
            return Err(MoveError::WrongTurn {
                player: acting_mark,
            });
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied);
        }

        self.board.set(position, Square::Occupied(acting_mark));
        self.moves_count += 1;

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(%winner, moves = self.moves_count, "Winning line completed");
            self.winner = Some(winner);
        } else if rules::is_full(&self.board) {
            debug!(moves = self.moves_count, "Board full, game drawn");
            self.is_draw = true;
        } else {
            self.current_player = acting_mark.opponent();
        }

        debug!(
            moves = self.moves_count,
            board = %self.board.display(),
            "Move applied"
        );
        Ok(())
    }

    /// Resets the game to a fresh board. X starts; the id is preserved.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::default();
        self.winner = None;
        self.is_draw = false;
        self.moves_count = 0;
        debug!("Game reset to initial state");
    }
}
