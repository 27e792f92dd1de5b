//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if every square on the board is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|sq| *sq != Square::Empty)
}

/// Checks if the game is a draw: a full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
