//! Core domain types for tic-tac-toe.

use super::engine::MoveError;
use serde::{Deserialize, Serialize};

/// A player mark on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (starts by default).
    #[default]
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// A validated board index (0-8), row-major.
///
/// Raw indices are range-checked once at the boundary; the engine only
/// ever receives a `Position` that is known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(usize);

impl Position {
    /// Validates a raw index into a board position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not in `0..9`.
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index < 9 {
            Ok(Self(index))
        } else {
            Err(MoveError::OutOfRange { position: index })
        }
    }

    /// Returns the raw board index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq != Square::Empty)
            .count()
    }

    /// Formats the board as a human-readable grid for logs.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a game.
pub type GameId = String;

/// A single tic-tac-toe game.
///
/// Field access is read-only; all mutation goes through the engine
/// operations ([`Game::apply_move`] and [`Game::reset`]) so the state
/// invariants cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub(super) id: GameId,
    pub(super) board: Board,
    pub(super) current_player: Mark,
    pub(super) winner: Option<Mark>,
    pub(super) is_draw: bool,
    pub(super) moves_count: u8,
}

impl Game {
    /// Returns the game's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn is next.
    ///
    /// Meaningless once the game is finished.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the winning mark, once a line is completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// True when the board filled with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Number of marks placed since the last reset.
    pub fn moves_count(&self) -> u8 {
        self.moves_count
    }
}
