//! Game engine for tic-tac-toe: domain types, rules, and state transitions.
//!
//! The engine is pure and deterministic. It owns move validation, turn
//! alternation, and terminal-state detection; storage and transport live
//! elsewhere.

mod engine;
mod types;

pub mod rules;

pub use engine::MoveError;
pub use types::{Board, Game, GameId, Mark, Position, Square};
