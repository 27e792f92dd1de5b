//! Tic-tac-toe backend library.
//!
//! A minimal stateful web service for turn-based two-player games.
//!
//! # Architecture
//!
//! - **Engine** ([`game`]): pure game-state transitions - creation, move
//!   application, win/draw detection, reset. No I/O.
//! - **Store** ([`GameStore`]): concurrency-safe in-process map from game
//!   id to game state; the single source of truth for live games.
//! - **Server** ([`create_app`]): REST transport that resolves a game,
//!   invokes one engine operation, and serializes the result.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{GameStore, create_app};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = GameStore::new();
//! let app = create_app(store);
//!
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod server;
mod store;

// Crate-level exports - API errors
pub use error::ApiError;

// Crate-level exports - Game engine
pub use game::{Board, Game, GameId, Mark, MoveError, Position, Square};

// Crate-level exports - REST surface
pub use server::{CreateGameRequest, GameStateBody, MoveRequest, create_app};

// Crate-level exports - Storage
pub use store::{GameStore, StoreError};
