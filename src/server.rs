//! REST API surface: router, handlers, and wire types.
//!
//! The transport layer resolves a game through the [`GameStore`], invokes
//! one engine operation, and serializes the result. It holds no game
//! logic of its own.

use crate::error::ApiError;
use crate::game::{Game, Mark, Position};
use crate::store::GameStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument};

/// Request body for creating a new game.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGameRequest {
    /// Mark that moves first. Defaults to X.
    #[serde(default)]
    pub first_player: Mark,
}

/// Request body for making a move.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    /// Board index to play (0-8).
    pub position: usize,
    /// Mark making the move.
    pub player: Mark,
}

/// Wire representation of a game's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateBody {
    /// Unique identifier of the game.
    pub game_id: String,
    /// The 9 cells in row-major order; `null` marks an empty cell.
    pub board: Vec<Option<Mark>>,
    /// Mark whose turn is next.
    pub current_player: Mark,
    /// Winning mark, once a line is completed.
    pub winner: Option<Mark>,
    /// True if the game ended in a draw.
    pub is_draw: bool,
    /// Marks placed since the last reset.
    pub moves_count: u8,
}

impl From<&Game> for GameStateBody {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id().to_string(),
            board: game.board().squares().iter().map(|sq| sq.mark()).collect(),
            current_player: game.current_player(),
            winner: game.winner(),
            is_draw: game.is_draw(),
            moves_count: game.moves_count(),
        }
    }
}

/// Builds the application router over the given store.
pub fn create_app(store: GameStore) -> Router {
    // The frontend may be served from anywhere, so CORS is wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/docs/websocket-usage", get(websocket_usage))
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/move", post(make_move))
        .route("/games/{id}/reset", post(reset_game))
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint to verify the service is running.
async fn health() -> Json<Value> {
    Json(json!({ "message": "Healthy" }))
}

/// Documents that this API is REST-only; no streaming endpoints exist.
async fn websocket_usage() -> Json<Value> {
    Json(json!({
        "note": "No WebSocket endpoints are currently available.",
        "future": "A /ws/{game_id} endpoint could be added for real-time updates.",
        "usage_example": "Client would connect via WebSocket and receive move events.",
    }))
}

/// Creates a new game and returns its initial state.
#[instrument(skip(store, payload))]
async fn create_game(
    State(store): State<GameStore>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GameStateBody>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;

    let game = Game::new(store.generate_id(), req.first_player);
    let body = GameStateBody::from(&game);
    info!(game_id = %game.id(), first_player = %req.first_player, "Game created");
    store.insert(game);

    Ok((StatusCode::CREATED, Json(body)))
}

/// Returns the current state of a game by id.
#[instrument(skip(store))]
async fn get_game(
    State(store): State<GameStore>,
    Path(id): Path<String>,
) -> Result<Json<GameStateBody>, ApiError> {
    let game = store.get(&id)?;
    Ok(Json(GameStateBody::from(&game)))
}

/// Applies a move to a game and returns the updated state.
///
/// The get/apply/put sequence runs inside [`GameStore::update`], so two
/// concurrent moves on the same game are serialized.
#[instrument(skip(store, payload))]
async fn make_move(
    State(store): State<GameStore>,
    Path(id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameStateBody>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    let position = Position::new(req.position)?;

    let body = store.update(&id, |game| {
        game.apply_move(position, req.player)
            .map(|()| GameStateBody::from(&*game))
    })??;

    info!(
        game_id = %id,
        position = %position,
        player = %req.player,
        winner = ?body.winner,
        is_draw = body.is_draw,
        "Move applied"
    );
    Ok(Json(body))
}

/// Resets a game to an empty board. X starts.
#[instrument(skip(store))]
async fn reset_game(
    State(store): State<GameStore>,
    Path(id): Path<String>,
) -> Result<Json<GameStateBody>, ApiError> {
    let body = store.update(&id, |game| {
        game.reset();
        GameStateBody::from(&*game)
    })?;

    info!(game_id = %id, "Game reset");
    Ok(Json(body))
}
