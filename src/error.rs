//! API error type and HTTP status mapping.
//!
//! Every engine and store error kind maps to exactly one status code;
//! nothing is swallowed or re-labeled on the way out.

use crate::game::MoveError;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use serde_json::json;
use tracing::warn;

/// Error surfaced to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// Referenced game id does not exist in the store.
    #[display("Game not found")]
    NotFound,
    /// Malformed request body or parameters, rejected at the boundary.
    #[display("Invalid input: {_0}")]
    InvalidInput(#[error(not(source))] String),
    /// The engine rejected the move.
    #[display("{_0}")]
    Move(MoveError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Move(err)
    }
}

impl ApiError {
    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Move(MoveError::AlreadyFinished) => StatusCode::CONFLICT,
            ApiError::Move(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, detail = %self, "Request rejected");
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
