use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use buscaminas_core::GameError;

use crate::dto::ErrorResponse;
use crate::store::StoreError;

/// Failure surface of the HTTP API: engine rejections and storage misses,
/// each mapped to a status code and a stable machine-readable code.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Game(
                GameError::MissingName
                | GameError::InvalidDimensions
                | GameError::InvalidRow
                | GameError::InvalidColumn,
            ) => StatusCode::BAD_REQUEST,
            Self::Game(GameError::AlreadyRevealed | GameError::GameFinished) => {
                StatusCode::CONFLICT
            }
            Self::Store(StoreError::DuplicateName) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Game(GameError::MissingName) => "MISSING_NAME",
            Self::Game(GameError::InvalidDimensions) => "INVALID_DIMENSIONS",
            Self::Game(GameError::InvalidRow) => "INVALID_ROW",
            Self::Game(GameError::InvalidColumn) => "INVALID_COLUMN",
            Self::Game(GameError::AlreadyRevealed) => "ALREADY_REVEALED",
            Self::Game(GameError::GameFinished) => "GAME_FINISHED",
            Self::Store(StoreError::DuplicateName) => "DUPLICATE_NAME",
            Self::Store(StoreError::NotFound) => "GAME_NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error_code().to_owned(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
