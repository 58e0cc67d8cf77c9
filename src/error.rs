use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

use crate::responses::responses::MessageResponse;
use crate::validation::ValidationError;

pub const MUSIC_NOT_FOUND: &str = "Music not found!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown id, or a music that was soft-deleted.
    #[error("Music not found!")]
    NotFound,

    #[error("{0}")]
    MalformedBody(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client errors all answer 400, a missing music included.
        let status = match self {
            ApiError::Validation(_) | ApiError::NotFound | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(ref err) => {
                error!("Error in database connection: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match self {
            ApiError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(MessageResponse::from_message(message))).into_response()
    }
}
