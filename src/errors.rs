// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    #[error("Boost not found")]
    BoostNotFound,

    #[error("Invalid ObjectId: {0}")]
    InvalidObjectId(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    InvalidPhone(String),

    #[error("PayHero API error: {status}")]
    PayHero { status: u16, body: String },

    #[error("{0}")]
    Unexpected(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The payment frontend consumes these three bodies as-is; their
            // shape is fixed.
            AppError::InvalidPhone(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": message })),
            )
                .into_response(),
            AppError::PayHero { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                Json(json!({
                    "success": false,
                    "error": "PayHero API error",
                    "details": body,
                })),
            )
                .into_response(),
            AppError::Unexpected(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": message })),
            )
                .into_response(),
            other => {
                let (status, error_message) = match &other {
                    AppError::MongoDB(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
                    AppError::BoostNotFound => (StatusCode::NOT_FOUND, "Boost not found"),
                    AppError::InvalidObjectId(_) => (StatusCode::BAD_REQUEST, "Invalid ID format"),
                    AppError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "Invalid date"),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
                };

                let body = Json(json!({
                    "error": error_message,
                    "message": other.to_string(),
                    "success": false,
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }));

                (status, body).into_response()
            }
        }
    }
}

// Manual From implementations
impl From<mongodb::bson::oid::Error> for AppError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        AppError::InvalidObjectId(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidDate(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(format!("HTTP request failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
