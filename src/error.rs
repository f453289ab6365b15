use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Database(String),
    Timeout(String),
    BadRequest(String),
    InvalidId(String),
    NotFound(String),
    Internal(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Timeout(e) => write!(f, "Timeout: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::InvalidId(e) => write!(f, "Invalid ID: {}", e),
            AppError::NotFound(e) => write!(f, "Not found: {}", e),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

/// Failure envelope shared by every error response
pub fn fail_response(status_code: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        status_code,
        Json(json!({
            "status": "fail",
            "message": message
        })),
    )
}

// Status mapping and fail envelope
impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Timeout(_)
            | AppError::Internal(_)
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let message = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                e
            }
            AppError::Timeout(e) => {
                tracing::error!("Store call timed out: {}", e);
                e
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                e
            }
            AppError::Configuration(e) => {
                tracing::error!("Configuration error: {}", e);
                e
            }
            AppError::BadRequest(e) | AppError::InvalidId(e) | AppError::NotFound(e) => e,
        };

        fail_response(self.status_code(), message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}
