use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::{AppState, HandlerError};
use crate::error::fail_response;
use crate::extractors::ApiJson;
use crate::models::ApiResponse;
use crate::utils::is_blank;

pub const WELCOME_MESSAGE: &str = "Welcome to the Warehouse Backend!";

#[derive(Deserialize, Debug)]
pub struct EchoMessage {
    #[serde(default)]
    pub message: String,
}

pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn get_probe() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("GET request succeeded"))
}

/// Accepts `{"message": "..."}`; a missing or blank message is rejected
pub async fn post_probe(
    ApiJson(payload): ApiJson<EchoMessage>,
) -> Result<Json<ApiResponse<()>>, HandlerError> {
    if is_blank(&payload.message) {
        return Err(fail_response(
            StatusCode::BAD_REQUEST,
            "Field 'message' must not be empty",
        ));
    }

    tracing::debug!(message = %payload.message, "received message");
    Ok(Json(ApiResponse::message("Data received successfully")))
}

pub async fn health(State(backend): State<AppState>) -> Result<Json<ApiResponse<()>>, HandlerError> {
    backend.health_check().await.map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::message("Store is reachable")))
}
