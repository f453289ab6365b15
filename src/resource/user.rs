use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::{AppState, HandlerError};
use crate::extractors::ApiJson;
use crate::models::{ApiResponse, Pagination, PaginationQuery, User, UserInput};
use crate::utils::parse_record_id;

pub async fn create_user(
    State(backend): State<AppState>,
    ApiJson(payload): ApiJson<UserInput>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), HandlerError> {
    let user = backend
        .create_user(&payload)
        .await
        .map_err(|e| e.to_response())?;

    tracing::info!(user_id = user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

pub async fn get_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    let user = backend
        .find_user_by_id(id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success("User found", user)))
}

pub async fn list_users(
    State(backend): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, HandlerError> {
    let users = backend
        .list_users(Pagination::from_query(&query))
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success(
        format!("{} users retrieved", users.len()),
        users,
    )))
}

pub async fn update_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UserInput>,
) -> Result<Json<ApiResponse<User>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    let user = backend
        .update_user(id, &payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success("User updated successfully", user)))
}

pub async fn delete_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    backend
        .delete_user(id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
