use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::{AppState, HandlerError};
use crate::extractors::ApiJson;
use crate::models::{ApiResponse, Pagination, PaginationQuery, Product, ProductInput};
use crate::utils::parse_record_id;

pub async fn create_product(
    State(backend): State<AppState>,
    ApiJson(payload): ApiJson<ProductInput>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), HandlerError> {
    let product = backend
        .create_product(&payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Product created successfully", product)),
    ))
}

pub async fn get_product(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    let product = backend
        .find_product_by_id(id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success("Product found", product)))
}

pub async fn list_products(
    State(backend): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, HandlerError> {
    let pagination = Pagination::from_query(&query);
    let products = backend
        .list_products(pagination)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success(
        format!("{} products retrieved", products.len()),
        products,
    )))
}

pub async fn update_product(
    State(backend): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ProductInput>,
) -> Result<Json<ApiResponse<Product>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    let product = backend
        .update_product(id, &payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success("Product updated successfully", product)))
}

pub async fn delete_product(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, HandlerError> {
    let id = parse_record_id(&id).map_err(|e| e.to_response())?;
    backend
        .delete_product(id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::message("Product deleted successfully")))
}

pub async fn delete_all_products(
    State(backend): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HandlerError> {
    let deleted = backend
        .delete_all_products()
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ApiResponse::success(
        "All products deleted successfully",
        json!({ "deleted": deleted }),
    )))
}
