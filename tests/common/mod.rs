#![allow(dead_code)]

use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;

use warehouse_backend::backend::database::DatabaseBackendConfig;
use warehouse_backend::backend::{BackendFactory, WarehouseBackend};
use warehouse_backend::startup::build_router;

/// Create backend for testing with in-memory SQLite database
pub async fn setup_test_database() -> Result<Arc<dyn WarehouseBackend>, Box<dyn std::error::Error>>
{
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite()).await?;
    backend.init_schema().await?;
    Ok(backend)
}

/// Create a test app with in-memory database
pub async fn setup_test_app() -> Result<Router, Box<dyn std::error::Error>> {
    let backend = setup_test_database().await?;
    Ok(build_router(backend))
}

pub fn create_test_product_json(name: &str, price: f64, quantity: i32) -> Value {
    json!({
        "name": name,
        "description": format!("{} for testing", name),
        "price": price,
        "quantity": quantity,
        "category": "hardware",
        "brand": "Acme",
        "color": "blue",
        "warranty_months": 12
    })
}

pub fn create_test_user_json(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "correct-horse-battery"
    })
}
