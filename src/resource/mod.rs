//! HTTP handlers. Each handler parses and validates the request, makes one
//! store call and wraps the outcome in the `{status, message, data}` envelope.

use axum::{http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::backend::WarehouseBackend;

pub mod product;
pub mod system;
pub mod user;

/// Shared store handle injected into every handler
pub type AppState = Arc<dyn WarehouseBackend>;

/// Error half of every handler result
pub type HandlerError = (StatusCode, Json<Value>);
