//! SQL storage adapters for the warehouse backend
//!
//! Shared validation, timestamping, password hashing and timeouts live in the
//! `*_ops` modules; each database module only supplies the SQL.
//!
//! ```text
//! UnifiedProductOps / UnifiedUserOps (product_ops.rs, user_ops.rs)
//!     ↓
//! Database-specific stores
//!     ├── postgres/
//!     └── sqlite/
//! ```

use std::future::Future;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub mod config;
pub mod postgres;
pub mod product_ops;
pub mod sqlite;
pub mod user_ops;

pub use config::DatabaseBackendConfig;

pub use product_ops::{ProductStore, UnifiedProductOps};
pub use user_ops::{UnifiedUserOps, UserStore};

/// Run a store call, failing with `AppError::Timeout` once `limit` elapses.
///
/// The call is dropped on expiry and never retried.
pub async fn with_timeout<T, F>(limit: Duration, operation: &str, call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_ms = limit.as_millis() as u64, "store call timed out");
            Err(AppError::Timeout(format!(
                "{} timed out after {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}

/// Map sqlx errors to AppError, naming unique-key violations explicitly
pub fn map_database_error(error: sqlx::Error, action: &str) -> AppError {
    let error_str = error.to_string();
    if error_str.contains("duplicate key") || error_str.contains("UNIQUE constraint") {
        if error_str.contains("email") {
            AppError::Database("Email already registered".to_string())
        } else {
            AppError::Database(format!("Failed to {}: record already exists", action))
        }
    } else {
        AppError::Database(format!("Failed to {}: {}", action, error_str))
    }
}
