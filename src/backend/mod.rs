use crate::backend::database::DatabaseBackendConfig;
use crate::error::AppResult;
use crate::models::{Pagination, Product, ProductInput, User, UserInput};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod database;

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    #[serde(alias = "postgres")]
    PostgreSQL,
    SQLite,
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostgreSQL => write!(f, "postgresql"),
            Self::SQLite => write!(f, "sqlite"),
        }
    }
}

impl DatabaseType {
    /// Backend implied by a connection URL scheme
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::PostgreSQL)
        } else if url.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else {
            None
        }
    }
}

impl std::str::FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Self::PostgreSQL),
            "sqlite" => Ok(Self::SQLite),
            other => Err(format!("Unsupported database type: {}", other)),
        }
    }
}

/// Lifecycle of the single shared store handle
#[async_trait]
pub trait Backend: Send + Sync {
    /// Open the store handle
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the tables if they do not exist yet
    async fn init_schema(&self) -> AppResult<()>;

    /// Release the store handle
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Product persistence operations.
///
/// Identifiers must be positive; anything else fails with `InvalidId`
/// without touching the store. Lookups by an unknown identifier fail with
/// `NotFound`.
#[async_trait]
pub trait ProductBackend: Backend {
    /// Persist a new product; the store assigns the identifier
    async fn create_product(&self, input: &ProductInput) -> AppResult<Product>;

    async fn find_product_by_id(&self, id: i64) -> AppResult<Product>;

    /// Overwrite every mutable field of an existing product
    async fn update_product(&self, id: i64, input: &ProductInput) -> AppResult<Product>;

    async fn delete_product(&self, id: i64) -> AppResult<()>;

    /// Products ordered by identifier ascending
    async fn list_products(&self, pagination: Pagination) -> AppResult<Vec<Product>>;

    /// Remove every product and return how many rows were deleted
    async fn delete_all_products(&self) -> AppResult<u64>;
}

/// User persistence operations. Passwords are hashed before storage.
#[async_trait]
pub trait UserBackend: Backend {
    async fn create_user(&self, input: &UserInput) -> AppResult<User>;

    async fn find_user_by_id(&self, id: i64) -> AppResult<User>;

    /// Full replacement, including a freshly hashed password
    async fn update_user(&self, id: i64, input: &UserInput) -> AppResult<User>;

    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Users ordered by identifier ascending
    async fn list_users(&self, pagination: Pagination) -> AppResult<Vec<User>>;
}

/// Combined interface the HTTP layer depends on
pub trait WarehouseBackend: ProductBackend + UserBackend {}

impl<T> WarehouseBackend for T where T: ProductBackend + UserBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(config: &DatabaseBackendConfig) -> AppResult<Arc<dyn WarehouseBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &DatabaseBackendConfig,
    ) -> AppResult<Box<dyn WarehouseBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
