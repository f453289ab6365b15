use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use super::super::config::DatabaseBackendConfig;
use super::{SqliteProductStore, SqliteUserStore};
use crate::backend::database::{with_timeout, UnifiedProductOps, UnifiedUserOps};
use crate::backend::{Backend, ProductBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Pagination, Product, ProductInput, User, UserInput};
use crate::password::PasswordManager;

/// SQLite database backend implementation
pub struct SqliteBackend {
    pool: SqlitePool,
    config: DatabaseBackendConfig,
    product_ops: UnifiedProductOps<SqliteProductStore>,
    user_ops: UnifiedUserOps<SqliteUserStore>,
}

impl SqliteBackend {
    pub fn new(
        pool: SqlitePool,
        config: &DatabaseBackendConfig,
        password_manager: PasswordManager,
    ) -> Self {
        let timeout = config.operation_timeout_duration();

        Self {
            product_ops: UnifiedProductOps::new(SqliteProductStore::new(pool.clone()), timeout),
            user_ops: UnifiedUserOps::new(
                SqliteUserStore::new(pool.clone()),
                password_manager,
                timeout,
            ),
            config: config.clone(),
            pool,
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;
        let password_manager = config.password_manager()?;

        let options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        // Every connection to an in-memory database sees its own empty database
        let max_connections = if config.is_memory_database() {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(config.connection_timeout_duration())
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        tracing::info!(url = %config.connection_url, "connected to SQLite");
        Ok(Self::new(pool, config, password_manager))
    }

    async fn health_check(&self) -> AppResult<()> {
        with_timeout(self.config.operation_timeout_duration(), "health check", async {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;
            Ok(())
        })
        .await
    }

    async fn init_schema(&self) -> AppResult<()> {
        with_timeout(
            self.config.connection_timeout_duration(),
            "schema initialization",
            super::schema::init_schema(&self.pool),
        )
        .await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        tracing::info!("disconnected from SQLite");
        Ok(())
    }
}

#[async_trait]
impl ProductBackend for SqliteBackend {
    async fn create_product(&self, input: &ProductInput) -> AppResult<Product> {
        self.product_ops.create_product(input).await
    }

    async fn find_product_by_id(&self, id: i64) -> AppResult<Product> {
        self.product_ops.find_product_by_id(id).await
    }

    async fn update_product(&self, id: i64, input: &ProductInput) -> AppResult<Product> {
        self.product_ops.update_product(id, input).await
    }

    async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.product_ops.delete_product(id).await
    }

    async fn list_products(&self, pagination: Pagination) -> AppResult<Vec<Product>> {
        self.product_ops.list_products(pagination).await
    }

    async fn delete_all_products(&self) -> AppResult<u64> {
        self.product_ops.delete_all_products().await
    }
}

#[async_trait]
impl UserBackend for SqliteBackend {
    async fn create_user(&self, input: &UserInput) -> AppResult<User> {
        self.user_ops.create_user(input).await
    }

    async fn find_user_by_id(&self, id: i64) -> AppResult<User> {
        self.user_ops.find_user_by_id(id).await
    }

    async fn update_user(&self, id: i64, input: &UserInput) -> AppResult<User> {
        self.user_ops.update_user(id, input).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.user_ops.delete_user(id).await
    }

    async fn list_users(&self, pagination: Pagination) -> AppResult<Vec<User>> {
        self.user_ops.list_users(pagination).await
    }
}
