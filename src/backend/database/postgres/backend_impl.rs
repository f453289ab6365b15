use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::super::config::DatabaseBackendConfig;
use super::{PostgresProductStore, PostgresUserStore};
use crate::backend::database::{with_timeout, UnifiedProductOps, UnifiedUserOps};
use crate::backend::{Backend, ProductBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Pagination, Product, ProductInput, User, UserInput};
use crate::password::PasswordManager;

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    config: DatabaseBackendConfig,
    product_ops: UnifiedProductOps<PostgresProductStore>,
    user_ops: UnifiedUserOps<PostgresUserStore>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(
        pool: PgPool,
        config: &DatabaseBackendConfig,
        password_manager: PasswordManager,
    ) -> Self {
        let timeout = config.operation_timeout_duration();

        Self {
            product_ops: UnifiedProductOps::new(PostgresProductStore::new(pool.clone()), timeout),
            user_ops: UnifiedUserOps::new(
                PostgresUserStore::new(pool.clone()),
                password_manager,
                timeout,
            ),
            config: config.clone(),
            pool,
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;
        let password_manager = config.password_manager()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout_duration())
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to PostgreSQL"
        );
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
        tracing::info!("disconnected from PostgreSQL");
        Ok(())
    }
}

#[async_trait]
impl ProductBackend for PostgresBackend {
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
impl UserBackend for PostgresBackend {
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
