use async_trait::async_trait;
use sqlx::PgPool;

use super::super::map_database_error;
use super::super::user_ops::{PreparedUserData, UserStore, USER_COLUMNS};
use crate::error::AppResult;
use crate::models::{Pagination, User, USER_TABLE_NAME};

/// PostgreSQL-specific implementation of UserStore
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User> {
        let sql = format!(
            "INSERT INTO {} (name, email, password_hash, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING {}",
            USER_TABLE_NAME, USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.timestamp)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "create user"))
    }

    async fn fetch_user(&self, id: i64) -> AppResult<Option<User>> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", USER_COLUMNS, USER_TABLE_NAME);

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "find user"))
    }

    async fn execute_user_update(
        &self,
        id: i64,
        data: PreparedUserData,
    ) -> AppResult<Option<User>> {
        let sql = format!(
            "UPDATE {} SET name = $1, email = $2, password_hash = $3, updated_at = $4 \
             WHERE id = $5 RETURNING {}",
            USER_TABLE_NAME, USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.timestamp)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "update user"))
    }

    async fn execute_user_delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", USER_TABLE_NAME);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_users(&self, pagination: Pagination) -> AppResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC LIMIT $1 OFFSET $2",
            USER_COLUMNS, USER_TABLE_NAME
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "list users"))
    }
}
