use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::map_database_error;
use super::super::product_ops::{PreparedProductData, ProductStore, PRODUCT_COLUMNS};
use crate::error::AppResult;
use crate::models::{Pagination, Product, PRODUCT_TABLE_NAME};

/// SQLite-specific implementation of ProductStore
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn execute_product_insert(&self, data: PreparedProductData) -> AppResult<Product> {
        let sql = format!(
            "INSERT INTO {} (name, description, price, quantity, category, brand, model, color, warranty_months, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10) RETURNING {}",
            PRODUCT_TABLE_NAME, PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.price)
            .bind(data.quantity)
            .bind(&data.category)
            .bind(&data.brand)
            .bind(&data.model)
            .bind(&data.color)
            .bind(data.warranty_months)
            .bind(data.timestamp)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "create product"))
    }

    async fn fetch_product(&self, id: i64) -> AppResult<Option<Product>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            PRODUCT_COLUMNS, PRODUCT_TABLE_NAME
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "find product"))
    }

    async fn execute_product_update(
        &self,
        id: i64,
        data: PreparedProductData,
    ) -> AppResult<Option<Product>> {
        let sql = format!(
            "UPDATE {} SET name = ?1, description = ?2, price = ?3, quantity = ?4, category = ?5, \
             brand = ?6, model = ?7, color = ?8, warranty_months = ?9, updated_at = ?10 \
             WHERE id = ?11 RETURNING {}",
            PRODUCT_TABLE_NAME, PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.price)
            .bind(data.quantity)
            .bind(&data.category)
            .bind(&data.brand)
            .bind(&data.model)
            .bind(&data.color)
            .bind(data.warranty_months)
            .bind(data.timestamp)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "update product"))
    }

    async fn execute_product_delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", PRODUCT_TABLE_NAME);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "delete product"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_products(&self, pagination: Pagination) -> AppResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC LIMIT ?1 OFFSET ?2",
            PRODUCT_COLUMNS, PRODUCT_TABLE_NAME
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(pagination.limit)
            .bind(pagination.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "list products"))
    }

    async fn execute_product_delete_all(&self) -> AppResult<u64> {
        let sql = format!("DELETE FROM {}", PRODUCT_TABLE_NAME);

        let result = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "delete all products"))?;

        Ok(result.rows_affected())
    }
}
