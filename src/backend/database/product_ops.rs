use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use super::with_timeout;
use crate::error::{AppError, AppResult};
use crate::models::{Pagination, Product, ProductInput};

/// Column list shared by every product SELECT/RETURNING clause
pub const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category, brand, model, color, warranty_months, created_at, updated_at";

/// Validated and normalized product fields ready for INSERT/UPDATE
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedProductData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub warranty_months: Option<i32>,
    pub timestamp: DateTime<Utc>,
}

/// Database-specific adapter for product statements
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn execute_product_insert(&self, data: PreparedProductData) -> AppResult<Product>;

    async fn fetch_product(&self, id: i64) -> AppResult<Option<Product>>;

    /// Returns `None` when no row has this identifier
    async fn execute_product_update(
        &self,
        id: i64,
        data: PreparedProductData,
    ) -> AppResult<Option<Product>>;

    /// Returns whether a row was deleted
    async fn execute_product_delete(&self, id: i64) -> AppResult<bool>;

    async fn fetch_products(&self, pagination: Pagination) -> AppResult<Vec<Product>>;

    async fn execute_product_delete_all(&self) -> AppResult<u64>;
}

/// Shared business logic for product writes
pub struct ProductProcessor;

impl ProductProcessor {
    pub fn prepare_product(input: &ProductInput) -> AppResult<PreparedProductData> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Product name cannot be empty".to_string(),
            ));
        }

        Ok(PreparedProductData {
            name: name.to_string(),
            description: input
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            price: input.price,
            quantity: input.quantity,
            category: non_blank(&input.category),
            brand: non_blank(&input.brand),
            model: non_blank(&input.model),
            color: non_blank(&input.color),
            warranty_months: input.warranty_months,
            timestamp: Utc::now(),
        })
    }

    pub fn validate_product_id(id: i64) -> AppResult<()> {
        if id <= 0 {
            return Err(AppError::InvalidId(format!("Invalid product ID: {}", id)));
        }
        Ok(())
    }

    pub fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("Product with ID {} not found", id))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Unified product operations using the adapter pattern
pub struct UnifiedProductOps<T: ProductStore> {
    store: T,
    timeout: Duration,
}

impl<T: ProductStore> UnifiedProductOps<T> {
    pub fn new(store: T, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn create_product(&self, input: &ProductInput) -> AppResult<Product> {
        let prepared = ProductProcessor::prepare_product(input)?;
        let product = with_timeout(
            self.timeout,
            "create product",
            self.store.execute_product_insert(prepared),
        )
        .await?;

        tracing::debug!("created {}", product.debug_summary());
        Ok(product)
    }

    pub async fn find_product_by_id(&self, id: i64) -> AppResult<Product> {
        ProductProcessor::validate_product_id(id)?;

        with_timeout(self.timeout, "find product", self.store.fetch_product(id))
            .await?
            .ok_or_else(|| ProductProcessor::not_found(id))
    }

    pub async fn update_product(&self, id: i64, input: &ProductInput) -> AppResult<Product> {
        ProductProcessor::validate_product_id(id)?;
        let prepared = ProductProcessor::prepare_product(input)?;

        with_timeout(
            self.timeout,
            "update product",
            self.store.execute_product_update(id, prepared),
        )
        .await?
        .ok_or_else(|| ProductProcessor::not_found(id))
    }

    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        ProductProcessor::validate_product_id(id)?;

        let deleted = with_timeout(
            self.timeout,
            "delete product",
            self.store.execute_product_delete(id),
        )
        .await?;

        if deleted {
            Ok(())
        } else {
            Err(ProductProcessor::not_found(id))
        }
    }

    pub async fn list_products(&self, pagination: Pagination) -> AppResult<Vec<Product>> {
        with_timeout(
            self.timeout,
            "list products",
            self.store.fetch_products(pagination),
        )
        .await
    }

    pub async fn delete_all_products(&self) -> AppResult<u64> {
        let deleted = with_timeout(
            self.timeout,
            "delete all products",
            self.store.execute_product_delete_all(),
        )
        .await?;

        tracing::info!(deleted, "deleted all products");
        Ok(deleted)
    }
}
