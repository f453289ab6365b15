use crate::error::{AppError, AppResult};
use crate::models::{PRODUCT_TABLE_NAME, USER_TABLE_NAME};
use sqlx::PgPool;

/// Create the products and users tables if they do not exist yet
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let products_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price DOUBLE PRECISION NOT NULL,
            quantity INTEGER NOT NULL,
            category TEXT,
            brand TEXT,
            model TEXT,
            color TEXT,
            warranty_months INTEGER,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
        PRODUCT_TABLE_NAME
    );

    sqlx::query(&products_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create products table: {}", e)))?;

    let users_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        )
        "#,
        USER_TABLE_NAME
    );

    sqlx::query(&users_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

    Ok(())
}

/// Drop both tables (for cleanup/testing)
pub async fn drop_schema(pool: &PgPool) -> AppResult<()> {
    for table in [PRODUCT_TABLE_NAME, USER_TABLE_NAME] {
        let sql = format!("DROP TABLE IF EXISTS {} CASCADE", table);
        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", table, e)))?;
    }

    Ok(())
}
