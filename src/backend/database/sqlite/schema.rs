use crate::error::{AppError, AppResult};
use crate::models::{PRODUCT_TABLE_NAME, USER_TABLE_NAME};
use sqlx::SqlitePool;

/// Create the products and users tables if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let products_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL,
            quantity INTEGER NOT NULL,
            category TEXT,
            brand TEXT,
            model TEXT,
            color TEXT,
            warranty_months INTEGER,
            created_at DATETIME NOT NULL,
            updated_at DATETIME NOT NULL
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
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at DATETIME NOT NULL,
            updated_at DATETIME NOT NULL
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
#[cfg(test)]
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    for table in [PRODUCT_TABLE_NAME, USER_TABLE_NAME] {
        let sql = format!("DROP TABLE IF EXISTS {}", table);
        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", table, e)))?;
    }

    Ok(())
}
