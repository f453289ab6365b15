use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use std::sync::Arc;
use std::time::Duration;

use super::with_timeout;
use crate::error::{AppError, AppResult};
use crate::models::{Pagination, User, UserInput};
use crate::password::PasswordManager;

pub const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// User fields ready for storage; the password is already hashed
#[derive(Debug, Clone)]
pub struct PreparedUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub timestamp: DateTime<Utc>,
}

/// Database-specific adapter for user statements
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn execute_user_insert(&self, data: PreparedUserData) -> AppResult<User>;

    async fn fetch_user(&self, id: i64) -> AppResult<Option<User>>;

    async fn execute_user_update(&self, id: i64, data: PreparedUserData)
        -> AppResult<Option<User>>;

    async fn execute_user_delete(&self, id: i64) -> AppResult<bool>;

    async fn fetch_users(&self, pagination: Pagination) -> AppResult<Vec<User>>;
}

/// Shared business logic for user writes
pub struct UserProcessor;

impl UserProcessor {
    /// Validate the payload and hash the password.
    ///
    /// Emails are stored lower-cased so the UNIQUE index is case-insensitive.
    pub async fn prepare_user(
        input: &UserInput,
        password_manager: &Arc<PasswordManager>,
    ) -> AppResult<PreparedUserData> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("User name cannot be empty".to_string()));
        }

        let email = input.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(AppError::BadRequest(format!(
                "Invalid email address: {}",
                input.email
            )));
        }

        let password_hash = Self::hash_password(password_manager, &input.password).await?;

        Ok(PreparedUserData {
            name: name.to_string(),
            email,
            password_hash,
            timestamp: Utc::now(),
        })
    }

    /// Hash on the blocking pool; Argon2id and bcrypt are CPU-bound
    async fn hash_password(
        password_manager: &Arc<PasswordManager>,
        password: &str,
    ) -> AppResult<String> {
        password_manager.validate_password(password)?;

        let manager = Arc::clone(password_manager);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || manager.hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    pub fn validate_user_id(id: i64) -> AppResult<()> {
        if id <= 0 {
            return Err(AppError::InvalidId(format!("Invalid user ID: {}", id)));
        }
        Ok(())
    }

    pub fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("User with ID {} not found", id))
    }
}

/// Unified user operations using the adapter pattern
pub struct UnifiedUserOps<T: UserStore> {
    store: T,
    password_manager: Arc<PasswordManager>,
    timeout: Duration,
}

impl<T: UserStore> UnifiedUserOps<T> {
    pub fn new(store: T, password_manager: PasswordManager, timeout: Duration) -> Self {
        Self {
            store,
            password_manager: Arc::new(password_manager),
            timeout,
        }
    }

    pub async fn create_user(&self, input: &UserInput) -> AppResult<User> {
        let prepared = UserProcessor::prepare_user(input, &self.password_manager).await?;

        with_timeout(
            self.timeout,
            "create user",
            self.store.execute_user_insert(prepared),
        )
        .await
    }

    pub async fn find_user_by_id(&self, id: i64) -> AppResult<User> {
        UserProcessor::validate_user_id(id)?;

        with_timeout(self.timeout, "find user", self.store.fetch_user(id))
            .await?
            .ok_or_else(|| UserProcessor::not_found(id))
    }

    pub async fn update_user(&self, id: i64, input: &UserInput) -> AppResult<User> {
        UserProcessor::validate_user_id(id)?;
        let prepared = UserProcessor::prepare_user(input, &self.password_manager).await?;

        with_timeout(
            self.timeout,
            "update user",
            self.store.execute_user_update(id, prepared),
        )
        .await?
        .ok_or_else(|| UserProcessor::not_found(id))
    }

    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        UserProcessor::validate_user_id(id)?;

        let deleted = with_timeout(
            self.timeout,
            "delete user",
            self.store.execute_user_delete(id),
        )
        .await?;

        if deleted {
            Ok(())
        } else {
            Err(UserProcessor::not_found(id))
        }
    }

    pub async fn list_users(&self, pagination: Pagination) -> AppResult<Vec<User>> {
        with_timeout(self.timeout, "list users", self.store.fetch_users(pagination)).await
    }
}
