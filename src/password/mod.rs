use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
/// bcrypt ignores everything past this many bytes
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing algorithm types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    /// bcrypt, kept for deployments that already standardised on it
    Bcrypt,
    /// Argon2id (OWASP recommended)
    #[default]
    Argon2id,
}

impl std::fmt::Display for PasswordAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bcrypt => write!(f, "bcrypt"),
            Self::Argon2id => write!(f, "Argon2id"),
        }
    }
}

/// Abstract trait for password hashing algorithms
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verify a plaintext password against a hash
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;

    /// Check if a string is a hash created by this algorithm
    fn is_hash(&self, value: &str) -> bool;

    /// Get the algorithm identifier
    fn algorithm(&self) -> PasswordAlgorithm;
}

pub mod argon2_hasher;
pub mod bcrypt_hasher;

pub use argon2_hasher::Argon2idHasher;
pub use bcrypt_hasher::BcryptHasher;

/// Hashes user passwords before they reach the store
pub struct PasswordManager {
    current_algorithm: PasswordAlgorithm,
    hashers: Vec<Box<dyn PasswordHasher>>,
}

impl Default for PasswordManager {
    fn default() -> Self {
        Self::new(PasswordAlgorithm::default())
    }
}

impl PasswordManager {
    pub fn new(default_algorithm: PasswordAlgorithm) -> Self {
        let hashers: Vec<Box<dyn PasswordHasher>> = vec![
            Box::new(BcryptHasher::new()),
            Box::new(Argon2idHasher::new()),
        ];

        Self {
            current_algorithm: default_algorithm,
            hashers,
        }
    }

    /// Replace the bcrypt hasher with one using `cost`
    pub fn with_bcrypt_cost(mut self, cost: u32) -> AppResult<Self> {
        let bcrypt = BcryptHasher::with_cost(cost)?;
        self.hashers
            .retain(|h| h.algorithm() != PasswordAlgorithm::Bcrypt);
        self.hashers.push(Box::new(bcrypt));
        Ok(self)
    }

    /// Hash a plaintext password using the current algorithm
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        self.validate_password(password)?;

        let hasher = self
            .hashers
            .iter()
            .find(|h| h.algorithm() == self.current_algorithm)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Hasher not found for algorithm: {}",
                    self.current_algorithm
                ))
            })?;

        hasher.hash_password(password)
    }

    /// Verify a plaintext password against any supported hash format
    pub fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        for hasher in &self.hashers {
            if hasher.is_hash(hash) {
                return hasher.verify_password(password, hash);
            }
        }

        Err(AppError::BadRequest("Unsupported hash format".to_string()))
    }

    /// Detect the algorithm used for a given hash
    pub fn detect_algorithm(&self, hash: &str) -> Option<PasswordAlgorithm> {
        self.hashers
            .iter()
            .find(|hasher| hasher.is_hash(hash))
            .map(|hasher| hasher.algorithm())
    }

    pub fn validate_password(&self, password: &str) -> AppResult<()> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        if password.len() > MAX_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be no more than {} characters long",
                MAX_PASSWORD_LENGTH
            )));
        }

        if self.current_algorithm == PasswordAlgorithm::Bcrypt
            && password.len() > BCRYPT_MAX_PASSWORD_BYTES
        {
            return Err(AppError::BadRequest(format!(
                "Password must be no more than {} bytes long",
                BCRYPT_MAX_PASSWORD_BYTES
            )));
        }

        Ok(())
    }

    pub fn current_algorithm(&self) -> PasswordAlgorithm {
        self.current_algorithm
    }
}
