use super::{PasswordAlgorithm, PasswordHasher};
use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash,
    PasswordHasher as Argon2PasswordHasher, PasswordVerifier, Version,
};

/// Argon2id password hasher.
///
/// `Params::default()` is the OWASP baseline: 19 MiB of memory, 2 iterations,
/// 1 degree of parallelism.
pub struct Argon2idHasher {
    argon2: Argon2<'static>,
}

impl Argon2idHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }

    fn generate_salt(&self) -> SaltString {
        SaltString::generate(&mut rand::thread_rng())
    }
}

impl Default for Argon2idHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2idHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = self.generate_salt();

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                AppError::Internal(format!("Failed to hash password with Argon2id: {}", e))
            })?;

        Ok(password_hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Failed to parse Argon2id hash: {}", e)))?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::Internal(format!(
                "Failed to verify Argon2id password: {}",
                e
            ))),
        }
    }

    fn is_hash(&self, value: &str) -> bool {
        value.starts_with("$argon2id$") && PasswordHash::new(value).is_ok()
    }

    fn algorithm(&self) -> PasswordAlgorithm {
        PasswordAlgorithm::Argon2id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2id_hash_and_verify() {
        let hasher = Argon2idHasher::new();
        let password = "warehouse-secret";

        let hash = hasher.hash_password(password).unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.is_hash(&hash));
        assert!(hasher.verify_password(password, &hash).unwrap());
        assert!(!hasher.verify_password("wrong-secret", &hash).unwrap());
    }

    #[test]
    fn test_argon2id_is_hash() {
        let hasher = Argon2idHasher::new();

        assert!(!hasher.is_hash("not-a-hash"));
        assert!(!hasher.is_hash("$2b$12$example"));
        assert!(!hasher.is_hash("plain text password"));
    }

    #[test]
    fn test_argon2id_different_salts() {
        let hasher = Argon2idHasher::new();
        let password = "same-secret-1";

        let hash1 = hasher.hash_password(password).unwrap();
        let hash2 = hasher.hash_password(password).unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password(password, &hash1).unwrap());
        assert!(hasher.verify_password(password, &hash2).unwrap());
    }
}
