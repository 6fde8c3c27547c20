use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::core::error::{AppError, AppResult};

/// Argon2 password hashing with the crate's default cost parameters.
pub struct CryptoService {
    argon2: Argon2<'static>,
}

impl CryptoService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a password into a salted PHC string.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        Ok(password_hash.to_string())
    }

    /// Check a candidate password against a stored hash.
    ///
    /// Returns `AppError::Mismatch` for a wrong password and `AppError::Hash`
    /// when the stored value is not a valid PHC string.
    pub fn verify_password(&self, hashed: &str, candidate: &str) -> AppResult<()> {
        let parsed_hash = PasswordHash::new(hashed)
            .map_err(|e| AppError::Hash(format!("Invalid password hash: {}", e)))?;

        self.argon2
            .verify_password(candidate.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                argon2::password_hash::Error::Password => AppError::Mismatch,
                other => AppError::Hash(other.to_string()),
            })
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_hash_is_not_plaintext() {
        let crypto = CryptoService::new();
        let hash = crypto.hash_password("secret").unwrap();

        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let crypto = CryptoService::new();
        let first = crypto.hash_password("secret").unwrap();
        let second = crypto.hash_password("secret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_roundtrip() {
        let crypto = CryptoService::new();
        let hash = crypto.hash_password("correct horse").unwrap();

        assert_ok!(crypto.verify_password(&hash, "correct horse"));
    }

    #[test]
    fn test_verify_wrong_password() {
        let crypto = CryptoService::new();
        let hash = crypto.hash_password("correct horse").unwrap();

        for candidate in ["", "correct", "correct horse ", "Correct horse"] {
            let err = assert_err!(crypto.verify_password(&hash, candidate));
            assert!(matches!(err, AppError::Mismatch));
        }
    }

    #[test]
    fn test_verify_invalid_hash() {
        let crypto = CryptoService::new();
        let err = assert_err!(crypto.verify_password("plaintext", "plaintext"));

        assert!(matches!(err, AppError::Hash(_)));
    }

    #[test]
    fn test_empty_password_hashes() {
        let crypto = CryptoService::new();
        let hash = crypto.hash_password("").unwrap();

        assert_ok!(crypto.verify_password(&hash, ""));
    }
}
