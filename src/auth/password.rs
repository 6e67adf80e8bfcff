use crate::error::AppError;
use bcrypt::{hash, verify};

/// Password hashing capability consumed by the sign-up and sign-in use cases.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
    fn matches(&self, plain: &str, digest: &str) -> Result<bool, AppError>;
}

/// bcrypt with a configurable cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        hash(plain, self.cost)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn matches(&self, plain: &str, digest: &str) -> Result<bool, AppError> {
        verify(plain, digest)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BCRYPT_MIN_COST;

    fn fast_hasher() -> BcryptHasher {
        BcryptHasher::new(BCRYPT_MIN_COST)
    }

    #[test]
    fn test_password_hashing_and_verification() {
        let hasher = fast_hasher();
        let password = "test_password123";
        let hashed = hasher.hash(password).unwrap();

        assert_ne!(hashed, password);
        assert!(hasher.matches(password, &hashed).unwrap());
        assert!(!hasher.matches("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_verify_with_invalid_hash() {
        match fast_hasher().matches("test_password123", "invalidhashformat") {
            Err(AppError::Internal(msg)) => assert!(msg.contains("Failed to verify password")),
            Ok(false) => {}
            Ok(true) => panic!("Password verification should fail for invalid hash format"),
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }
}
