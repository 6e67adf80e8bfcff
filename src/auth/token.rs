use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Represents the claims encoded within a token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: String,
    /// Optional expiration timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Claims for `user_id`, expiring after `ttl_seconds` when a lifetime is configured.
    pub fn for_user(user_id: &str, ttl_seconds: Option<i64>) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: ttl_seconds.map(|ttl| chrono::Utc::now().timestamp() + ttl),
        }
    }
}

/// Signs and verifies HS256 tokens with a secret injected at construction.
///
/// Encoding is deterministic: the same secret and the same claims always produce the same
/// token. Tokens without an `exp` claim never expire; tokens with one are rejected once it
/// has passed.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: Option<i64>,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl_seconds: Option<i64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> Option<i64> {
        self.ttl_seconds
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Mints a token for `user_id` using the configured lifetime.
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        self.encode(&Claims::for_user(user_id, self.ttl_seconds))
    }

    /// Fails with `AppError::MalformedToken` when the token is malformed, its signature does
    /// not verify, or it has expired.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
