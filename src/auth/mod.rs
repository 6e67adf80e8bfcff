pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use log::debug;

use crate::error::AppError;
use crate::models::User;

// Re-export necessary items
pub use extractors::AuthUserId;
pub use middleware::AuthMiddleware;
pub use password::{BcryptHasher, PasswordHasher};
pub use token::{Claims, TokenCodec};

/// The identity-verification endpoint; it must stay reachable for anonymous callers, so the
/// middleware leaves it alone.
pub const VERIFY_PATH: &str = "/api/users/verify";

/// Extracts the token segment from an `Authorization` value shaped `<scheme> <token>`.
pub fn bearer_token(header: &str) -> Result<&str, AppError> {
    let malformed = || AppError::InvalidAuth("Authorization header must be '<scheme> <token>'".into());
    let (scheme, token) = header.trim().split_once(' ').ok_or_else(malformed)?;
    let token = token.trim();
    if scheme.is_empty() || token.is_empty() || token.contains(char::is_whitespace) {
        return Err(malformed());
    }
    Ok(token)
}

/// Resolves the caller identity from an optional `Authorization` header value.
///
/// A missing or blank header resolves to the anonymous identity (empty string). A header that
/// is present but malformed, carries a token that does not verify, or whose subject is not a
/// well-formed user id fails with `AppError::InvalidAuth`.
pub fn resolve_caller(codec: &TokenCodec, header: Option<&str>) -> Result<String, AppError> {
    let header = match header {
        Some(header) if !header.trim().is_empty() => header,
        _ => return Ok(String::new()),
    };
    let token = bearer_token(header)?;
    let claims = codec.decode(token).map_err(|e| {
        debug!("Rejected bearer token: {}", e);
        AppError::InvalidAuth("Invalid token".into())
    })?;
    User::validate_id(Some(claims.sub.as_str()))
        .map_err(|_| AppError::InvalidAuth("Invalid token subject".into()))?;
    Ok(claims.sub)
}
