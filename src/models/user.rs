use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{validate_email as is_valid_email, validate_length};

use crate::error::AppError;
use crate::models::well_formed_id;

pub const PASSWORD_MIN_LENGTH: u64 = 6;
pub const PASSWORD_MAX_LENGTH: u64 = 100;
/// bcrypt ignores everything past this many bytes.
pub const PASSWORD_MAX_BYTES: usize = 72;
pub const NAME_MAX_LENGTH: u64 = 100;

/// A registered user. The password hash is opaque to the pipeline and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}

/// Payload for `POST /api/users`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Payload for `POST /api/users/signin`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The signed token to send back as `Authorization: Bearer <token>`.
    pub token: String,
    pub user_id: String,
}

impl User {
    /// Builds a new user with a fresh id from an already validated sign-up request.
    pub fn new(request: SignUpRequest, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            password_hash,
        }
    }

    pub fn validate_id(id: Option<&str>) -> Result<&str, AppError> {
        well_formed_id(id).ok_or_else(|| AppError::InvalidUser("Invalid user id".into()))
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidUser("Email is required".into()));
        }
        if !is_valid_email(email) {
            return Err(AppError::InvalidUser("Email is not valid".into()));
        }
        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), AppError> {
        if !validate_length(
            password,
            Some(PASSWORD_MIN_LENGTH),
            Some(PASSWORD_MAX_LENGTH),
            None,
        ) {
            return Err(AppError::InvalidUser(format!(
                "Password must be between {} and {} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            )));
        }
        if password.len() > PASSWORD_MAX_BYTES {
            return Err(AppError::InvalidUser(format!(
                "Password must be at most {} bytes",
                PASSWORD_MAX_BYTES
            )));
        }
        Ok(())
    }

    pub fn validate_name(name: Option<&str>) -> Result<(), AppError> {
        match name {
            Some(name) if !validate_length(name, None, Some(NAME_MAX_LENGTH), None) => {
                Err(AppError::InvalidUser(format!(
                    "Name must be at most {} characters",
                    NAME_MAX_LENGTH
                )))
            }
            _ => Ok(()),
        }
    }
}
