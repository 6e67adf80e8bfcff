//!
//! # Domain Error Handling
//!
//! This module defines `AppError`, the single failure type raised by every step of the
//! request pipeline (authentication, structural validation, existence and ownership checks,
//! and the final action). Each variant is one failure kind; `AppError::kind` collapses the
//! variants into the small `ErrorKind` tag set that the web layer classifies.
//!
//! `AppError` implements `actix_web::error::ResponseError` by delegating to the classifier in
//! `crate::web_io`, so errors raised outside a use case (for example by the authentication
//! middleware) produce exactly the same external response as errors raised inside one.
//! `From` implementations for `sqlx::Error`, `jsonwebtoken::errors::Error` and
//! `bcrypt::BcryptError` let infrastructure calls use the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

use crate::web_io::WebResponse;

/// Every failure the pipeline can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The `Authorization` header is present but unusable, or the token subject is malformed.
    InvalidAuth(String),
    /// The token could not be parsed or verified (bad shape, bad signature, expired).
    MalformedToken(String),
    /// A user field or user id failed structural validation.
    InvalidUser(String),
    /// A task field or task id failed structural validation.
    InvalidTask(String),
    /// A todo field or todo id failed structural validation.
    InvalidTodo(String),
    UserNotFound,
    TaskNotFound,
    TodoNotFound,
    /// The resource exists but belongs to someone else.
    NotResourceOwner,
    EmailAlreadyTaken,
    PasswordAndHashNotMatch,
    /// A failure reported by the persistence layer.
    Database(String),
    /// Any other unexpected failure.
    Internal(String),
}

/// The tag set the classifier matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Auth,
    Validation,
    NotFound,
    Ownership,
    Conflict,
    Unclassified,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidAuth(_) | AppError::MalformedToken(_) => ErrorKind::Auth,
            AppError::InvalidUser(_) | AppError::InvalidTask(_) | AppError::InvalidTodo(_) => {
                ErrorKind::Validation
            }
            AppError::UserNotFound | AppError::TaskNotFound | AppError::TodoNotFound => {
                ErrorKind::NotFound
            }
            AppError::NotResourceOwner => ErrorKind::Ownership,
            AppError::EmailAlreadyTaken | AppError::PasswordAndHashNotMatch => ErrorKind::Conflict,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Unclassified,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidAuth(msg) => write!(f, "Invalid authorization: {}", msg),
            AppError::MalformedToken(msg) => write!(f, "Malformed token: {}", msg),
            AppError::InvalidUser(msg) => write!(f, "{}", msg),
            AppError::InvalidTask(msg) => write!(f, "{}", msg),
            AppError::InvalidTodo(msg) => write!(f, "{}", msg),
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::TaskNotFound => write!(f, "Task not found"),
            AppError::TodoNotFound => write!(f, "Todo not found"),
            AppError::NotResourceOwner => write!(f, "Not the resource owner"),
            AppError::EmailAlreadyTaken => write!(f, "Email already taken"),
            AppError::PasswordAndHashNotMatch => write!(f, "Password and hash do not match"),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `AppError` into an HTTP response through the same classifier the use cases use.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        WebResponse::from_error(self).status.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        WebResponse::from_error(self).into()
    }
}

/// Every `sqlx` failure is unclassified; "not found" is decided by the use cases from
/// `Option` results, never from `RowNotFound`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::Database(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::MalformedToken(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
