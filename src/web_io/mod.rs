//! Transport-neutral request/response envelopes and the error classifier.
//!
//! Route handlers build a `WebRequest` from whatever the transport hands them, pass it to the
//! matching `web_io` function together with a use case, and get back a `WebResponse`. This is
//! the only place that knows how a failure kind maps onto an external status category.

pub mod tasks;
pub mod todos;
pub mod users;

use actix_web::{http::StatusCode, HttpResponse};
use log::error;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, ErrorKind};

const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Inbound envelope: statically typed body, optional route parameter and the caller identity
/// resolved by the authentication middleware (empty for anonymous callers).
#[derive(Debug)]
pub struct WebRequest<B> {
    pub body: Option<B>,
    pub param: Option<String>,
    pub auth_user_id: String,
}

impl<B> WebRequest<B> {
    pub fn new(body: Option<B>, param: Option<String>, auth_user_id: impl Into<String>) -> Self {
        Self {
            body,
            param,
            auth_user_id: auth_user_id.into(),
        }
    }
}

/// External outcome categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    ServerError,
}

impl StatusCategory {
    pub fn status_code(self) -> StatusCode {
        match self {
            StatusCategory::Ok => StatusCode::OK,
            StatusCategory::Created => StatusCode::CREATED,
            StatusCategory::NoContent => StatusCode::NO_CONTENT,
            StatusCategory::BadRequest => StatusCode::BAD_REQUEST,
            StatusCategory::Unauthorized => StatusCode::UNAUTHORIZED,
            StatusCategory::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(
            self,
            StatusCategory::Ok | StatusCategory::Created | StatusCategory::NoContent
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Body(Value),
    Message(String),
    Empty,
}

/// Outbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct WebResponse {
    pub status: StatusCategory,
    pub payload: Payload,
}

impl WebResponse {
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            status: StatusCategory::Created,
            payload: Payload::Message(message.into()),
        }
    }

    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCategory::Ok,
            payload: Payload::Message(message.into()),
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status: StatusCategory::Ok,
                payload: Payload::Body(value),
            },
            Err(e) => Self::from_error(&AppError::Internal(format!(
                "Failed to serialize response body: {}",
                e
            ))),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: StatusCategory::NoContent,
            payload: Payload::Empty,
        }
    }

    /// A found collection: no content when empty, ok with the items otherwise.
    pub fn found<T: Serialize>(items: &[T]) -> Self {
        if items.is_empty() {
            Self::no_content()
        } else {
            Self::ok(&items)
        }
    }

    /// Maps a failure onto its external category. Unclassified failures are logged here and
    /// their detail is withheld from the caller.
    pub fn from_error(err: &AppError) -> Self {
        let (status, message) = match err.kind() {
            ErrorKind::Auth => (StatusCategory::Unauthorized, "Unauthorized".to_string()),
            ErrorKind::Validation
            | ErrorKind::NotFound
            | ErrorKind::Ownership
            | ErrorKind::Conflict => (StatusCategory::BadRequest, err.to_string()),
            ErrorKind::Unclassified => {
                error!("Unclassified failure: {:?}", err);
                (StatusCategory::ServerError, SERVER_ERROR_MESSAGE.to_string())
            }
        };
        Self {
            status,
            payload: Payload::Message(message),
        }
    }

    /// Converts a use-case outcome into a response, using `on_success` for the success value.
    pub fn classify<T, F>(outcome: Result<T, AppError>, on_success: F) -> Self
    where
        F: FnOnce(T) -> WebResponse,
    {
        match outcome {
            Ok(value) => on_success(value),
            Err(err) => Self::from_error(&err),
        }
    }
}

impl From<WebResponse> for HttpResponse {
    fn from(response: WebResponse) -> Self {
        let mut builder = HttpResponse::build(response.status.status_code());
        match response.payload {
            Payload::Empty => builder.finish(),
            Payload::Body(body) => builder.json(body),
            Payload::Message(message) if response.status.is_success() => {
                builder.json(json!({ "message": message }))
            }
            Payload::Message(message) => builder.json(json!({ "error": message })),
        }
    }
}
