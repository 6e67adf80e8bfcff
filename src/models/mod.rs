//! Domain entities, route-specific input structs and the pure validators that guard them.
//!
//! Nothing in this module touches persistence, so every check here can run before the first
//! data-access call.

pub mod task;
pub mod todo;
pub mod user;

use lazy_static::lazy_static;
use regex::Regex;
use validator::validate_length;

use crate::error::AppError;

pub use task::{Task, TaskInput};
pub use todo::{CreateTodoInput, Todo, UpdateTodoInput};
pub use user::{AuthResponse, SignInRequest, SignUpRequest, User};

lazy_static! {
    // Entity ids: 1 to 64 characters, alphanumeric, underscores or hyphens (UUIDs qualify).
    static ref ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap();
}

/// Returns the id when it is present and well formed.
pub(crate) fn well_formed_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| ID_REGEX.is_match(id))
}

/// Checks a required free-text field: non-blank and at most `max` characters once trimmed.
/// `field` is used verbatim in the failure reason.
pub(crate) fn required_text(value: &str, field: &str, max: u64) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    if !validate_length(value, None, Some(max), None) {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

/// A resource with exactly one owning user.
pub trait Owned {
    fn owner_id(&self) -> &str;
}

/// The only authorization rule: the caller must own the resource.
pub fn check_ownership<R: Owned + ?Sized>(resource: &R, auth_user_id: &str) -> Result<(), AppError> {
    if resource.owner_id() != auth_user_id {
        return Err(AppError::NotResourceOwner);
    }
    Ok(())
}
