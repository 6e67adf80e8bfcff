use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{required_text, well_formed_id, Owned};

pub const NAME_MAX_LENGTH: u64 = 100;
pub const DESCRIPTION_MAX_LENGTH: u64 = 500;

/// A task as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Identifier of the owning user.
    pub user_id: String,
}

/// Input for creating or updating a task.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    pub name: String,
    pub description: String,
}

impl Owned for Task {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Task {
    /// Creates a new `Task` owned by `user_id` with a fresh id.
    pub fn new(input: TaskInput, user_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            user_id: user_id.to_string(),
        }
    }

    pub fn validate_id(id: Option<&str>) -> Result<&str, AppError> {
        well_formed_id(id).ok_or_else(|| AppError::InvalidTask("Invalid task id".into()))
    }

    pub fn validate_name(name: &str) -> Result<(), AppError> {
        required_text(name, "Task name", NAME_MAX_LENGTH).map_err(AppError::InvalidTask)
    }

    pub fn validate_description(description: &str) -> Result<(), AppError> {
        required_text(description, "Task description", DESCRIPTION_MAX_LENGTH)
            .map_err(AppError::InvalidTask)
    }

    /// Validates a whole request body; a missing body is itself a validation failure.
    pub fn validate_input(input: Option<TaskInput>) -> Result<TaskInput, AppError> {
        let input = input.ok_or_else(|| AppError::InvalidTask("Request body is missing".into()))?;
        Self::validate_name(&input.name)?;
        Self::validate_description(&input.description)?;
        Ok(input)
    }
}
