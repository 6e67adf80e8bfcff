use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{required_text, well_formed_id, Owned};

pub const NAME_MAX_LENGTH: u64 = 100;
pub const DESCRIPTION_MAX_LENGTH: u64 = 500;

/// A todo item, optionally attached to a parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_done: bool,
    /// Identifier of the owning user.
    pub user_id: String,
    pub task_id: Option<String>,
}

/// Payload for `POST /api/todos`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTodoInput {
    pub name: String,
    pub description: String,
    pub task_id: Option<String>,
}

/// Payload for `PUT /api/todos/{id}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTodoInput {
    pub name: String,
    pub description: String,
    pub is_done: bool,
}

impl Owned for Todo {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Todo {
    /// New todos start out not done.
    pub fn new(input: CreateTodoInput, user_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            is_done: false,
            user_id: user_id.to_string(),
            task_id: input.task_id,
        }
    }

    pub fn validate_id(id: Option<&str>) -> Result<&str, AppError> {
        well_formed_id(id).ok_or_else(|| AppError::InvalidTodo("Invalid todo id".into()))
    }

    pub fn validate_name(name: &str) -> Result<(), AppError> {
        required_text(name, "Todo name", NAME_MAX_LENGTH).map_err(AppError::InvalidTodo)
    }

    pub fn validate_description(description: &str) -> Result<(), AppError> {
        required_text(description, "Todo description", DESCRIPTION_MAX_LENGTH)
            .map_err(AppError::InvalidTodo)
    }

    pub fn validate_create_input(input: Option<CreateTodoInput>) -> Result<CreateTodoInput, AppError> {
        let input = input.ok_or_else(|| AppError::InvalidTodo("Request body is missing".into()))?;
        Self::validate_name(&input.name)?;
        Self::validate_description(&input.description)?;
        Ok(input)
    }

    pub fn validate_update_input(input: Option<UpdateTodoInput>) -> Result<UpdateTodoInput, AppError> {
        let input = input.ok_or_else(|| AppError::InvalidTodo("Request body is missing".into()))?;
        Self::validate_name(&input.name)?;
        Self::validate_description(&input.description)?;
        Ok(input)
    }
}
