//! Data-access capabilities consumed by the use cases.
//!
//! The use cases only ever see these traits; the host decides what backs them. `postgres`
//! holds the `sqlx` implementations used by the binary.

pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Task, TaskInput, Todo, UpdateTodoInput, User};

pub use postgres::{PgTaskDataAccess, PgTodoDataAccess, PgUserDataAccess};

#[async_trait]
pub trait UserDataAccess: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;
    async fn create(&self, user: &User) -> Result<(), AppError>;
}

#[async_trait]
pub trait TaskDataAccess: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError>;
    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Task>, AppError>;
    async fn create(&self, task: &Task) -> Result<(), AppError>;
    async fn update(&self, id: &str, patch: &TaskInput) -> Result<(), AppError>;
}

#[async_trait]
pub trait TodoDataAccess: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, AppError>;
    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Todo>, AppError>;
    async fn find_by_task_id(&self, task_id: &str) -> Result<Vec<Todo>, AppError>;
    async fn create(&self, todo: &Todo) -> Result<(), AppError>;
    async fn update(&self, id: &str, patch: &UpdateTodoInput) -> Result<(), AppError>;
}
