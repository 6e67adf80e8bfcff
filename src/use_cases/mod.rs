//! One orchestrator per operation.
//!
//! Every use case runs the same fixed order and stops at the first failure:
//!
//! 1. structural validation of ids and body fields,
//! 2. validation of the caller id,
//! 3. existence of the caller, then of the target resource,
//! 4. ownership of the target resource,
//! 5. the action itself, the only step with a durable side effect.
//!
//! Data access only starts at step 3, and ownership is only checked once the resource is
//! known to exist, so "not found" and "not yours" stay distinct failures.

pub mod tasks;
pub mod todos;
pub mod users;

use crate::data_access::{TaskDataAccess, TodoDataAccess, UserDataAccess};
use crate::error::AppError;
use crate::models::{Task, Todo, User};

pub use tasks::{CreateTaskUseCase, FindTaskByIdUseCase, FindTasksByUserIdUseCase, UpdateTaskUseCase};
pub use todos::{
    CreateTodoUseCase, FindTodoByIdUseCase, FindTodosByTaskIdUseCase, FindTodosByUserIdUseCase,
    UpdateTodoUseCase,
};
pub use users::{SignInUseCase, SignUpUseCase, VerifyUserUseCase};

/// The caller id is re-validated even though the middleware shaped it: anonymous callers
/// arrive here as an empty id.
fn validate_caller(auth_user_id: &str) -> Result<&str, AppError> {
    User::validate_id(Some(auth_user_id))
}

async fn check_user_exists(users: &dyn UserDataAccess, user_id: &str) -> Result<User, AppError> {
    users.find_by_id(user_id).await?.ok_or(AppError::UserNotFound)
}

async fn find_task(tasks: &dyn TaskDataAccess, task_id: &str) -> Result<Task, AppError> {
    tasks.find_by_id(task_id).await?.ok_or(AppError::TaskNotFound)
}

async fn find_todo(todos: &dyn TodoDataAccess, todo_id: &str) -> Result<Todo, AppError> {
    todos.find_by_id(todo_id).await?.ok_or(AppError::TodoNotFound)
}
