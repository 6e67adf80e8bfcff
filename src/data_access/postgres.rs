use async_trait::async_trait;
use sqlx::PgPool;

use crate::data_access::{TaskDataAccess, TodoDataAccess, UserDataAccess};
use crate::error::AppError;
use crate::models::{Task, TaskInput, Todo, UpdateTodoInput, User};

const USER_COLUMNS: &str = "id, name, email, password_hash";
const TASK_COLUMNS: &str = "id, name, description, user_id";
const TODO_COLUMNS: &str = "id, name, description, is_done, user_id, task_id";

/// A concurrent sign-up can pass the email check and still lose the race on `users.email`.
fn user_insert_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::EmailAlreadyTaken
        }
        other => other.into(),
    }
}

#[derive(Clone)]
pub struct PgUserDataAccess {
    pool: PgPool,
}

impl PgUserDataAccess {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDataAccess for PgUserDataAccess {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let (exists,) =
            sqlx::query_as::<_, (bool,)>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(user_insert_error)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgTaskDataAccess {
    pool: PgPool,
}

impl PgTaskDataAccess {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskDataAccess for PgTaskDataAccess {
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        let sql = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);
        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Task>, AppError> {
        let sql = format!(
            "SELECT {} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC",
            TASK_COLUMNS
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn create(&self, task: &Task) -> Result<(), AppError> {
        sqlx::query("INSERT INTO tasks (id, name, description, user_id) VALUES ($1, $2, $3, $4)")
            .bind(&task.id)
            .bind(&task.name)
            .bind(&task.description)
            .bind(&task.user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, patch: &TaskInput) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE tasks SET name = $1, description = $2, updated_at = NOW() WHERE id = $3",
        )
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgTodoDataAccess {
    pool: PgPool,
}

impl PgTodoDataAccess {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoDataAccess for PgTodoDataAccess {
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {} FROM todos WHERE id = $1", TODO_COLUMNS);
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Todo>, AppError> {
        let sql = format!(
            "SELECT {} FROM todos WHERE user_id = $1 ORDER BY created_at DESC",
            TODO_COLUMNS
        );
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_task_id(&self, task_id: &str) -> Result<Vec<Todo>, AppError> {
        let sql = format!(
            "SELECT {} FROM todos WHERE task_id = $1 ORDER BY created_at DESC",
            TODO_COLUMNS
        );
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .bind(task_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn create(&self, todo: &Todo) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO todos (id, name, description, is_done, user_id, task_id)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&todo.id)
        .bind(&todo.name)
        .bind(&todo.description)
        .bind(todo.is_done)
        .bind(&todo.user_id)
        .bind(&todo.task_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, id: &str, patch: &UpdateTodoInput) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE todos SET name = $1, description = $2, is_done = $3, updated_at = NOW()
             WHERE id = $4",
        )
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(patch.is_done)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
