use crate::data_access::{TaskDataAccess, UserDataAccess};
use crate::error::AppError;
use crate::models::{check_ownership, Task, TaskInput};
use crate::use_cases::{check_user_exists, find_task, validate_caller};

/// Creates a task owned by the caller.
pub struct CreateTaskUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
}

impl<'a> CreateTaskUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, tasks: &'a dyn TaskDataAccess) -> Self {
        Self { users, tasks }
    }

    pub async fn execute(
        &self,
        input: Option<TaskInput>,
        auth_user_id: &str,
    ) -> Result<Task, AppError> {
        let input = Task::validate_input(input)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let task = Task::new(input, user_id);
        self.tasks.create(&task).await?;
        Ok(task)
    }
}

/// Returns a single task, provided the caller owns it.
pub struct FindTaskByIdUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
}

impl<'a> FindTaskByIdUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, tasks: &'a dyn TaskDataAccess) -> Self {
        Self { users, tasks }
    }

    pub async fn execute(
        &self,
        task_id: Option<&str>,
        auth_user_id: &str,
    ) -> Result<Task, AppError> {
        let task_id = Task::validate_id(task_id)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let task = find_task(self.tasks, task_id).await?;
        check_ownership(&task, user_id)?;
        Ok(task)
    }
}

/// Lists every task the caller owns.
pub struct FindTasksByUserIdUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
}

impl<'a> FindTasksByUserIdUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, tasks: &'a dyn TaskDataAccess) -> Self {
        Self { users, tasks }
    }

    pub async fn execute(&self, auth_user_id: &str) -> Result<Vec<Task>, AppError> {
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        self.tasks.find_by_owner_id(user_id).await
    }
}

/// Replaces the name and description of a task the caller owns.
pub struct UpdateTaskUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
}

impl<'a> UpdateTaskUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, tasks: &'a dyn TaskDataAccess) -> Self {
        Self { users, tasks }
    }

    pub async fn execute(
        &self,
        task_id: Option<&str>,
        input: Option<TaskInput>,
        auth_user_id: &str,
    ) -> Result<(), AppError> {
        let task_id = Task::validate_id(task_id)?;
        let input = Task::validate_input(input)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let task = find_task(self.tasks, task_id).await?;
        check_ownership(&task, user_id)?;
        self.tasks.update(task_id, &input).await
    }
}
