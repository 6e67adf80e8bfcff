use crate::data_access::{TaskDataAccess, TodoDataAccess, UserDataAccess};
use crate::error::AppError;
use crate::models::{check_ownership, CreateTodoInput, Task, Todo, UpdateTodoInput};
use crate::use_cases::{check_user_exists, find_task, find_todo, validate_caller};

/// Creates a todo owned by the caller, optionally attached to one of the caller's tasks.
pub struct CreateTodoUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
    todos: &'a dyn TodoDataAccess,
}

impl<'a> CreateTodoUseCase<'a> {
    pub fn new(
        users: &'a dyn UserDataAccess,
        tasks: &'a dyn TaskDataAccess,
        todos: &'a dyn TodoDataAccess,
    ) -> Self {
        Self {
            users,
            tasks,
            todos,
        }
    }

    pub async fn execute(
        &self,
        input: Option<CreateTodoInput>,
        auth_user_id: &str,
    ) -> Result<Todo, AppError> {
        let input = Todo::validate_create_input(input)?;
        if input.task_id.is_some() {
            Task::validate_id(input.task_id.as_deref())?;
        }
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        if let Some(task_id) = input.task_id.as_deref() {
            let task = find_task(self.tasks, task_id).await?;
            check_ownership(&task, user_id)?;
        }
        let todo = Todo::new(input, user_id);
        self.todos.create(&todo).await?;
        Ok(todo)
    }
}

/// Returns a single todo, provided the caller owns it.
pub struct FindTodoByIdUseCase<'a> {
    users: &'a dyn UserDataAccess,
    todos: &'a dyn TodoDataAccess,
}

impl<'a> FindTodoByIdUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, todos: &'a dyn TodoDataAccess) -> Self {
        Self { users, todos }
    }

    pub async fn execute(
        &self,
        todo_id: Option<&str>,
        auth_user_id: &str,
    ) -> Result<Todo, AppError> {
        let todo_id = Todo::validate_id(todo_id)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let todo = find_todo(self.todos, todo_id).await?;
        check_ownership(&todo, user_id)?;
        Ok(todo)
    }
}

/// Lists the todos attached to one of the caller's tasks.
pub struct FindTodosByTaskIdUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tasks: &'a dyn TaskDataAccess,
    todos: &'a dyn TodoDataAccess,
}

impl<'a> FindTodosByTaskIdUseCase<'a> {
    pub fn new(
        users: &'a dyn UserDataAccess,
        tasks: &'a dyn TaskDataAccess,
        todos: &'a dyn TodoDataAccess,
    ) -> Self {
        Self {
            users,
            tasks,
            todos,
        }
    }

    pub async fn execute(
        &self,
        task_id: Option<&str>,
        auth_user_id: &str,
    ) -> Result<Vec<Todo>, AppError> {
        let task_id = Task::validate_id(task_id)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let task = find_task(self.tasks, task_id).await?;
        check_ownership(&task, user_id)?;
        self.todos.find_by_task_id(task_id).await
    }
}

/// Lists every todo the caller owns.
pub struct FindTodosByUserIdUseCase<'a> {
    users: &'a dyn UserDataAccess,
    todos: &'a dyn TodoDataAccess,
}

impl<'a> FindTodosByUserIdUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, todos: &'a dyn TodoDataAccess) -> Self {
        Self { users, todos }
    }

    pub async fn execute(&self, auth_user_id: &str) -> Result<Vec<Todo>, AppError> {
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        self.todos.find_by_owner_id(user_id).await
    }
}

/// Replaces the name, description and done flag of a todo the caller owns.
pub struct UpdateTodoUseCase<'a> {
    users: &'a dyn UserDataAccess,
    todos: &'a dyn TodoDataAccess,
}

impl<'a> UpdateTodoUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, todos: &'a dyn TodoDataAccess) -> Self {
        Self { users, todos }
    }

    pub async fn execute(
        &self,
        todo_id: Option<&str>,
        input: Option<UpdateTodoInput>,
        auth_user_id: &str,
    ) -> Result<(), AppError> {
        let todo_id = Todo::validate_id(todo_id)?;
        let input = Todo::validate_update_input(input)?;
        let user_id = validate_caller(auth_user_id)?;
        check_user_exists(self.users, user_id).await?;
        let todo = find_todo(self.todos, todo_id).await?;
        check_ownership(&todo, user_id)?;
        self.todos.update(todo_id, &input).await
    }
}
