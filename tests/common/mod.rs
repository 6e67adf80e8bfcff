#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use todos_api::auth::{PasswordHasher, TokenCodec};
use todos_api::data_access::{TaskDataAccess, TodoDataAccess, UserDataAccess};
use todos_api::models::{Task, TaskInput, Todo, UpdateTodoInput, User};
use todos_api::{AppError, AppState};

pub const SECRET: &str = "integration_test_secret";

/// Builds an initialised test service with the same layout as the binary.
macro_rules! test_app {
    ($fixture:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($fixture.state()))
                .service(todos_api::routes::health::health)
                .service(
                    actix_web::web::scope("/api")
                        .wrap(todos_api::auth::AuthMiddleware::new($fixture.tokens.clone()))
                        .configure(todos_api::routes::config),
                ),
        )
    };
}

/// Shared, ordered log of every data-access call made through the in-memory stores.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn record(&self, call: &str) {
        self.0.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }

    pub fn contains(&self, call: &str) -> bool {
        self.0.lock().unwrap().iter().any(|c| c == call)
    }
}

pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    log: CallLog,
}

#[async_trait]
impl UserDataAccess for InMemoryUsers {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.log.record("users.find_by_id");
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.log.record("users.find_by_email");
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        self.log.record("users.exists_by_email");
        Ok(self.rows.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn create(&self, user: &User) -> Result<(), AppError> {
        self.log.record("users.create");
        self.rows.lock().unwrap().push(user.clone());
        Ok(())
    }
}

pub struct InMemoryTasks {
    rows: Mutex<Vec<Task>>,
    log: CallLog,
}

#[async_trait]
impl TaskDataAccess for InMemoryTasks {
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        self.log.record("tasks.find_by_id");
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Task>, AppError> {
        self.log.record("tasks.find_by_owner_id");
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, task: &Task) -> Result<(), AppError> {
        self.log.record("tasks.create");
        self.rows.lock().unwrap().push(task.clone());
        Ok(())
    }

    async fn update(&self, id: &str, patch: &TaskInput) -> Result<(), AppError> {
        self.log.record("tasks.update");
        if let Some(task) = self.rows.lock().unwrap().iter_mut().find(|t| t.id == id) {
            task.name = patch.name.clone();
            task.description = patch.description.clone();
        }
        Ok(())
    }
}

pub struct InMemoryTodos {
    rows: Mutex<Vec<Todo>>,
    log: CallLog,
}

#[async_trait]
impl TodoDataAccess for InMemoryTodos {
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, AppError> {
        self.log.record("todos.find_by_id");
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_owner_id(&self, owner_id: &str) -> Result<Vec<Todo>, AppError> {
        self.log.record("todos.find_by_owner_id");
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_task_id(&self, task_id: &str) -> Result<Vec<Todo>, AppError> {
        self.log.record("todos.find_by_task_id");
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.task_id.as_deref() == Some(task_id))
            .cloned()
            .collect())
    }

    async fn create(&self, todo: &Todo) -> Result<(), AppError> {
        self.log.record("todos.create");
        self.rows.lock().unwrap().push(todo.clone());
        Ok(())
    }

    async fn update(&self, id: &str, patch: &UpdateTodoInput) -> Result<(), AppError> {
        self.log.record("todos.update");
        if let Some(todo) = self.rows.lock().unwrap().iter_mut().find(|t| t.id == id) {
            todo.name = patch.name.clone();
            todo.description = patch.description.clone();
            todo.is_done = patch.is_done;
        }
        Ok(())
    }
}

/// Reversible stand-in for bcrypt so tests stay fast.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        Ok(format!("hashed:{}", plain))
    }

    fn matches(&self, plain: &str, digest: &str) -> Result<bool, AppError> {
        Ok(digest == format!("hashed:{}", plain))
    }
}

/// In-memory stores sharing one call log, plus a token codec.
pub struct Fixture {
    pub users: Arc<InMemoryUsers>,
    pub tasks: Arc<InMemoryTasks>,
    pub todos: Arc<InMemoryTodos>,
    pub hasher: Arc<PlainHasher>,
    pub tokens: TokenCodec,
    pub log: CallLog,
}

impl Fixture {
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            users: Arc::new(InMemoryUsers {
                rows: Mutex::new(Vec::new()),
                log: log.clone(),
            }),
            tasks: Arc::new(InMemoryTasks {
                rows: Mutex::new(Vec::new()),
                log: log.clone(),
            }),
            todos: Arc::new(InMemoryTodos {
                rows: Mutex::new(Vec::new()),
                log: log.clone(),
            }),
            hasher: Arc::new(PlainHasher),
            tokens: TokenCodec::new(SECRET, None),
            log,
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            users: self.users.clone(),
            tasks: self.tasks.clone(),
            todos: self.todos.clone(),
            hasher: self.hasher.clone(),
            tokens: self.tokens.clone(),
        }
    }

    /// Seeds rows directly, bypassing the call log.
    pub fn add_user(&self, id: &str, email: &str, password: &str) -> User {
        let user = User {
            id: id.to_string(),
            name: None,
            email: email.to_string(),
            password_hash: format!("hashed:{}", password),
        };
        self.users.rows.lock().unwrap().push(user.clone());
        user
    }

    pub fn add_task(&self, id: &str, owner_id: &str) -> Task {
        let task = Task {
            id: id.to_string(),
            name: format!("task {}", id),
            description: "seeded".to_string(),
            user_id: owner_id.to_string(),
        };
        self.tasks.rows.lock().unwrap().push(task.clone());
        task
    }

    pub fn add_todo(&self, id: &str, owner_id: &str, task_id: Option<&str>) -> Todo {
        let todo = Todo {
            id: id.to_string(),
            name: format!("todo {}", id),
            description: "seeded".to_string(),
            is_done: false,
            user_id: owner_id.to_string(),
            task_id: task_id.map(str::to_string),
        };
        self.todos.rows.lock().unwrap().push(todo.clone());
        todo
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.tasks.rows.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    pub fn todo(&self, id: &str) -> Option<Todo> {
        self.todos.rows.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.users.rows.lock().unwrap().len()
    }

    pub fn bearer(&self, user_id: &str) -> String {
        format!("Bearer {}", self.tokens.issue(user_id).unwrap())
    }
}
