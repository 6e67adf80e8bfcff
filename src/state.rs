use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{BcryptHasher, PasswordHasher, TokenCodec};
use crate::data_access::{
    PgTaskDataAccess, PgTodoDataAccess, PgUserDataAccess, TaskDataAccess, TodoDataAccess,
    UserDataAccess,
};

/// The capabilities handed to every route handler. Handlers build use cases from these per
/// request; nothing in here is mutated by the pipeline.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserDataAccess>,
    pub tasks: Arc<dyn TaskDataAccess>,
    pub todos: Arc<dyn TodoDataAccess>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: TokenCodec,
}

impl AppState {
    /// Wires the Postgres data-access implementations and bcrypt over a shared pool.
    pub fn postgres(pool: PgPool, tokens: TokenCodec, bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(PgUserDataAccess::new(pool.clone())),
            tasks: Arc::new(PgTaskDataAccess::new(pool.clone())),
            todos: Arc::new(PgTodoDataAccess::new(pool)),
            hasher: Arc::new(BcryptHasher::new(bcrypt_cost)),
            tokens,
        }
    }
}
