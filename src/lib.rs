#![doc = "The `todos_api` library crate."]
#![doc = ""]
#![doc = "Request-processing pipeline for a multi-user task/todo backend: bearer-token"]
#![doc = "authentication, ordered per-operation use cases with ownership checks, and the"]
#![doc = "classifier that turns domain failures into stable HTTP outcomes. The binary"]
#![doc = "(`main.rs`) wires these pieces to Postgres and actix-web."]

pub mod auth;
pub mod config;
pub mod data_access;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod use_cases;
pub mod web_io;

pub use crate::error::{AppError, ErrorKind};
pub use crate::state::AppState;
