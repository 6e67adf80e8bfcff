use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    auth::AuthUserId,
    models::TaskInput,
    state::AppState,
    use_cases::{CreateTaskUseCase, FindTaskByIdUseCase, FindTasksByUserIdUseCase, UpdateTaskUseCase},
    web_io::{self, WebRequest},
};

/// Lists the caller's tasks.
///
/// ## Responses:
/// - `200 OK`: JSON array of tasks.
/// - `204 No Content`: the caller has no tasks.
/// - `400 Bad Request`: anonymous or unknown caller.
#[get("")]
pub async fn find_tasks(state: web::Data<AppState>, user: AuthUserId) -> HttpResponse {
    let use_case = FindTasksByUserIdUseCase::new(state.users.as_ref(), state.tasks.as_ref());
    let request = WebRequest::<()>::new(None, None, user.0);
    web_io::tasks::find_by_user_id(&use_case, request).await.into()
}

/// Creates a task owned by the caller.
///
/// ## Request Body:
/// `{ "name": ..., "description": ... }`
///
/// ## Responses:
/// - `201 Created`: `{ "message": "Task created" }`.
/// - `400 Bad Request`: invalid body, or anonymous/unknown caller.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    body: Option<web::Json<TaskInput>>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = CreateTaskUseCase::new(state.users.as_ref(), state.tasks.as_ref());
    let request = WebRequest::new(body.map(web::Json::into_inner), None, user.0);
    web_io::tasks::create(&use_case, request).await.into()
}

/// Retrieves one of the caller's tasks.
///
/// ## Responses:
/// - `200 OK`: the task.
/// - `400 Bad Request`: invalid id, task not found, or task owned by someone else.
#[get("/{id}")]
pub async fn find_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = FindTaskByIdUseCase::new(state.users.as_ref(), state.tasks.as_ref());
    let request = WebRequest::<()>::new(None, Some(task_id.into_inner()), user.0);
    web_io::tasks::find_by_id(&use_case, request).await.into()
}

/// Updates one of the caller's tasks.
///
/// ## Responses:
/// - `200 OK`: `{ "message": "Task updated" }`.
/// - `400 Bad Request`: invalid id or body, task not found, or task owned by someone else.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    body: Option<web::Json<TaskInput>>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = UpdateTaskUseCase::new(state.users.as_ref(), state.tasks.as_ref());
    let request = WebRequest::new(
        body.map(web::Json::into_inner),
        Some(task_id.into_inner()),
        user.0,
    );
    web_io::tasks::update(&use_case, request).await.into()
}
