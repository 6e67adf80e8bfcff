use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    auth::AuthUserId,
    models::{CreateTodoInput, UpdateTodoInput},
    state::AppState,
    use_cases::{
        CreateTodoUseCase, FindTodoByIdUseCase, FindTodosByTaskIdUseCase, FindTodosByUserIdUseCase,
        UpdateTodoUseCase,
    },
    web_io::{self, WebRequest},
};

#[get("")]
pub async fn find_todos(state: web::Data<AppState>, user: AuthUserId) -> HttpResponse {
    let use_case = FindTodosByUserIdUseCase::new(state.users.as_ref(), state.todos.as_ref());
    let request = WebRequest::<()>::new(None, None, user.0);
    web_io::todos::find_by_user_id(&use_case, request).await.into()
}

/// Creates a todo, optionally under one of the caller's tasks (`taskId`).
#[post("")]
pub async fn create_todo(
    state: web::Data<AppState>,
    body: Option<web::Json<CreateTodoInput>>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = CreateTodoUseCase::new(
        state.users.as_ref(),
        state.tasks.as_ref(),
        state.todos.as_ref(),
    );
    let request = WebRequest::new(body.map(web::Json::into_inner), None, user.0);
    web_io::todos::create(&use_case, request).await.into()
}

#[get("/{id}")]
pub async fn find_todo(
    state: web::Data<AppState>,
    todo_id: web::Path<String>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = FindTodoByIdUseCase::new(state.users.as_ref(), state.todos.as_ref());
    let request = WebRequest::<()>::new(None, Some(todo_id.into_inner()), user.0);
    web_io::todos::find_by_id(&use_case, request).await.into()
}

#[put("/{id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    todo_id: web::Path<String>,
    body: Option<web::Json<UpdateTodoInput>>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = UpdateTodoUseCase::new(state.users.as_ref(), state.todos.as_ref());
    let request = WebRequest::new(
        body.map(web::Json::into_inner),
        Some(todo_id.into_inner()),
        user.0,
    );
    web_io::todos::update(&use_case, request).await.into()
}

/// Lists the todos of one of the caller's tasks. Mounted under `/tasks`.
#[get("/{id}/todos")]
pub async fn find_todos_by_task(
    state: web::Data<AppState>,
    task_id: web::Path<String>,
    user: AuthUserId,
) -> HttpResponse {
    let use_case = FindTodosByTaskIdUseCase::new(
        state.users.as_ref(),
        state.tasks.as_ref(),
        state.todos.as_ref(),
    );
    let request = WebRequest::<()>::new(None, Some(task_id.into_inner()), user.0);
    web_io::todos::find_by_task_id(&use_case, request).await.into()
}
