pub mod health;
pub mod tasks;
pub mod todos;
pub mod users;

use actix_web::web;

/// Registers every `/api` route. The caller wraps the scope with `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(users::sign_up)
            .service(users::sign_in)
            .service(users::verify),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::find_tasks)
            .service(tasks::create_task)
            .service(tasks::find_task)
            .service(tasks::update_task)
            .service(todos::find_todos_by_task),
    )
    .service(
        web::scope("/todos")
            .service(todos::find_todos)
            .service(todos::create_todo)
            .service(todos::find_todo)
            .service(todos::update_todo),
    );
}
