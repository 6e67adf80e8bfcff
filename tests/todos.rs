#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::Fixture;
use todos_api::models::{CreateTodoInput, UpdateTodoInput};
use todos_api::use_cases::{
    CreateTodoUseCase, FindTodoByIdUseCase, FindTodosByTaskIdUseCase, FindTodosByUserIdUseCase,
    UpdateTodoUseCase,
};
use todos_api::AppError;

fn update_input(is_done: bool) -> UpdateTodoInput {
    UpdateTodoInput {
        name: "Milk".to_string(),
        description: "Two litres".to_string(),
        is_done,
    }
}

#[actix_rt::test]
async fn test_find_todo_with_missing_id_fails_before_lookup() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    let use_case = FindTodoByIdUseCase::new(&*fixture.users, &*fixture.todos);

    for todo_id in [None, Some("")] {
        let outcome = use_case.execute(todo_id, "u1").await;
        assert_eq!(outcome, Err(AppError::InvalidTodo("Invalid todo id".into())));
    }
    assert!(fixture.log.is_empty(), "unexpected calls: {:?}", fixture.log.calls());
}

#[actix_rt::test]
async fn test_find_todo_not_found_and_not_owned() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_user("u2", "b@x.com", "secret1");
    let mine = fixture.add_todo("d1", "u1", None);
    fixture.add_todo("d2", "u2", None);
    let use_case = FindTodoByIdUseCase::new(&*fixture.users, &*fixture.todos);

    assert_eq!(use_case.execute(Some("d1"), "u1").await, Ok(mine));
    assert_eq!(
        use_case.execute(Some("d404"), "u1").await,
        Err(AppError::TodoNotFound)
    );
    assert_eq!(
        use_case.execute(Some("d2"), "u1").await,
        Err(AppError::NotResourceOwner)
    );
}

#[actix_rt::test]
async fn test_update_todo() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_user("u2", "b@x.com", "secret1");
    fixture.add_todo("d1", "u1", None);
    let use_case = UpdateTodoUseCase::new(&*fixture.users, &*fixture.todos);

    assert_eq!(
        use_case.execute(Some("d1"), Some(update_input(true)), "u2").await,
        Err(AppError::NotResourceOwner)
    );
    assert!(!fixture.todo("d1").unwrap().is_done);

    assert_eq!(
        use_case.execute(Some("d1"), Some(update_input(true)), "u1").await,
        Ok(())
    );
    let todo = fixture.todo("d1").unwrap();
    assert!(todo.is_done);
    assert_eq!(todo.name, "Milk");
}

#[actix_rt::test]
async fn test_update_todo_body_is_validated_before_the_caller() {
    let fixture = Fixture::new();
    let use_case = UpdateTodoUseCase::new(&*fixture.users, &*fixture.todos);

    let outcome = use_case.execute(Some("d1"), None, "").await;
    assert_eq!(
        outcome,
        Err(AppError::InvalidTodo("Request body is missing".into()))
    );
    assert!(fixture.log.is_empty());
}

#[actix_rt::test]
async fn test_create_todo_under_a_task() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_user("u2", "b@x.com", "secret1");
    fixture.add_task("t1", "u1");
    fixture.add_task("t2", "u2");
    let use_case = CreateTodoUseCase::new(&*fixture.users, &*fixture.tasks, &*fixture.todos);

    let input = |task_id: Option<&str>| CreateTodoInput {
        name: "Milk".into(),
        description: "Two litres".into(),
        task_id: task_id.map(str::to_string),
    };

    let todo = use_case.execute(Some(input(Some("t1"))), "u1").await.unwrap();
    assert_eq!(todo.task_id.as_deref(), Some("t1"));
    assert!(!todo.is_done);

    assert!(use_case.execute(Some(input(None)), "u1").await.is_ok());
    assert_eq!(
        use_case.execute(Some(input(Some("t404"))), "u1").await,
        Err(AppError::TaskNotFound)
    );
    assert_eq!(
        use_case.execute(Some(input(Some("t2"))), "u1").await,
        Err(AppError::NotResourceOwner)
    );
    assert_eq!(
        use_case.execute(Some(input(Some("bad id!"))), "u1").await,
        Err(AppError::InvalidTask("Invalid task id".into()))
    );
}

#[actix_rt::test]
async fn test_find_todos_by_task_and_by_user() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_user("u2", "b@x.com", "secret1");
    fixture.add_task("t1", "u1");
    fixture.add_task("t2", "u2");
    let first = fixture.add_todo("d1", "u1", Some("t1"));
    let loose = fixture.add_todo("d2", "u1", None);

    let by_task = FindTodosByTaskIdUseCase::new(&*fixture.users, &*fixture.tasks, &*fixture.todos);
    assert_eq!(by_task.execute(Some("t1"), "u1").await, Ok(vec![first.clone()]));
    assert_eq!(
        by_task.execute(Some("t2"), "u1").await,
        Err(AppError::NotResourceOwner)
    );

    let by_user = FindTodosByUserIdUseCase::new(&*fixture.users, &*fixture.todos);
    assert_eq!(by_user.execute("u1").await, Ok(vec![first, loose]));
    assert_eq!(by_user.execute("u2").await, Ok(vec![]));
}

#[actix_rt::test]
async fn test_malformed_task_ids_fail_before_any_lookup() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_task("t1", "u1");

    let create = CreateTodoUseCase::new(&*fixture.users, &*fixture.tasks, &*fixture.todos);
    let input = CreateTodoInput {
        name: "Milk".into(),
        description: "Two litres".into(),
        task_id: Some("bad id!".into()),
    };
    assert_eq!(
        create.execute(Some(input), "u1").await,
        Err(AppError::InvalidTask("Invalid task id".into()))
    );

    let by_task = FindTodosByTaskIdUseCase::new(&*fixture.users, &*fixture.tasks, &*fixture.todos);
    for task_id in [None, Some(""), Some("t1;--")] {
        assert_eq!(
            by_task.execute(task_id, "u1").await,
            Err(AppError::InvalidTask("Invalid task id".into()))
        );
    }

    assert!(fixture.log.is_empty(), "unexpected calls: {:?}", fixture.log.calls());
}

#[actix_rt::test]
async fn test_todo_routes() {
    let fixture = Fixture::new();
    fixture.add_user("u1", "a@x.com", "secret1");
    fixture.add_task("t1", "u1");
    let app = test_app!(fixture).await;
    let bearer = fixture.bearer("u1");

    // Empty task: no content.
    let req = test::TestRequest::get()
        .uri("/api/tasks/t1/todos")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "name": "Milk", "description": "Two litres", "taskId": "t1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/tasks/t1/todos")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Value = test::read_body_json(resp).await;
    assert_eq!(todos[0]["taskId"], "t1");
    assert_eq!(todos[0]["isDone"], false);
    let todo_id = todos[0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", todo_id))
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "name": "Milk", "description": "Two litres", "isDone": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "Todo updated" }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{}", todo_id))
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let todo: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(todo["isDone"], true);

    let req = test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
