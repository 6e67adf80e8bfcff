use crate::models::{CreateTodoInput, UpdateTodoInput};
use crate::use_cases::{
    CreateTodoUseCase, FindTodoByIdUseCase, FindTodosByTaskIdUseCase, FindTodosByUserIdUseCase,
    UpdateTodoUseCase,
};
use crate::web_io::{WebRequest, WebResponse};

pub async fn create(
    use_case: &CreateTodoUseCase<'_>,
    request: WebRequest<CreateTodoInput>,
) -> WebResponse {
    let outcome = use_case.execute(request.body, &request.auth_user_id).await;
    WebResponse::classify(outcome, |_| WebResponse::created("Todo created"))
}

pub async fn find_by_id(use_case: &FindTodoByIdUseCase<'_>, request: WebRequest<()>) -> WebResponse {
    let outcome = use_case
        .execute(request.param.as_deref(), &request.auth_user_id)
        .await;
    WebResponse::classify(outcome, |todo| WebResponse::ok(&todo))
}

/// `request.param` is the parent task id.
pub async fn find_by_task_id(
    use_case: &FindTodosByTaskIdUseCase<'_>,
    request: WebRequest<()>,
) -> WebResponse {
    let outcome = use_case
        .execute(request.param.as_deref(), &request.auth_user_id)
        .await;
    WebResponse::classify(outcome, |todos| WebResponse::found(&todos))
}

pub async fn find_by_user_id(
    use_case: &FindTodosByUserIdUseCase<'_>,
    request: WebRequest<()>,
) -> WebResponse {
    let outcome = use_case.execute(&request.auth_user_id).await;
    WebResponse::classify(outcome, |todos| WebResponse::found(&todos))
}

pub async fn update(
    use_case: &UpdateTodoUseCase<'_>,
    request: WebRequest<UpdateTodoInput>,
) -> WebResponse {
    let outcome = use_case
        .execute(request.param.as_deref(), request.body, &request.auth_user_id)
        .await;
    WebResponse::classify(outcome, |()| WebResponse::ok_message("Todo updated"))
}
