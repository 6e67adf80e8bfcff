use crate::models::TaskInput;
use crate::use_cases::{
    CreateTaskUseCase, FindTaskByIdUseCase, FindTasksByUserIdUseCase, UpdateTaskUseCase,
};
use crate::web_io::{WebRequest, WebResponse};

pub async fn create(use_case: &CreateTaskUseCase<'_>, request: WebRequest<TaskInput>) -> WebResponse {
    let outcome = use_case.execute(request.body, &request.auth_user_id).await;
    WebResponse::classify(outcome, |_| WebResponse::created("Task created"))
}

pub async fn find_by_id(use_case: &FindTaskByIdUseCase<'_>, request: WebRequest<()>) -> WebResponse {
    let outcome = use_case
        .execute(request.param.as_deref(), &request.auth_user_id)
        .await;
    WebResponse::classify(outcome, |task| WebResponse::ok(&task))
}

pub async fn find_by_user_id(
    use_case: &FindTasksByUserIdUseCase<'_>,
    request: WebRequest<()>,
) -> WebResponse {
    let outcome = use_case.execute(&request.auth_user_id).await;
    WebResponse::classify(outcome, |tasks| WebResponse::found(&tasks))
}

pub async fn update(use_case: &UpdateTaskUseCase<'_>, request: WebRequest<TaskInput>) -> WebResponse {
    let outcome = use_case
        .execute(request.param.as_deref(), request.body, &request.auth_user_id)
        .await;
    WebResponse::classify(outcome, |()| WebResponse::ok_message("Task updated"))
}
