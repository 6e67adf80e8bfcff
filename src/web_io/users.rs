use crate::models::{SignInRequest, SignUpRequest};
use crate::use_cases::{SignInUseCase, SignUpUseCase, VerifyUserUseCase};
use crate::web_io::{WebRequest, WebResponse};

pub async fn sign_up(use_case: &SignUpUseCase<'_>, request: WebRequest<SignUpRequest>) -> WebResponse {
    let outcome = use_case.execute(request.body).await;
    WebResponse::classify(outcome, |_| WebResponse::created("User created"))
}

pub async fn sign_in(use_case: &SignInUseCase<'_>, request: WebRequest<SignInRequest>) -> WebResponse {
    let outcome = use_case.execute(request.body).await;
    WebResponse::classify(outcome, |signed| WebResponse::ok(&signed))
}

/// `request.param` carries the raw `Authorization` header value, if any.
pub async fn verify(use_case: &VerifyUserUseCase<'_>, request: WebRequest<()>) -> WebResponse {
    let known = use_case.execute(request.param.as_deref()).await;
    WebResponse::ok(&known)
}
