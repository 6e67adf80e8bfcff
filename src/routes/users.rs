use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};

use crate::{
    models::{SignInRequest, SignUpRequest},
    state::AppState,
    use_cases::{SignInUseCase, SignUpUseCase, VerifyUserUseCase},
    web_io::{self, WebRequest},
};

/// Register a new user
///
/// ## Responses:
/// - `201 Created`: `{ "message": "User created" }`.
/// - `400 Bad Request`: invalid credentials shape or email already taken.
#[post("")]
pub async fn sign_up(
    state: web::Data<AppState>,
    body: Option<web::Json<SignUpRequest>>,
) -> HttpResponse {
    let use_case = SignUpUseCase::new(state.users.as_ref(), state.hasher.as_ref());
    let request = WebRequest::new(body.map(web::Json::into_inner), None, "");
    web_io::users::sign_up(&use_case, request).await.into()
}

/// Sign in
///
/// ## Responses:
/// - `200 OK`: `{ "token": ..., "userId": ... }`.
/// - `400 Bad Request`: invalid credentials shape, unknown email or wrong password.
#[post("/signin")]
pub async fn sign_in(
    state: web::Data<AppState>,
    body: Option<web::Json<SignInRequest>>,
) -> HttpResponse {
    let use_case = SignInUseCase::new(state.users.as_ref(), state.hasher.as_ref(), &state.tokens);
    let request = WebRequest::new(body.map(web::Json::into_inner), None, "");
    web_io::users::sign_in(&use_case, request).await.into()
}

/// Verify a bearer token
///
/// Always answers `200 OK` with `true` when the token identifies a known user and `false`
/// otherwise, including when the header is missing or malformed.
#[get("/verify")]
pub async fn verify(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let use_case = VerifyUserUseCase::new(state.users.as_ref(), &state.tokens);
    let request = WebRequest::<()>::new(None, authorization, "");
    web_io::users::verify(&use_case, request).await.into()
}
