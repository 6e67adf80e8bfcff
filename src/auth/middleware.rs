use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::warn;

use crate::auth::{resolve_caller, AuthUserId, TokenCodec, VERIFY_PATH};
use crate::error::AppError;

/// Attaches an `AuthUserId` to every request except the verification endpoint.
///
/// Requests without a token pass through as anonymous. Requests with an unusable
/// `Authorization` header are rejected with `AppError::InvalidAuth` before any handler runs.
pub struct AuthMiddleware {
    codec: TokenCodec,
}

impl AuthMiddleware {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            codec: self.codec.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    codec: TokenCodec,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.path() == VERIFY_PATH {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let resolved = match req.headers().get(header::AUTHORIZATION) {
            None => resolve_caller(&self.codec, None),
            Some(value) => match value.to_str() {
                Ok(value) => resolve_caller(&self.codec, Some(value)),
                Err(_) => Err(AppError::InvalidAuth(
                    "Authorization header is not valid text".into(),
                )),
            },
        };

        match resolved {
            Ok(user_id) => {
                req.extensions_mut().insert(AuthUserId(user_id));
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(app_err) => {
                warn!("Rejected request to {}: {}", req.path(), app_err);
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
