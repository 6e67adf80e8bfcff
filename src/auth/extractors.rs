use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

/// The caller identity resolved by `AuthMiddleware`.
///
/// An empty id means the request carried no token. Authorization is left to the use cases,
/// which reject an empty caller id during structural validation; this extractor therefore
/// never fails and falls back to the anonymous identity when nothing was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthUserId(pub String);

impl AuthUserId {
    pub fn is_anonymous(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromRequest for AuthUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .extensions()
            .get::<AuthUserId>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(user_id))
    }
}
