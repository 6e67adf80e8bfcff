use log::{debug, warn};

use crate::auth::{bearer_token, PasswordHasher, TokenCodec};
use crate::data_access::UserDataAccess;
use crate::error::AppError;
use crate::models::{AuthResponse, SignInRequest, SignUpRequest, User};

/// Registers a new user: credentials shape, then email uniqueness, then hash and store.
pub struct SignUpUseCase<'a> {
    users: &'a dyn UserDataAccess,
    hasher: &'a dyn PasswordHasher,
}

impl<'a> SignUpUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, hasher: &'a dyn PasswordHasher) -> Self {
        Self { users, hasher }
    }

    pub async fn execute(&self, request: Option<SignUpRequest>) -> Result<User, AppError> {
        let request = request.ok_or_else(|| AppError::InvalidUser("Request body is missing".into()))?;
        User::validate_email(&request.email)?;
        User::validate_password(&request.password)?;
        User::validate_name(request.name.as_deref())?;

        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::EmailAlreadyTaken);
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request, password_hash);
        self.users.create(&user).await?;
        Ok(user)
    }
}

/// Checks credentials and mints a token. Performs no writes.
pub struct SignInUseCase<'a> {
    users: &'a dyn UserDataAccess,
    hasher: &'a dyn PasswordHasher,
    tokens: &'a TokenCodec,
}

impl<'a> SignInUseCase<'a> {
    pub fn new(
        users: &'a dyn UserDataAccess,
        hasher: &'a dyn PasswordHasher,
        tokens: &'a TokenCodec,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, request: Option<SignInRequest>) -> Result<AuthResponse, AppError> {
        let request = request.ok_or_else(|| AppError::InvalidUser("Request body is missing".into()))?;
        User::validate_email(&request.email)?;
        User::validate_password(&request.password)?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !self.hasher.matches(&request.password, &user.password_hash)? {
            return Err(AppError::PasswordAndHashNotMatch);
        }

        let token = self.tokens.issue(&user.id)?;
        Ok(AuthResponse {
            token,
            user_id: user.id,
        })
    }
}

/// Answers whether an `Authorization` header identifies a known user.
///
/// Never fails: every decoding, format or lookup problem collapses into `false`.
pub struct VerifyUserUseCase<'a> {
    users: &'a dyn UserDataAccess,
    tokens: &'a TokenCodec,
}

impl<'a> VerifyUserUseCase<'a> {
    pub fn new(users: &'a dyn UserDataAccess, tokens: &'a TokenCodec) -> Self {
        Self { users, tokens }
    }

    pub async fn execute(&self, authorization: Option<&str>) -> bool {
        match self.verify(authorization).await {
            Ok(known) => known,
            Err(err @ (AppError::Database(_) | AppError::Internal(_))) => {
                warn!("User verification failed: {}", err);
                false
            }
            Err(err) => {
                debug!("User verification rejected: {}", err);
                false
            }
        }
    }

    async fn verify(&self, authorization: Option<&str>) -> Result<bool, AppError> {
        let header = authorization
            .filter(|header| !header.trim().is_empty())
            .ok_or_else(|| AppError::InvalidAuth("Missing token".into()))?;
        let token = bearer_token(header)?;
        let claims = self.tokens.decode(token)?;
        let user_id = User::validate_id(Some(claims.sub.as_str()))?;
        Ok(self.users.find_by_id(user_id).await?.is_some())
    }
}
