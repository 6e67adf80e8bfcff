use std::env;

use crate::error::AppError;

/// Cost bounds accepted by the bcrypt hasher.
pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    pub jwt_secret: String,
    /// Token lifetime; tokens never expire when unset.
    pub jwt_ttl_seconds: Option<i64>,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::Internal(format!("{} must be set", key)))
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| AppError::Internal("SERVER_PORT must be a number".into()))?,
            None => 8080,
        };
        let jwt_ttl_seconds = match lookup("JWT_TTL_SECONDS") {
            Some(ttl) => Some(
                ttl.parse::<i64>()
                    .ok()
                    .filter(|ttl| *ttl > 0)
                    .ok_or_else(|| {
                        AppError::Internal("JWT_TTL_SECONDS must be a positive number".into())
                    })?,
            ),
            None => None,
        };
        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(cost) => cost
                .parse::<u32>()
                .ok()
                .filter(|cost| (BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(cost))
                .ok_or_else(|| {
                    AppError::Internal(format!(
                        "BCRYPT_COST must be between {} and {}",
                        BCRYPT_MIN_COST, BCRYPT_MAX_COST
                    ))
                })?,
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_port,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl_seconds,
            bcrypt_cost,
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
