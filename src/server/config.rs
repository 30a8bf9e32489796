//! Environment-based application configuration.

use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MEDIA_URL_PREFIX: &str = "/uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Origin of the storefront/admin frontend, allowed by CORS.
    pub app_url: String,

    pub jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
    pub cookie_secure: bool,

    pub upload_dir: String,
    pub media_url_prefix: String,
    pub max_upload_bytes: usize,

    /// Credentials for the bootstrap administrator created when no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            app_url: optional("APP_URL", DEFAULT_APP_URL.to_string())?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl_minutes: optional(
                "ACCESS_TOKEN_TTL_MINUTES",
                DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
            )?,
            refresh_token_ttl_days: optional(
                "REFRESH_TOKEN_TTL_DAYS",
                DEFAULT_REFRESH_TOKEN_TTL_DAYS,
            )?,
            cookie_secure: optional("COOKIE_SECURE", true)?,
            upload_dir: optional("UPLOAD_DIR", DEFAULT_UPLOAD_DIR.to_string())?,
            media_url_prefix: optional(
                "MEDIA_URL_PREFIX",
                DEFAULT_MEDIA_URL_PREFIX.to_string(),
            )?,
            max_upload_bytes: optional("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        let value: i64 = optional("STOREFRONT_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn reports_missing_required_variable() {
        let err = required("STOREFRONT_TEST_MISSING_REQUIRED").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(name) if name == "STOREFRONT_TEST_MISSING_REQUIRED"));
    }
}
