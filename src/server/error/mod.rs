//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! handlers can simply return `Result<_, AppError>`.
//!
//! Every error body has the shape `{ "error": "<message>" }` with a message meant
//! for storefront customers, in Russian.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Generic message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Внутренняя ошибка сервера";

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`. Domain-specific
/// errors like `AuthError` handle their own response mapping, while the message
/// variants map onto standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Unexpected internal state, always a 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict, everything else 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while storing or removing media files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Malformed multipart upload body, a 400.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data (duplicate slug, SKU, review, ...).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `MultipartErr`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict` and unique constraint violations
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::MultipartErr(err) => {
                tracing::debug!("Rejected multipart body: {}", err);
                error_response(
                    StatusCode::BAD_REQUEST,
                    "Некорректные данные формы".to_string(),
                )
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    error_response(
                        StatusCode::CONFLICT,
                        "Запись с такими данными уже существует".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE.to_string(),
        )
    }
}
