use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Access token missing from request")]
    MissingToken,

    /// Bearer token failed signature or claim validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Bearer token was valid but has expired; the client should refresh.
    #[error("Access token expired")]
    TokenExpired,

    /// Refresh endpoint called without the refresh cookie.
    #[error("Refresh token cookie missing")]
    MissingRefreshToken,

    /// Refresh cookie does not match a stored, unexpired token.
    #[error("Refresh token unknown or expired")]
    InvalidRefreshToken,

    /// Email/password pair did not match.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// Registration attempted with an email that already exists.
    #[error("Email {0} already registered")]
    EmailTaken(String),

    /// Authenticated user lacks the required permission.
    ///
    /// # Fields
    /// - User ID
    /// - Description of what was attempted
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Token refers to a user that has since been deleted.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Signing an access token failed.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// Argon2 hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - Token and credential problems → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `EmailTaken` → 409 Conflict
/// - Encoding and hashing failures → 500 Internal Server Error
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        tracing::debug!("{}", detail);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Требуется авторизация"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Недействительный токен доступа"),
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Срок действия токена истёк"),
            Self::MissingRefreshToken | Self::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                "Сессия истекла, войдите снова",
            ),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Неверный email или пароль"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Пользователь не найден"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Недостаточно прав"),
            Self::EmailTaken(_) => (
                StatusCode::CONFLICT,
                "Пользователь с таким email уже зарегистрирован",
            ),
            Self::TokenEncoding(_) | Self::PasswordHash(_) => {
                tracing::error!("{}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Внутренняя ошибка сервера")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
