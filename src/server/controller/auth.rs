use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        auth::{AccessTokenDto, AuthResponseDto, LoginDto, RegisterDto, TOKEN_TYPE},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::{AuthService, IssuedSession},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Name of the httpOnly cookie carrying the refresh token.
pub static REFRESH_COOKIE: &str = "refresh_token";

/// The refresh cookie is only sent to the auth endpoints.
static REFRESH_COOKIE_PATH: &str = "/api/v1/auth";

/// Register a customer account.
///
/// Creates the account, signs it in and sets the refresh token cookie.
///
/// # Returns
/// - `201 Created` - Account created, access token in body
/// - `400 Bad Request` - Invalid email, short password or missing name
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = DataDto<AuthResponseDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParams::from_dto(payload))
        .await?;

    let jar = jar.add(refresh_cookie(&state, &session));

    Ok((StatusCode::CREATED, jar, Json(DataDto::new(auth_response(session)))))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Signed in, access token in body, refresh cookie set
/// - `401 Unauthorized` - Wrong email or password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = DataDto<AuthResponseDto>),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    let jar = jar.add(refresh_cookie(&state, &session));

    Ok((StatusCode::OK, jar, Json(DataDto::new(auth_response(session)))))
}

/// Rotate the refresh token and issue a new access token.
///
/// Reads the refresh cookie, invalidates it and sets a fresh one.
///
/// # Returns
/// - `200 OK` - New access token
/// - `401 Unauthorized` - Cookie missing, unknown or expired
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Token refreshed", body = DataDto<AccessTokenDto>),
        (status = 401, description = "Refresh token missing or invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let presented = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());

    let session = AuthService::new(&state.db, &state.tokens)
        .refresh(presented.as_deref())
        .await?;

    let jar = jar.add(refresh_cookie(&state, &session));
    let body = AccessTokenDto {
        access_token: session.access_token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: session.expires_in,
    };

    Ok((StatusCode::OK, jar, Json(DataDto::new(body))))
}

/// Sign out: revoke the refresh token and clear its cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let presented = jar.get(REFRESH_COOKIE).map(|c| c.value().to_string());

    AuthService::new(&state.db, &state.tokens)
        .logout(presented.as_deref())
        .await?;

    let jar = jar.remove(Cookie::build(REFRESH_COOKIE).path(REFRESH_COOKIE_PATH));

    Ok((StatusCode::NO_CONTENT, jar))
}

/// Get the signed-in user.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = DataDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(user.into_dto()))))
}

fn refresh_cookie(state: &AppState, session: &IssuedSession) -> Cookie<'static> {
    let max_age = time::Duration::seconds(state.tokens.refresh_ttl().num_seconds());

    Cookie::build((REFRESH_COOKIE, session.refresh_token.clone()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path(REFRESH_COOKIE_PATH)
        .secure(state.cookie_secure)
        .max_age(max_age)
        .build()
}

fn auth_response(session: IssuedSession) -> AuthResponseDto {
    AuthResponseDto {
        user: session.user.into_dto(),
        access_token: session.access_token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: session.expires_in,
    }
}
