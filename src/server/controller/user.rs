use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        user::{UpdateUserRoleDto, UserDto, UserListQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List user accounts.
///
/// Newest accounts first. `search` matches a fragment of the email or name.
///
/// # Access Control
/// - `Admin` - Only admins can browse accounts
///
/// # Returns
/// - `200 OK` - Page of users with pagination metadata
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = DataDto<Vec<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = PaginationQuery::new(query.page, query.per_page).clamped();
    let users = UserService::new(&state.db)
        .get_paginated(query.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

/// Change a user's role.
///
/// # Access Control
/// - `Admin` - Only admins can grant or revoke roles
///
/// # Arguments
/// - `id` - Account to update
/// - `payload` - New role
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Admin tried to demote themselves
/// - `404 Not Found` - No such user
#[utoipa::path(
    patch,
    path = "/api/v1/admin/users/{id}/role",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = DataDto<UserDto>),
        (status = 400, description = "Cannot demote yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(&actor, id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(user.into_dto()))))
}
