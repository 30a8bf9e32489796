use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        category::{CategoryDetailDto, CategoryDto, CategoryPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// Ordered by `sort_order`, then name. Each entry carries the number of active
/// products directly in the category.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = DataDto<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dtos))))
}

/// Get a category by slug, together with its direct children.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    tag = CATEGORY_TAG,
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category with children", body = DataDto<CategoryDetailDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(DataDto::new(category.into_dto()))))
}

/// Create a category.
///
/// The slug is derived from the name when omitted.
///
/// # Access Control
/// - `Admin` - Only admins can edit the catalog
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Empty name or unknown parent
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    request_body = CategoryPayloadDto,
    responses(
        (status = 201, description = "Category created", body = DataDto<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CategoryPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(category.into_dto()))))
}

/// Update a category.
///
/// # Access Control
/// - `Admin` - Only admins can edit the catalog
///
/// # Returns
/// - `200 OK` - Updated category
/// - `400 Bad Request` - Invalid data, or the parent would create a cycle
/// - `404 Not Found` - No such category
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category updated", body = DataDto<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = CategoryService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(category.into_dto()))))
}

/// Delete a category. Its products and subcategories are kept and detached.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    tag = CATEGORY_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
