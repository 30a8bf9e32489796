use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        post::{PostDto, PostPayloadDto, PostSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::post::Post,
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping blog endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// List published posts, most recently published first.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = POST_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of posts", body = DataDto<Vec<PostSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = pagination.clamped();

    let posts = PostService::new(&state.db)
        .get_published(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto(Post::into_summary_dto))))
}

/// Get a published post by slug. Drafts are reported as missing.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}",
    tag = POST_TAG,
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post", body = DataDto<PostDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .get_published_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(post.into_dto()))))
}

/// List every post, drafts included, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can see drafts
#[utoipa::path(
    get,
    path = "/api/v1/admin/posts",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of posts", body = DataDto<Vec<PostSummaryDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = pagination.clamped();
    let posts = PostService::new(&state.db).get_all(page, per_page).await?;

    Ok((StatusCode::OK, Json(posts.into_dto(Post::into_summary_dto))))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = DataDto<PostDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let post = PostService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(post.into_dto()))))
}

/// Write a post. The caller is recorded as the author.
///
/// Publishing sets `published_at` the first time only.
///
/// # Access Control
/// - `Admin` - Only admins can write posts
///
/// # Returns
/// - `201 Created` - The new post
/// - `400 Bad Request` - Empty title or content
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/v1/admin/posts",
    tag = POST_TAG,
    security(("bearer" = [])),
    request_body = PostPayloadDto,
    responses(
        (status = 201, description = "Post created", body = DataDto<PostDto>),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PostPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let post = PostService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(post.into_dto()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    request_body = PostPayloadDto,
    responses(
        (status = 200, description = "Post updated", body = DataDto<PostDto>),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PostPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let post = PostService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(post.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/posts/{id}",
    tag = POST_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    PostService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
