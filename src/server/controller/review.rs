use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        review::{CreateReviewDto, ModerateReviewDto, ReviewDto, ReviewListQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::Review,
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// List approved reviews of a product, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}/reviews",
    tag = REVIEW_TAG,
    params(
        ("slug" = String, Path, description = "Product slug"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of reviews", body = DataDto<Vec<ReviewDto>>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = pagination.clamped();

    let reviews = ReviewService::new(&state.db)
        .get_product_reviews(&slug, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(reviews.into_dto(Review::into_dto))))
}

/// Review a product.
///
/// New reviews stay hidden until an admin approves them.
///
/// # Access Control
/// - Any authenticated user, once per product
///
/// # Returns
/// - `201 Created` - Review awaiting moderation
/// - `400 Bad Request` - Rating outside 1..=5
/// - `404 Not Found` - Product missing or inactive
/// - `409 Conflict` - Caller already reviewed this product
#[utoipa::path(
    post,
    path = "/api/v1/products/{slug}/reviews",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(("slug" = String, Path, description = "Product slug")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = DataDto<ReviewDto>),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Product already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(&user, &slug, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(review.into_dto()))))
}

/// List reviews for moderation, optionally filtered by approval state.
#[utoipa::path(
    get,
    path = "/api/v1/admin/reviews",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(ReviewListQuery),
    responses(
        (status = 200, description = "Page of reviews", body = DataDto<Vec<ReviewDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReviewListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = PaginationQuery::new(query.page, query.per_page).clamped();
    let reviews = ReviewService::new(&state.db)
        .get_paginated(query.approved, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(reviews.into_dto(Review::into_dto))))
}

/// Approve or hide a review.
#[utoipa::path(
    patch,
    path = "/api/v1/admin/reviews/{id}",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    request_body = ModerateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = DataDto<ReviewDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn moderate_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ModerateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let review = ReviewService::new(&state.db)
        .set_approved(id, payload.is_approved)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(review.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/reviews/{id}",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ReviewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
