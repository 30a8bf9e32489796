use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        coupon::{ApplyCouponDto, CouponDto, CouponPayloadDto, CouponQuoteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::coupon::Coupon,
        service::coupon::CouponService,
        state::AppState,
    },
};

/// Tag for grouping coupon endpoints in OpenAPI documentation
pub static COUPON_TAG: &str = "coupon";

/// Preview a coupon against the caller's cart.
///
/// Nothing is redeemed; the coupon is only checked and the resulting totals
/// are returned. Redemption happens at checkout.
///
/// # Returns
/// - `200 OK` - Discount, shipping and total for the current cart
/// - `400 Bad Request` - Empty cart, or the coupon cannot be used (inactive,
///   not started, expired, exhausted or below its minimum order amount)
/// - `404 Not Found` - Unknown code
#[utoipa::path(
    post,
    path = "/api/v1/coupons/apply",
    tag = COUPON_TAG,
    security(("bearer" = [])),
    request_body = ApplyCouponDto,
    responses(
        (status = 200, description = "Coupon quote", body = DataDto<CouponQuoteDto>),
        (status = 400, description = "Coupon not applicable", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_coupon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ApplyCouponDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let quote = CouponService::new(&state.db)
        .apply(user.id, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(quote.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/coupons",
    tag = COUPON_TAG,
    security(("bearer" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of coupons", body = DataDto<Vec<CouponDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coupons(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = pagination.clamped();
    let coupons = CouponService::new(&state.db)
        .get_paginated(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(coupons.into_dto(Coupon::into_dto))))
}

/// Create a coupon. The code is stored uppercase.
///
/// # Access Control
/// - `Admin` - Only admins can manage coupons
///
/// # Returns
/// - `201 Created` - The new coupon
/// - `400 Bad Request` - Value out of range or expiry before start
/// - `409 Conflict` - Code already exists
#[utoipa::path(
    post,
    path = "/api/v1/admin/coupons",
    tag = COUPON_TAG,
    security(("bearer" = [])),
    request_body = CouponPayloadDto,
    responses(
        (status = 201, description = "Coupon created", body = DataDto<CouponDto>),
        (status = 400, description = "Invalid coupon data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CouponPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let coupon = CouponService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(coupon.into_dto()))))
}

/// Update a coupon. The usage counter is left untouched.
#[utoipa::path(
    put,
    path = "/api/v1/admin/coupons/{id}",
    tag = COUPON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Coupon ID")),
    request_body = CouponPayloadDto,
    responses(
        (status = 200, description = "Coupon updated", body = DataDto<CouponDto>),
        (status = 400, description = "Invalid coupon data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 409, description = "Code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coupon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CouponPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let coupon = CouponService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(coupon.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/coupons/{id}",
    tag = COUPON_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Coupon ID")),
    responses(
        (status = 204, description = "Coupon deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CouponService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
