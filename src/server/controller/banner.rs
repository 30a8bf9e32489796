use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        banner::{BannerDto, BannerPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::banner::Banner,
        service::banner::BannerService,
        state::AppState,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

/// Active home page banners in display order.
#[utoipa::path(
    get,
    path = "/api/v1/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "Active banners", body = DataDto<Vec<BannerDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let banners = BannerService::new(&state.db).get_all(true).await?;

    Ok((StatusCode::OK, Json(DataDto::new(into_dtos(banners)))))
}

/// Every banner, hidden ones included.
#[utoipa::path(
    get,
    path = "/api/v1/admin/banners",
    tag = BANNER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All banners", body = DataDto<Vec<BannerDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_banners(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let banners = BannerService::new(&state.db).get_all(false).await?;

    Ok((StatusCode::OK, Json(DataDto::new(into_dtos(banners)))))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/banners",
    tag = BANNER_TAG,
    security(("bearer" = [])),
    request_body = BannerPayloadDto,
    responses(
        (status = 201, description = "Banner created", body = DataDto<BannerDto>),
        (status = 400, description = "Missing title or image", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BannerPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let banner = BannerService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(banner.into_dto()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/banners/{id}",
    tag = BANNER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Banner ID")),
    request_body = BannerPayloadDto,
    responses(
        (status = 200, description = "Banner updated", body = DataDto<BannerDto>),
        (status = 400, description = "Missing title or image", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<BannerPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let banner = BannerService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(banner.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/banners/{id}",
    tag = BANNER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    BannerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn into_dtos(banners: Vec<Banner>) -> Vec<BannerDto> {
    banners.into_iter().map(Banner::into_dto).collect()
}
