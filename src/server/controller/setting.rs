use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        setting::SettingsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

/// Store settings as a flat key/value map.
///
/// Public: the storefront reads the store name, contacts and shipping
/// options from here.
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "All settings", body = DataDto<SettingsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = SettingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(DataDto::new(SettingsDto(settings)))))
}

/// Upsert settings.
///
/// Only the given keys are written; others keep their values. Amount settings
/// (`shipping_cost`, `free_shipping_threshold`) must be non-negative integers
/// in kopecks.
///
/// # Access Control
/// - `Admin` - Only admins can change store settings
///
/// # Returns
/// - `200 OK` - Full settings map after the update
/// - `400 Bad Request` - Blank key or invalid amount
#[utoipa::path(
    put,
    path = "/api/v1/admin/settings",
    tag = SETTING_TAG,
    security(("bearer" = [])),
    request_body = SettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = DataDto<SettingsDto>),
        (status = 400, description = "Invalid setting value", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingService::new(&state.db).update(payload.0).await?;

    Ok((StatusCode::OK, Json(DataDto::new(SettingsDto(settings)))))
}
