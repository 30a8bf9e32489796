use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        stats::DashboardStatsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Dashboard counters for the admin panel.
///
/// Revenue is the sum of totals over all orders that were not cancelled.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = STATS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DataDto<DashboardStatsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(DataDto::new(stats))))
}
