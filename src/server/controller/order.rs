use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        order::{CheckoutDto, OrderDto, OrderListItemDto, OrderListQuery, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{CheckoutParams, OrderSummary},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order from the caller's cart.
///
/// Stock is reserved, the coupon redeemed and the cart emptied atomically;
/// if any step fails nothing is changed.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `payload` - Contact details, shipping address and optional coupon code
///
/// # Returns
/// - `201 Created` - The new order in status `pending`
/// - `400 Bad Request` - Missing contact data, empty cart, unavailable product,
///   insufficient stock or coupon not applicable
/// - `404 Not Found` - Unknown coupon code
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    request_body = CheckoutDto,
    responses(
        (status = 201, description = "Order placed", body = DataDto<OrderDto>),
        (status = 400, description = "Checkout rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .checkout(CheckoutParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(order.into_dto()))))
}

/// List the caller's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of orders", body = DataDto<Vec<OrderListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let (page, per_page) = pagination.clamped();
    let orders = OrderService::new(&state.db)
        .get_user_orders(user.id, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(OrderSummary::into_dto))))
}

/// Get an order with its lines.
///
/// # Access Control
/// - Owner of the order
/// - `Admin` - Any order
///
/// Orders of other customers are reported as missing.
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order detail", body = DataDto<OrderDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db).get_for_user(&user, id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(order.into_dto()))))
}

/// Cancel one of the caller's pending orders.
///
/// Items go back to stock and the coupon redemption is released.
#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/cancel",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = DataDto<OrderDto>),
        (status = 400, description = "Order is no longer pending", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let order = OrderService::new(&state.db)
        .cancel_by_customer(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(order.into_dto()))))
}

/// List all orders, optionally filtered by status.
///
/// # Access Control
/// - `Admin` - Only admins can see every customer's orders
#[utoipa::path(
    get,
    path = "/api/v1/admin/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(OrderListQuery),
    responses(
        (status = 200, description = "Page of orders", body = DataDto<Vec<OrderListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<OrderListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = PaginationQuery::new(query.page, query.per_page).clamped();
    let orders = OrderService::new(&state.db)
        .get_all_orders(query.status, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(OrderSummary::into_dto))))
}

/// Move an order to another status.
///
/// Allowed: pending → paid or cancelled, paid → shipped or cancelled,
/// shipped → delivered. Cancelling restocks the items.
///
/// # Access Control
/// - `Admin` - Only admins can process orders
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Transition not allowed
/// - `404 Not Found` - No such order
#[utoipa::path(
    patch,
    path = "/api/v1/admin/orders/{id}/status",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = DataDto<OrderDto>),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let order = OrderService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(order.into_dto()))))
}
