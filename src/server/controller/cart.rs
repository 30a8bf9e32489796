use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        cart::{AddCartItemDto, CartDto, UpdateCartItemDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the caller's cart with current prices and stock.
#[utoipa::path(
    get,
    path = "/api/v1/cart",
    tag = CART_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current cart", body = DataDto<CartDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(cart.into_dto()))))
}

/// Add a product to the cart.
///
/// Adding a product already in the cart increases its quantity.
///
/// # Returns
/// - `200 OK` - Cart after the change
/// - `400 Bad Request` - Quantity outside 1..=99 or more than in stock
/// - `404 Not Found` - Product missing or inactive
#[utoipa::path(
    post,
    path = "/api/v1/cart/items",
    tag = CART_TAG,
    security(("bearer" = [])),
    request_body = AddCartItemDto,
    responses(
        (status = 200, description = "Cart after the change", body = DataDto<CartDto>),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .add_item(user.id, payload.product_id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(cart.into_dto()))))
}

/// Set the quantity of a cart line. A quantity of zero removes the line.
#[utoipa::path(
    patch,
    path = "/api/v1/cart/items/{product_id}",
    tag = CART_TAG,
    security(("bearer" = [])),
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Cart after the change", body = DataDto<CartDto>),
        (status = 400, description = "Invalid quantity or insufficient stock", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not in cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .update_item(user.id, product_id, payload.quantity)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(cart.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/cart/items/{product_id}",
    tag = CART_TAG,
    security(("bearer" = [])),
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Cart after the change", body = DataDto<CartDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Product not in cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db)
        .remove_item(user.id, product_id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(cart.into_dto()))))
}

/// Remove every line from the caller's cart.
#[utoipa::path(
    delete,
    path = "/api/v1/cart",
    tag = CART_TAG,
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Cart emptied"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    CartService::new(&state.db).clear(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
