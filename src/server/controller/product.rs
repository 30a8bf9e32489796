use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, PaginationQuery},
        product::{ProductDto, ProductListItemDto, ProductListQuery, ProductPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::ProductListItem,
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Browse the catalog.
///
/// Only active products are listed. `category` is a category slug and also
/// matches products of its direct subcategories; an unknown slug yields an
/// empty page.
///
/// # Returns
/// - `200 OK` - Page of products with pagination metadata
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = PRODUCT_TAG,
    params(ProductListQuery),
    responses(
        (status = 200, description = "Page of products", body = DataDto<Vec<ProductListItemDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = PaginationQuery::new(query.page, query.per_page).clamped();

    let products = ProductService::new(&state.db)
        .get_public_page(query, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto(ProductListItem::into_dto))))
}

/// Get a product page by slug. Inactive products are reported as missing.
#[utoipa::path(
    get,
    path = "/api/v1/products/{slug}",
    tag = PRODUCT_TAG,
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product detail", body = DataDto<ProductDto>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .get_public_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(product.into_dto()))))
}

/// List products for the admin panel, inactive ones included.
///
/// Accepts the same filters as the public listing.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive products
#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(ProductListQuery),
    responses(
        (status = 200, description = "Page of products", body = DataDto<Vec<ProductListItemDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (page, per_page) = PaginationQuery::new(query.page, query.per_page).clamped();
    let products = ProductService::new(&state.db)
        .get_admin_page(query, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto(ProductListItem::into_dto))))
}

/// Get any product by ID for editing.
#[utoipa::path(
    get,
    path = "/api/v1/admin/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product detail", body = DataDto<ProductDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(product.into_dto()))))
}

/// Create a product.
///
/// # Access Control
/// - `Admin` - Only admins can edit the catalog
///
/// # Returns
/// - `201 Created` - The new product
/// - `400 Bad Request` - Empty name or SKU, non-positive price, negative stock,
///   old price not above the price, or unknown category
/// - `409 Conflict` - Slug or SKU already in use
#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    request_body = ProductPayloadDto,
    responses(
        (status = 201, description = "Product created", body = DataDto<ProductDto>),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Slug or SKU already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(product.into_dto()))))
}

/// Replace a product's fields and image list.
///
/// # Access Control
/// - `Admin` - Only admins can edit the catalog
#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductPayloadDto,
    responses(
        (status = 200, description = "Product updated", body = DataDto<ProductDto>),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Slug or SKU already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::new(product.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ProductService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
