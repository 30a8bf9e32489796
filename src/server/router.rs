use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth, banner, cart, category, coupon, media, order, post, product, review, setting, stats,
        user,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Room for multipart boundaries and headers on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API", version = "1.0.0"),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "user", description = "User administration"),
        (name = "category", description = "Catalog categories"),
        (name = "product", description = "Catalog products"),
        (name = "cart", description = "Shopping cart"),
        (name = "coupon", description = "Discount coupons"),
        (name = "order", description = "Checkout and order processing"),
        (name = "review", description = "Product reviews"),
        (name = "media", description = "Media library"),
        (name = "post", description = "Blog"),
        (name = "banner", description = "Home page banners"),
        (name = "setting", description = "Store settings"),
        (name = "stats", description = "Admin dashboard")
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected operations.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// API routes live under `/api/v1`, the OpenAPI document and Swagger UI under
/// `/api/docs`, and uploaded files are served from the media URL prefix.
///
/// # Returns
/// - `Ok(Router)` - Router with state and layers applied
/// - `Err(AppError::ConfigErr)` - `APP_URL` is not a valid CORS origin
pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        // Catalog
        .routes(routes!(category::get_categories))
        .routes(routes!(category::get_category))
        .routes(routes!(product::get_products))
        .routes(routes!(product::get_product))
        .routes(routes!(
            review::get_product_reviews,
            review::create_review
        ))
        // Cart, coupons and orders
        .routes(routes!(cart::get_cart, cart::clear_cart))
        .routes(routes!(cart::add_cart_item))
        .routes(routes!(cart::update_cart_item, cart::remove_cart_item))
        .routes(routes!(coupon::apply_coupon))
        .routes(routes!(order::checkout, order::get_my_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(order::cancel_order))
        // Content
        .routes(routes!(post::get_posts))
        .routes(routes!(post::get_post))
        .routes(routes!(banner::get_banners))
        .routes(routes!(setting::get_settings))
        // Admin
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user_role))
        .routes(routes!(category::create_category))
        .routes(routes!(
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(
            product::get_admin_products,
            product::create_product
        ))
        .routes(routes!(
            product::get_admin_product,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(coupon::get_coupons, coupon::create_coupon))
        .routes(routes!(coupon::update_coupon, coupon::delete_coupon))
        .routes(routes!(order::get_all_orders))
        .routes(routes!(order::update_order_status))
        .routes(routes!(review::get_reviews))
        .routes(routes!(review::moderate_review, review::delete_review))
        .routes(routes!(media::upload_media, media::get_media))
        .routes(routes!(media::delete_media))
        .routes(routes!(post::get_admin_posts, post::create_post))
        .routes(routes!(
            post::get_admin_post,
            post::update_post,
            post::delete_post
        ))
        .routes(routes!(banner::get_admin_banners, banner::create_banner))
        .routes(routes!(banner::update_banner, banner::delete_banner))
        .routes(routes!(setting::update_settings))
        .routes(routes!(stats::get_stats))
        .split_for_parts();

    let origin = HeaderValue::from_str(&config.app_url).map_err(|e| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        reason: e.to_string(),
    })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let body_limit = state.media.max_bytes + MULTIPART_OVERHEAD_BYTES;

    let router = api_router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .nest_service(&state.media.url_prefix, ServeDir::new(&state.media.dir))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}
