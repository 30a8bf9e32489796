//! HTTP handlers, one module per resource.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters and wrap results in the `{ data, meta }`
//! envelope. Business rules live in the service layer.

pub mod auth;
pub mod banner;
pub mod cart;
pub mod category;
pub mod coupon;
pub mod media;
pub mod order;
pub mod post;
pub mod product;
pub mod review;
pub mod setting;
pub mod stats;
pub mod user;
