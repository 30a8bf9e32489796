//! Shared DTO layer.
//!
//! Request and response bodies exchanged between the API and its clients (the
//! storefront and the admin dashboard), together with the enums and validation
//! limits both sides agree on. Every type here derives `ToSchema` so it shows up
//! in the OpenAPI document.

pub mod api;
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
