//! SeaORM entity definitions for the storefront schema.
//!
//! One module per table. Money columns hold integer kopecks and every
//! timestamp is stored in UTC.

pub mod prelude;

pub mod banner;
pub mod cart;
pub mod cart_item;
pub mod category;
pub mod coupon;
pub mod media;
pub mod order;
pub mod order_item;
pub mod post;
pub mod product;
pub mod product_image;
pub mod refresh_token;
pub mod review;
pub mod setting;
pub mod user;
