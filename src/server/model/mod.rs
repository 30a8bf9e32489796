//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the service boundary and transformed to DTOs at the controller boundary.
//! Enum columns stored as strings are parsed into typed enums here, so a bad value in
//! the database surfaces as an internal error instead of leaking into responses.

pub mod banner;
pub mod cart;
pub mod category;
pub mod coupon;
pub mod media;
pub mod order;
pub mod page;
pub mod post;
pub mod product;
pub mod review;
pub mod user;
