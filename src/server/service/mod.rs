//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Checkout and cancellation run inside one transaction

pub mod auth;
pub mod banner;
pub mod cart;
pub mod category;
pub mod coupon;
pub mod media;
pub mod order;
pub mod post;
pub mod pricing;
pub mod product;
pub mod review;
pub mod setting;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;

/// Trims an optional text field, treating blank input as absent.
pub(crate) fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
