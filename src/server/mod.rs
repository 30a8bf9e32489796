//! Storefront REST API: HTTP handlers, shop rules and persistence.
//!
//! Axum serves the `/api/v1` routes, SeaORM talks to PostgreSQL and utoipa
//! describes every endpoint in the OpenAPI document behind `/api/docs`.
//!
//! # Layers
//!
//! - `controller/` - One module per resource. Guards the request, turns DTOs
//!   into params and wraps results in the `{data, meta}` envelope
//! - `service/` - Shop rules: cart limits, coupon checks, pricing, checkout
//!   and cancellation transactions, moderation
//! - `data/` - Repositories over the SeaORM entities, returning `DbErr`
//! - `model/` - Domain types converted from entities, plus write params
//! - `error/` - `AppError` and its mapping to status codes and Russian messages
//! - `middleware/` - `AuthGuard` for bearer access tokens and admin checks
//!
//! # Infrastructure
//!
//! - `config` - Environment variables
//! - `state` - Database pool, token issuer, media storage
//! - `startup` - Migrations, upload directory, bootstrap admin
//! - `router` - Route table, Swagger UI, CORS, upload serving
//! - `scheduler/` - Hourly cleanup of expired refresh tokens
//! - `util/` - Slugs, order numbers, email and token helpers
//!
//! A request passes router → controller (guard) → service → repository and
//! back, with the domain model converted to a DTO just before responding.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
