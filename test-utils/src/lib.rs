//! Storefront Test Utils
//!
//! Provides shared testing utilities for the storefront server. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases and
//! factories that insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Per-entity factories (`UserFactory`, `ProductFactory`, ...)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_products() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let product = factory::product::create_product(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
