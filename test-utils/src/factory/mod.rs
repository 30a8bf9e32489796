//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for default creation.
//! Factories do not create their parents; pass the ids of entities created
//! earlier, or use the `helpers` module which wires a full hierarchy.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let product = factory::product::ProductFactory::new(&db)
//!     .price(150_00)
//!     .stock(3)
//!     .build()
//!     .await?;
//! ```

pub mod cart;
pub mod category;
pub mod coupon;
pub mod helpers;
pub mod order;
pub mod post;
pub mod product;
pub mod review;
pub mod setting;
pub mod user;

pub use cart::{add_cart_item, create_cart};
pub use category::create_category;
pub use coupon::create_coupon;
pub use order::create_order;
pub use post::create_post;
pub use product::create_product;
pub use review::create_review;
pub use setting::create_setting;
pub use user::{create_admin, create_user};
