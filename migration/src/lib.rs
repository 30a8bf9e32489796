pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_refresh_token_table;
mod m20250301_000003_create_category_table;
mod m20250301_000004_create_product_table;
mod m20250301_000005_create_product_image_table;
mod m20250301_000006_create_cart_table;
mod m20250301_000007_create_cart_item_table;
mod m20250301_000008_create_coupon_table;
mod m20250301_000009_create_order_table;
mod m20250301_000010_create_order_item_table;
mod m20250301_000011_create_review_table;
mod m20250301_000012_create_media_table;
mod m20250301_000013_create_post_table;
mod m20250301_000014_create_banner_table;
mod m20250301_000015_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_refresh_token_table::Migration),
            Box::new(m20250301_000003_create_category_table::Migration),
            Box::new(m20250301_000004_create_product_table::Migration),
            Box::new(m20250301_000005_create_product_image_table::Migration),
            Box::new(m20250301_000006_create_cart_table::Migration),
            Box::new(m20250301_000007_create_cart_item_table::Migration),
            Box::new(m20250301_000008_create_coupon_table::Migration),
            Box::new(m20250301_000009_create_order_table::Migration),
            Box::new(m20250301_000010_create_order_item_table::Migration),
            Box::new(m20250301_000011_create_review_table::Migration),
            Box::new(m20250301_000012_create_media_table::Migration),
            Box::new(m20250301_000013_create_post_table::Migration),
            Box::new(m20250301_000014_create_banner_table::Migration),
            Box::new(m20250301_000015_create_setting_table::Migration),
        ]
    }
}
