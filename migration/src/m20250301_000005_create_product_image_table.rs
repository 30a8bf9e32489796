use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_product_table::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductImage::Id))
                    .col(integer(ProductImage::ProductId))
                    .col(string(ProductImage::Url))
                    .col(integer(ProductImage::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_image_product_id")
                            .from(ProductImage::Table, ProductImage::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductImage {
    Table,
    Id,
    ProductId,
    Url,
    Position,
}
