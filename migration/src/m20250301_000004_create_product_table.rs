use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string_uniq(Product::Slug))
                    .col(string_uniq(Product::Sku))
                    .col(text(Product::Description))
                    .col(big_integer(Product::Price))
                    .col(big_integer_null(Product::CompareAtPrice))
                    .col(integer(Product::Stock).default(0))
                    .col(integer_null(Product::CategoryId))
                    .col(boolean(Product::IsActive).default(true))
                    .col(boolean(Product::IsFeatured).default(false))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_category_id")
                            .from(Product::Table, Product::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_category_id")
                    .table(Product::Table)
                    .col(Product::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Slug,
    Sku,
    Description,
    Price,
    CompareAtPrice,
    Stock,
    CategoryId,
    IsActive,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}
