use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_product_table::Product, m20250301_000006_create_cart_table::Cart,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItem::Id))
                    .col(integer(CartItem::CartId))
                    .col(integer(CartItem::ProductId))
                    .col(integer(CartItem::Quantity))
                    .col(
                        timestamp_with_time_zone(CartItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_cart_id")
                            .from(CartItem::Table, CartItem::CartId)
                            .to(Cart::Table, Cart::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_product_id")
                            .from(CartItem::Table, CartItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_item_cart_product")
                    .table(CartItem::Table)
                    .col(CartItem::CartId)
                    .col(CartItem::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    Table,
    Id,
    CartId,
    ProductId,
    Quantity,
    CreatedAt,
}
