use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_product_table::Product,
    m20250301_000009_create_order_table::CustomerOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer_null(OrderItem::ProductId))
                    .col(string(OrderItem::ProductName))
                    .col(string(OrderItem::Sku))
                    .col(big_integer(OrderItem::UnitPrice))
                    .col(integer(OrderItem::Quantity))
                    .col(big_integer(OrderItem::LineTotal))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(CustomerOrder::Table, CustomerOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_product_id")
                            .from(OrderItem::Table, OrderItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    OrderId,
    ProductId,
    ProductName,
    Sku,
    UnitPrice,
    Quantity,
    LineTotal,
}
