use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerOrder::Id))
                    .col(string_uniq(CustomerOrder::OrderNumber))
                    .col(integer(CustomerOrder::UserId))
                    .col(string(CustomerOrder::Status).default("pending"))
                    .col(big_integer(CustomerOrder::Subtotal))
                    .col(big_integer(CustomerOrder::Discount).default(0))
                    .col(big_integer(CustomerOrder::Shipping).default(0))
                    .col(big_integer(CustomerOrder::Total))
                    .col(string_null(CustomerOrder::CouponCode))
                    .col(string(CustomerOrder::CustomerName))
                    .col(string(CustomerOrder::CustomerEmail))
                    .col(string(CustomerOrder::CustomerPhone))
                    .col(text(CustomerOrder::ShippingAddress))
                    .col(text_null(CustomerOrder::Comment))
                    .col(
                        timestamp_with_time_zone(CustomerOrder::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CustomerOrder::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(CustomerOrder::Table, CustomerOrder::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_user_id")
                    .table(CustomerOrder::Table)
                    .col(CustomerOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_status")
                    .table(CustomerOrder::Table)
                    .col(CustomerOrder::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerOrder::Table).to_owned())
            .await
    }
}

/// `order` is a reserved word in SQL, hence the longer identifier.
#[derive(DeriveIden)]
pub enum CustomerOrder {
    #[sea_orm(iden = "order")]
    Table,
    Id,
    OrderNumber,
    UserId,
    Status,
    Subtotal,
    Discount,
    Shipping,
    Total,
    CouponCode,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    ShippingAddress,
    Comment,
    CreatedAt,
    UpdatedAt,
}
