use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_auto(Coupon::Id))
                    .col(string_uniq(Coupon::Code))
                    .col(string(Coupon::Kind))
                    .col(big_integer(Coupon::Value))
                    .col(big_integer_null(Coupon::MinOrderAmount))
                    .col(integer_null(Coupon::MaxUses))
                    .col(integer(Coupon::UsedCount).default(0))
                    .col(timestamp_with_time_zone_null(Coupon::StartsAt))
                    .col(timestamp_with_time_zone_null(Coupon::ExpiresAt))
                    .col(boolean(Coupon::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Coupon::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    Code,
    Kind,
    Value,
    MinOrderAmount,
    MaxUses,
    UsedCount,
    StartsAt,
    ExpiresAt,
    IsActive,
    CreatedAt,
}
