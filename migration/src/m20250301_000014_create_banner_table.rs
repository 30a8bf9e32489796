use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Title))
                    .col(string_null(Banner::Subtitle))
                    .col(string(Banner::ImageUrl))
                    .col(string_null(Banner::LinkUrl))
                    .col(integer(Banner::SortOrder).default(0))
                    .col(boolean(Banner::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Banner::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Title,
    Subtitle,
    ImageUrl,
    LinkUrl,
    SortOrder,
    IsActive,
    CreatedAt,
}
