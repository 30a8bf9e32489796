//! Aggregate counts for the admin dashboard.

use std::collections::BTreeMap;

use sea_orm::{
    sea_query::{Alias, Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::model::order::OrderStatus;

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_products(&self) -> Result<u64, DbErr> {
        entity::prelude::Product::find().count(self.db).await
    }

    pub async fn count_users(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn count_pending_reviews(&self) -> Result<u64, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::IsApproved.eq(false))
            .count(self.db)
            .await
    }

    /// Order count per stored status string
    pub async fn count_orders_by_status(&self) -> Result<BTreeMap<String, u64>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Status)
            .column_as(entity::order::Column::Id.count(), "order_count")
            .group_by(entity::order::Column::Status)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| (status, count.max(0) as u64))
            .collect())
    }

    /// Sum of order totals excluding cancelled orders, in kopecks
    pub async fn revenue(&self) -> Result<i64, DbErr> {
        // Postgres widens SUM(bigint) to numeric; cast back so it decodes as i64.
        let sum = Func::cast_as(
            Func::sum(Expr::col(entity::order::Column::Total)),
            Alias::new("BIGINT"),
        );

        let revenue: Option<Option<i64>> = entity::prelude::Order::find()
            .select_only()
            .column_as(SimpleExpr::from(sum), "revenue")
            .filter(entity::order::Column::Status.ne(OrderStatus::Cancelled.as_str()))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(revenue.flatten().unwrap_or(0))
    }
}
