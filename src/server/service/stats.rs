use sea_orm::DatabaseConnection;

use crate::{
    model::{order::OrderStatus, stats::DashboardStatsDto},
    server::{data::stats::StatsRepository, error::AppError},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dashboard counters. Every order status is present in the breakdown,
    /// with zero for statuses that have no orders.
    pub async fn dashboard(&self) -> Result<DashboardStatsDto, AppError> {
        let repo = StatsRepository::new(self.db);

        let mut orders_by_status = repo.count_orders_by_status().await?;
        for status in OrderStatus::ALL {
            orders_by_status
                .entry(status.as_str().to_string())
                .or_insert(0);
        }

        Ok(DashboardStatsDto {
            product_count: repo.count_products().await?,
            user_count: repo.count_users().await?,
            order_count: orders_by_status.values().sum(),
            orders_by_status,
            revenue: repo.revenue().await?,
            pending_review_count: repo.count_pending_reviews().await?,
        })
    }
}
