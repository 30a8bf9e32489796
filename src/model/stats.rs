use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DashboardStatsDto {
    pub product_count: u64,
    pub user_count: u64,
    pub order_count: u64,
    /// Order count per status, every status present.
    pub orders_by_status: BTreeMap<String, u64>,
    /// Sum of totals over orders that were not cancelled, in kopecks.
    pub revenue: i64,
    pub pending_review_count: u64,
}
