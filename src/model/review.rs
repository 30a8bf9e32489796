use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::default_per_page;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateReviewDto {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ModerateReviewDto {
    pub is_approved: bool,
}

#[derive(Deserialize, Debug, Clone, IntoParams)]
pub struct ReviewListQuery {
    /// Only approved (`true`) or only pending (`false`) reviews.
    pub approved: Option<bool>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}
