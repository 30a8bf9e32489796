use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::default_per_page, category::CategorySummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductListItemDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub sku: String,
    /// Price in kopecks.
    pub price: i64,
    pub compare_at_price: Option<i64>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub is_featured: bool,
    /// First image, if any.
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ReviewSummaryDto {
    /// Mean rating of approved reviews rounded to one decimal, absent without reviews.
    pub average_rating: Option<f64>,
    pub review_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: String,
    pub price: i64,
    pub compare_at_price: Option<i64>,
    pub stock: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub category: Option<CategorySummaryDto>,
    pub images: Vec<String>,
    pub reviews: ReviewSummaryDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ProductPayloadDto {
    pub name: String,
    /// Generated from the name when omitted.
    pub slug: Option<String>,
    pub sku: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub compare_at_price: Option<i64>,
    #[serde(default)]
    pub stock: i32,
    pub category_id: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Image URLs in display order. Replaces the stored list on update.
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Name,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct ProductListQuery {
    /// Category slug. Products of its direct children are included.
    pub category: Option<String>,
    /// Substring of the name or SKU.
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub featured: Option<bool>,
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub sort: ProductSort,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}
