use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    /// Number of active products directly in this category.
    pub product_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CategoryDetailDto {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub children: Vec<CategoryDto>,
}

/// Minimal category reference embedded in product responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CategorySummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CategoryPayloadDto {
    pub name: String,
    /// Generated from the name when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}
