use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quantity limits for a single cart line.
pub const MIN_CART_QUANTITY: i32 = 1;
pub const MAX_CART_QUANTITY: i32 = 99;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CartItemDto {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub stock: i32,
    pub quantity: i32,
    pub line_total: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    pub subtotal: i64,
    /// Sum of quantities over all lines.
    pub item_count: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AddCartItemDto {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateCartItemDto {
    /// New quantity. Zero removes the line.
    pub quantity: i32,
}
