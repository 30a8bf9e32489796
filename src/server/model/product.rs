//! Product domain models, listing filters and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{ProductDto, ProductListItemDto, ProductSort, ReviewSummaryDto},
    server::model::category::Category,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: String,
    /// Price in kopecks.
    pub price: i64,
    pub compare_at_price: Option<i64>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            sku: entity.sku,
            description: entity.description,
            price: entity.price,
            compare_at_price: entity.compare_at_price,
            stock: entity.stock,
            category_id: entity.category_id,
            is_active: entity.is_active,
            is_featured: entity.is_featured,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Product row for listings with its first image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListItem {
    pub product: Product,
    pub image_url: Option<String>,
}

impl ProductListItem {
    pub fn into_dto(self) -> ProductListItemDto {
        let p = self.product;
        ProductListItemDto {
            id: p.id,
            name: p.name,
            slug: p.slug,
            sku: p.sku,
            price: p.price,
            compare_at_price: p.compare_at_price,
            stock: p.stock,
            category_id: p.category_id,
            is_active: p.is_active,
            is_featured: p.is_featured,
            image_url: self.image_url,
        }
    }
}

/// Approved review statistics for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSummary {
    pub average_rating: Option<f64>,
    pub review_count: u64,
}

impl ReviewSummary {
    /// Builds the summary from the sum and count of approved ratings.
    ///
    /// The average is rounded to one decimal place.
    pub fn from_totals(rating_sum: i64, review_count: u64) -> Self {
        let average_rating = (review_count > 0)
            .then(|| (rating_sum as f64 / review_count as f64 * 10.0).round() / 10.0);

        Self {
            average_rating,
            review_count,
        }
    }
}

/// Full product page: product, category, ordered images and review summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub category: Option<Category>,
    pub images: Vec<String>,
    pub reviews: ReviewSummary,
}

impl ProductDetail {
    pub fn into_dto(self) -> ProductDto {
        let p = self.product;
        ProductDto {
            id: p.id,
            name: p.name,
            slug: p.slug,
            sku: p.sku,
            description: p.description,
            price: p.price,
            compare_at_price: p.compare_at_price,
            stock: p.stock,
            is_active: p.is_active,
            is_featured: p.is_featured,
            category: self.category.map(Category::into_summary_dto),
            images: self.images,
            reviews: ReviewSummaryDto {
                average_rating: self.reviews.average_rating,
                review_count: self.reviews.review_count,
            },
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Resolved listing filter handed to the repository.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Restrict to these category ids (a category and its children).
    pub category_ids: Option<Vec<i32>>,
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub featured: Option<bool>,
    pub in_stock: bool,
    /// Admin listings see inactive products too.
    pub include_inactive: bool,
    pub sort: ProductSort,
}

/// Validated fields for creating or updating a product. `slug` is final.
#[derive(Debug, Clone)]
pub struct ProductParams {
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: String,
    pub price: i64,
    pub compare_at_price: Option<i64>,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub is_featured: bool,
    pub images: Vec<String>,
}
