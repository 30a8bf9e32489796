//! Category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::category::{CategoryDetailDto, CategoryDto, CategorySummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            parent_id: entity.parent_id,
            image_url: entity.image_url,
            sort_order: entity.sort_order,
            created_at: entity.created_at,
        }
    }

    pub fn into_summary_dto(self) -> CategorySummaryDto {
        CategorySummaryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

/// Category together with the number of active products assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    pub category: Category,
    pub product_count: u64,
}

impl CategoryWithCount {
    pub fn into_dto(self) -> CategoryDto {
        let c = self.category;
        CategoryDto {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            parent_id: c.parent_id,
            image_url: c.image_url,
            sort_order: c.sort_order,
            product_count: self.product_count,
        }
    }
}

/// Category page: the category and its direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: CategoryWithCount,
    pub children: Vec<CategoryWithCount>,
}

impl CategoryDetail {
    pub fn into_dto(self) -> CategoryDetailDto {
        CategoryDetailDto {
            category: self.category.into_dto(),
            children: self.children.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

/// Validated fields for creating or updating a category. `slug` is final.
#[derive(Debug, Clone)]
pub struct CategoryParams {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
    pub sort_order: i32,
}
