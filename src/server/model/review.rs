//! Review domain model.

use chrono::{DateTime, Utc};

use crate::model::review::ReviewDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    /// Display name of the reviewing user.
    pub author_name: String,
    pub rating: i32,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::review::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            author_name,
            rating: entity.rating,
            comment: entity.comment,
            is_approved: entity.is_approved,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            product_id: self.product_id,
            user_id: self.user_id,
            author_name: self.author_name,
            rating: self.rating,
            comment: self.comment,
            is_approved: self.is_approved,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub product_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
}
