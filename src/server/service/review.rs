//! Product review service.
//!
//! New reviews start unapproved and only show up on the storefront, and in
//! the product rating, once an admin approves them.

use sea_orm::DatabaseConnection;

use crate::{
    model::review::{CreateReviewDto, MAX_RATING, MIN_RATING},
    server::{
        data::{
            product::ProductRepository,
            review::{ReviewRepository, ReviewWithAuthor},
        },
        error::AppError,
        model::{
            page::Page,
            review::{CreateReviewParams, Review},
            user::User,
        },
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approved reviews of an active product, newest first.
    pub async fn get_product_reviews(
        &self,
        slug: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Review>, AppError> {
        let product_id = self.active_product_id(slug).await?;

        let (reviews, total) = ReviewRepository::new(self.db)
            .get_paginated(Some(product_id), Some(true), page, per_page)
            .await?;

        Ok(Page::new(reviews, total, page, per_page).map(to_review))
    }

    /// Leaves a review on an active product. One review per user and product.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review awaiting moderation
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5
    /// - `Err(AppError::NotFound)` - Product missing or inactive
    /// - `Err(AppError::Conflict)` - User already reviewed this product
    pub async fn create(
        &self,
        author: &User,
        slug: &str,
        payload: CreateReviewDto,
    ) -> Result<Review, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&payload.rating) {
            return Err(AppError::bad_request(format!(
                "Оценка должна быть от {} до {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let product_id = self.active_product_id(slug).await?;
        let review_repo = ReviewRepository::new(self.db);

        if review_repo.exists_for(product_id, author.id).await? {
            return Err(AppError::conflict("Вы уже оставили отзыв на этот товар"));
        }

        let created = review_repo
            .create(CreateReviewParams {
                product_id,
                user_id: author.id,
                rating: payload.rating,
                comment: payload.comment.trim().to_string(),
            })
            .await?;

        tracing::info!(
            "User {} reviewed product {} with rating {}",
            author.id,
            product_id,
            created.rating
        );

        Ok(Review::from_entity(created, author.name.clone()))
    }

    /// Moderation queue and history, optionally filtered by approval state.
    pub async fn get_paginated(
        &self,
        approved: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Review>, AppError> {
        let (reviews, total) = ReviewRepository::new(self.db)
            .get_paginated(None, approved, page, per_page)
            .await?;

        Ok(Page::new(reviews, total, page, per_page).map(to_review))
    }

    pub async fn set_approved(&self, id: i32, is_approved: bool) -> Result<Review, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        if review_repo.set_approved(id, is_approved).await?.is_none() {
            return Err(AppError::not_found("Отзыв не найден"));
        }
        let review = review_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Отзыв не найден"))?;

        Ok(to_review(review))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReviewRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Отзыв не найден"));
        }

        Ok(())
    }

    async fn active_product_id(&self, slug: &str) -> Result<i32, AppError> {
        ProductRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|p| p.is_active)
            .map(|p| p.id)
            .ok_or_else(|| AppError::not_found("Товар не найден"))
    }
}

fn to_review((review, author): ReviewWithAuthor) -> Review {
    let author_name = author.map(|u| u.name).unwrap_or_default();
    Review::from_entity(review, author_name)
}
