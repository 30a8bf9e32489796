use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::CreateReviewParams;

pub type ReviewWithAuthor = (entity::review::Model, Option<entity::user::Model>);

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unapproved review
    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            is_approved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the user already reviewed the product
    pub async fn exists_for(&self, product_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::ProductId.eq(product_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReviewWithAuthor>, DbErr> {
        entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Gets a page of reviews with their authors, newest first.
    ///
    /// # Arguments
    /// - `product_id` - Restrict to one product
    /// - `approved` - Restrict by moderation state
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of reviews per page
    pub async fn get_paginated(
        &self,
        product_id: Option<i32>,
        approved: Option<bool>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReviewWithAuthor>, u64), DbErr> {
        let mut query = entity::prelude::Review::find().find_also_related(entity::prelude::User);

        if let Some(product_id) = product_id {
            query = query.filter(entity::review::Column::ProductId.eq(product_id));
        }
        if let Some(approved) = approved {
            query = query.filter(entity::review::Column::IsApproved.eq(approved));
        }

        let paginator = query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator.fetch_page(page).await?;

        Ok((reviews, total))
    }

    pub async fn set_approved(
        &self,
        id: i32,
        is_approved: bool,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = review.into();
        active_model.is_approved = ActiveValue::Set(is_approved);

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sum and count of approved ratings for a product
    pub async fn approved_totals(&self, product_id: i32) -> Result<(i64, u64), DbErr> {
        let totals: Option<(Option<i64>, i64)> = entity::prelude::Review::find()
            .select_only()
            .column_as(entity::review::Column::Rating.sum(), "rating_sum")
            .column_as(entity::review::Column::Id.count(), "review_count")
            .filter(entity::review::Column::ProductId.eq(product_id))
            .filter(entity::review::Column::IsApproved.eq(true))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(match totals {
            Some((sum, count)) => (sum.unwrap_or(0), count.max(0) as u64),
            None => (0, 0),
        })
    }
}
