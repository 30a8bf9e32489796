use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::coupon::CouponParams;

/// Repository for discount coupons.
pub struct CouponRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CouponRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CouponParams) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(params.code),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            value: ActiveValue::Set(params.value),
            min_order_amount: ActiveValue::Set(params.min_order_amount),
            max_uses: ActiveValue::Set(params.max_uses),
            used_count: ActiveValue::Set(0),
            starts_at: ActiveValue::Set(params.starts_at),
            expires_at: ActiveValue::Set(params.expires_at),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the editable fields. `used_count` is left untouched.
    pub async fn update(
        &self,
        id: i32,
        params: CouponParams,
    ) -> Result<Option<entity::coupon::Model>, DbErr> {
        let Some(coupon) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::coupon::ActiveModel = coupon.into();
        active_model.code = ActiveValue::Set(params.code);
        active_model.kind = ActiveValue::Set(params.kind.as_str().to_string());
        active_model.value = ActiveValue::Set(params.value);
        active_model.min_order_amount = ActiveValue::Set(params.min_order_amount);
        active_model.max_uses = ActiveValue::Set(params.max_uses);
        active_model.starts_at = ActiveValue::Set(params.starts_at);
        active_model.expires_at = ActiveValue::Set(params.expires_at);
        active_model.is_active = ActiveValue::Set(params.is_active);

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Coupon::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find_by_id(id).one(self.db).await
    }

    /// Finds a coupon by its uppercase code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Gets a page of coupons, newest first
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::coupon::Model>, u64), DbErr> {
        let paginator = entity::prelude::Coupon::find()
            .order_by_desc(entity::coupon::Column::CreatedAt)
            .order_by_desc(entity::coupon::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let coupons = paginator.fetch_page(page).await?;

        Ok((coupons, total))
    }

    pub async fn code_taken(&self, code: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Coupon::find().filter(entity::coupon::Column::Code.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::coupon::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Records one redemption if the coupon still has uses left.
    ///
    /// Returns `false` when `max_uses` was already reached, leaving the row unchanged.
    pub async fn increment_usage(&self, id: i32) -> Result<bool, DbErr> {
        use entity::coupon::Column;

        let result = entity::prelude::Coupon::update_many()
            .col_expr(Column::UsedCount, Expr::col(Column::UsedCount).add(1))
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::MaxUses.is_null())
                    .add(Expr::col(Column::UsedCount).lt(Expr::col(Column::MaxUses))),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gives back one redemption of the coupon with this code, never going below zero
    pub async fn release_usage(&self, code: &str) -> Result<(), DbErr> {
        entity::prelude::Coupon::update_many()
            .col_expr(
                entity::coupon::Column::UsedCount,
                Expr::col(entity::coupon::Column::UsedCount).sub(1),
            )
            .filter(entity::coupon::Column::Code.eq(code))
            .filter(entity::coupon::Column::UsedCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
