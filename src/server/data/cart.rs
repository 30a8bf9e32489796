use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for the per-user cart and its lines.
pub struct CartRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_user(&self, user_id: i32) -> Result<Option<entity::cart::Model>, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the user's cart, creating an empty one on first use
    pub async fn get_or_create(&self, user_id: i32) -> Result<entity::cart::Model, DbErr> {
        if let Some(cart) = self.find_by_user(user_id).await? {
            return Ok(cart);
        }

        let now = Utc::now();
        entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets cart lines with their products, oldest line first
    pub async fn get_lines(
        &self,
        cart_id: i32,
    ) -> Result<Vec<(entity::cart_item::Model, Option<entity::product::Model>)>, DbErr> {
        entity::prelude::CartItem::find()
            .find_also_related(entity::prelude::Product)
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_item::Column::CreatedAt)
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_item(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::cart_item::Model>, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    pub async fn insert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<entity::cart_item::Model, DbErr> {
        entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn set_quantity(
        &self,
        item: entity::cart_item::Model,
        quantity: i32,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let mut active_model: entity::cart_item::ActiveModel = item.into();
        active_model.quantity = ActiveValue::Set(quantity);

        active_model.update(self.db).await
    }

    /// Removes one line; returns false when the product was not in the cart
    pub async fn remove_item(&self, cart_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every line from the cart
    pub async fn clear(&self, cart_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
