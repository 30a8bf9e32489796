//! Order data repository.
//!
//! Inserts priced orders with their line snapshots, loads orders with items, lists
//! them for customers and admins, and updates status.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::order::OrderStatus, server::model::order::NewOrder};

pub type OrderWithItems = (entity::order::Model, Vec<entity::order_item::Model>);

pub struct OrderRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `pending` order and its line snapshots.
    ///
    /// # Arguments
    /// - `order` - Fully priced order with its lines
    ///
    /// # Returns
    /// - `Ok((order, items))` - Inserted rows
    /// - `Err(DbErr)` - Database error, including a unique violation on `order_number`
    pub async fn create(&self, order: NewOrder) -> Result<OrderWithItems, DbErr> {
        let now = Utc::now();

        let created = entity::order::ActiveModel {
            order_number: ActiveValue::Set(order.order_number),
            user_id: ActiveValue::Set(order.user_id),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            subtotal: ActiveValue::Set(order.subtotal),
            discount: ActiveValue::Set(order.discount),
            shipping: ActiveValue::Set(order.shipping),
            total: ActiveValue::Set(order.total),
            coupon_code: ActiveValue::Set(order.coupon_code),
            customer_name: ActiveValue::Set(order.customer_name),
            customer_email: ActiveValue::Set(order.customer_email),
            customer_phone: ActiveValue::Set(order.customer_phone),
            shipping_address: ActiveValue::Set(order.shipping_address),
            comment: ActiveValue::Set(order.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let line_total = item.line_total();
            let inserted = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(created.id),
                product_id: ActiveValue::Set(Some(item.product_id)),
                product_name: ActiveValue::Set(item.product_name),
                sku: ActiveValue::Set(item.sku),
                unit_price: ActiveValue::Set(item.unit_price),
                quantity: ActiveValue::Set(item.quantity),
                line_total: ActiveValue::Set(line_total),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(inserted);
        }

        Ok((created, items))
    }

    /// Loads an order with its items
    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderWithItems>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = self.get_items(order.id).await?;

        Ok(Some((order, items)))
    }

    pub async fn get_items(&self, order_id: i32) -> Result<Vec<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of orders, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to one customer's orders (`None` for the admin listing)
    /// - `status` - Restrict to one status
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    pub async fn get_paginated(
        &self,
        user_id: Option<i32>,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let mut query = entity::prelude::Order::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::order::Column::UserId.eq(user_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Sets the status of an order; `Ok(None)` when it does not exist
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::order::ActiveModel = order.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn order_number_exists(&self, order_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderNumber.eq(order_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
