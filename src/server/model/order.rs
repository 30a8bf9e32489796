//! Order domain models and checkout parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{CheckoutDto, OrderDto, OrderItemDto, OrderListItemDto, OrderStatus},
    server::error::internal::InternalError,
};

fn parse_status(value: String) -> Result<OrderStatus, InternalError> {
    value
        .parse::<OrderStatus>()
        .map_err(|value| InternalError::UnknownVariant {
            kind: "order status",
            value,
        })
}

/// Snapshot of a purchased product. Unaffected by later product edits.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub sku: String,
    pub unit_price: i64,
    pub quantity: i32,
    pub line_total: i64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            product_name: entity.product_name,
            sku: entity.sku,
            unit_price: entity.unit_price,
            quantity: entity.quantity,
            line_total: entity.line_total,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            product_id: self.product_id,
            product_name: self.product_name,
            sku: self.sku,
            unit_price: self.unit_price,
            quantity: self.quantity,
            line_total: self.line_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub status: OrderStatus,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping: i64,
    pub total: i64,
    pub coupon_code: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub comment: Option<String>,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an order row and its item rows to the domain model.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(InternalError::UnknownVariant)` - Stored status is not a known `OrderStatus`
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            order_number: entity.order_number,
            user_id: entity.user_id,
            status: parse_status(entity.status)?,
            subtotal: entity.subtotal,
            discount: entity.discount,
            shipping: entity.shipping,
            total: entity.total,
            coupon_code: entity.coupon_code,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            shipping_address: entity.shipping_address,
            comment: entity.comment,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_number: self.order_number,
            user_id: self.user_id,
            status: self.status,
            subtotal: self.subtotal,
            discount: self.discount,
            shipping: self.shipping,
            total: self.total,
            coupon_code: self.coupon_code,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            shipping_address: self.shipping_address,
            comment: self.comment,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Order row for listings, without items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: i32,
    pub order_number: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            order_number: entity.order_number,
            status: parse_status(entity.status)?,
            customer_name: entity.customer_name,
            total: entity.total,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> OrderListItemDto {
        OrderListItemDto {
            id: self.id,
            order_number: self.order_number,
            status: self.status,
            customer_name: self.customer_name,
            total: self.total,
            created_at: self.created_at,
        }
    }
}

/// Customer details collected at checkout.
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    pub user_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub comment: Option<String>,
    pub coupon_code: Option<String>,
}

impl CheckoutParams {
    pub fn from_dto(user_id: i32, dto: CheckoutDto) -> Self {
        Self {
            user_id,
            customer_name: dto.customer_name,
            customer_email: dto.customer_email,
            customer_phone: dto.customer_phone,
            shipping_address: dto.shipping_address,
            comment: dto.comment,
            coupon_code: dto.coupon_code,
        }
    }
}

/// Fully priced order ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub user_id: i32,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping: i64,
    pub total: i64,
    pub coupon_code: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub comment: Option<String>,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub product_name: String,
    pub sku: String,
    pub unit_price: i64,
    pub quantity: i32,
}

impl NewOrderItem {
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}
