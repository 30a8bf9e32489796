//! Order service: checkout, customer cancellation and admin status changes.
//!
//! Every operation that touches stock runs inside a single database
//! transaction. Returning early with an error drops the transaction, which
//! rolls back whatever was already written.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::order::OrderStatus,
    server::{
        data::{
            cart::CartRepository, coupon::CouponRepository, order::OrderRepository,
            product::ProductRepository,
        },
        error::AppError,
        model::{
            coupon::CouponRejection,
            order::{CheckoutParams, NewOrder, NewOrderItem, Order, OrderSummary},
            page::Page,
            user::User,
        },
        service::{
            cart::{load_user_cart, INSUFFICIENT_STOCK_MESSAGE},
            clean_optional,
            coupon::{find_applicable, normalize_code},
            pricing::{PriceBreakdown, ShippingRates},
        },
        util::{email::is_valid_email, order_number},
    },
};

/// Attempts at drawing an unused order number before giving up.
const ORDER_NUMBER_ATTEMPTS: usize = 5;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Turns the user's cart into an order.
    ///
    /// In one transaction: validates every line against current stock, applies
    /// the optional coupon, prices shipping, takes stock, records the coupon
    /// redemption, inserts the order with line snapshots and empties the cart.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order in status `pending`
    /// - `Err(AppError::BadRequest)` - Invalid contact data, empty cart, unavailable
    ///   product, insufficient stock or rejected coupon
    /// - `Err(AppError::NotFound)` - Unknown coupon code
    pub async fn checkout(&self, params: CheckoutParams) -> Result<Order, AppError> {
        let customer_name = required_field(&params.customer_name, "Укажите имя получателя")?;
        let customer_email = params.customer_email.trim().to_lowercase();
        if !is_valid_email(&customer_email) {
            return Err(AppError::bad_request("Некорректный email"));
        }
        let customer_phone = required_field(&params.customer_phone, "Укажите телефон")?;
        let shipping_address =
            required_field(&params.shipping_address, "Укажите адрес доставки")?;
        let coupon_code = params
            .coupon_code
            .as_deref()
            .map(normalize_code)
            .filter(|code| !code.is_empty());

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let cart = load_user_cart(&txn, params.user_id).await?;
        if cart.is_empty() {
            return Err(AppError::bad_request("Корзина пуста"));
        }

        for line in &cart.lines {
            if !line.product.is_active {
                return Err(AppError::bad_request(format!(
                    "Товар «{}» больше недоступен",
                    line.product.name
                )));
            }
            if line.quantity > line.product.stock {
                return Err(AppError::bad_request(INSUFFICIENT_STOCK_MESSAGE));
            }
        }

        let subtotal = cart.subtotal();
        let coupon = match &coupon_code {
            Some(code) => Some(find_applicable(&txn, code, subtotal, now).await?),
            None => None,
        };
        let rates = ShippingRates::load(&txn).await?;
        let breakdown = PriceBreakdown::calculate(subtotal, coupon.as_ref(), &rates);

        let product_repo = ProductRepository::new(&txn);
        for line in &cart.lines {
            if !product_repo
                .decrement_stock(line.product.id, line.quantity)
                .await?
            {
                return Err(AppError::bad_request(INSUFFICIENT_STOCK_MESSAGE));
            }
        }

        if let Some(coupon) = &coupon {
            if !CouponRepository::new(&txn).increment_usage(coupon.id).await? {
                return Err(AppError::bad_request(
                    CouponRejection::UsageLimitReached.to_string(),
                ));
            }
        }

        let order_number = unused_order_number(&txn).await?;
        let items = cart
            .lines
            .iter()
            .map(|line| NewOrderItem {
                product_id: line.product.id,
                product_name: line.product.name.clone(),
                sku: line.product.sku.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
            })
            .collect();

        let (order, order_items) = OrderRepository::new(&txn)
            .create(NewOrder {
                order_number,
                user_id: params.user_id,
                subtotal: breakdown.subtotal,
                discount: breakdown.discount,
                shipping: breakdown.shipping,
                total: breakdown.total,
                coupon_code: coupon.map(|c| c.code),
                customer_name,
                customer_email,
                customer_phone,
                shipping_address,
                comment: clean_optional(params.comment),
                items,
            })
            .await?;

        let cart_repo = CartRepository::new(&txn);
        if let Some(cart) = cart_repo.find_by_user(params.user_id).await? {
            cart_repo.clear(cart.id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "User {} placed order {} for {} kopecks",
            params.user_id,
            order.order_number,
            order.total
        );

        Ok(Order::from_entity(order, order_items)?)
    }

    /// Gets an order visible to `requester`: their own, or any order for admins.
    ///
    /// Other users' orders are reported as missing rather than forbidden.
    pub async fn get_for_user(&self, requester: &User, id: i32) -> Result<Order, AppError> {
        let (order, items) = OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|(order, _)| requester.is_admin() || order.user_id == requester.id)
            .ok_or_else(|| AppError::not_found("Заказ не найден"))?;

        Ok(Order::from_entity(order, items)?)
    }

    /// Orders of one customer, newest first.
    pub async fn get_user_orders(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Page<OrderSummary>, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(Some(user_id), None, page, per_page)
            .await?;

        Ok(Page::new(orders, total, page, per_page).try_map(OrderSummary::from_entity)?)
    }

    /// All orders for the admin panel, optionally filtered by status.
    pub async fn get_all_orders(
        &self,
        status: Option<OrderStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<OrderSummary>, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(None, status, page, per_page)
            .await?;

        Ok(Page::new(orders, total, page, per_page).try_map(OrderSummary::from_entity)?)
    }

    /// Cancels a pending order on behalf of its owner.
    pub async fn cancel_by_customer(&self, user_id: i32, id: i32) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let (order, items) = OrderRepository::new(&txn)
            .find_by_id(id)
            .await?
            .filter(|(order, _)| order.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Заказ не найден"))?;
        let order = Order::from_entity(order, items)?;

        if order.status != OrderStatus::Pending {
            return Err(AppError::bad_request(
                "Отменить можно только заказ, ожидающий оплаты",
            ));
        }

        let cancelled = cancel(&txn, order).await?;
        txn.commit().await?;

        tracing::info!("User {} cancelled order {}", user_id, cancelled.order_number);

        Ok(cancelled)
    }

    /// Moves an order to a new status following the allowed transitions.
    ///
    /// Cancelling returns the items to stock and releases the coupon redemption.
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;
        let order_repo = OrderRepository::new(&txn);

        let (order, items) = order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Заказ не найден"))?;
        let order = Order::from_entity(order, items)?;

        if !order.status.can_transition_to(status) {
            return Err(AppError::bad_request(format!(
                "Недопустимый переход статуса: {} → {}",
                order.status, status
            )));
        }

        let previous = order.status;
        let updated = if status == OrderStatus::Cancelled {
            cancel(&txn, order).await?
        } else {
            let updated = order_repo
                .update_status(id, status)
                .await?
                .ok_or_else(|| AppError::not_found("Заказ не найден"))?;
            let items = order_repo.get_items(id).await?;
            Order::from_entity(updated, items)?
        };

        txn.commit().await?;

        tracing::info!(
            "Order {} moved from {} to {}",
            updated.order_number,
            previous,
            updated.status
        );

        Ok(updated)
    }
}

/// Restocks the order's lines, releases its coupon and marks it cancelled.
async fn cancel(txn: &DatabaseTransaction, order: Order) -> Result<Order, AppError> {
    let product_repo = ProductRepository::new(txn);
    for item in &order.items {
        if let Some(product_id) = item.product_id {
            product_repo.increment_stock(product_id, item.quantity).await?;
        }
    }

    if let Some(code) = &order.coupon_code {
        CouponRepository::new(txn).release_usage(code).await?;
    }

    let order_repo = OrderRepository::new(txn);
    let updated = order_repo
        .update_status(order.id, OrderStatus::Cancelled)
        .await?
        .ok_or_else(|| AppError::not_found("Заказ не найден"))?;
    let items = order_repo.get_items(order.id).await?;

    Ok(Order::from_entity(updated, items)?)
}

async fn unused_order_number<C: ConnectionTrait>(db: &C) -> Result<String, AppError> {
    let order_repo = OrderRepository::new(db);

    for _ in 0..ORDER_NUMBER_ATTEMPTS {
        let candidate = order_number::generate(Utc::now());
        if !order_repo.order_number_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(AppError::InternalError(format!(
        "No free order number after {} attempts",
        ORDER_NUMBER_ATTEMPTS
    )))
}

fn required_field(value: &str, message: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(message));
    }

    Ok(value.to_string())
}
