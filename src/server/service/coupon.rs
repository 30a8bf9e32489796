//! Coupon service: admin CRUD and the cart quote shown before checkout.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::coupon::{CouponKind, CouponPayloadDto, CouponQuoteDto},
    server::{
        data::coupon::CouponRepository,
        error::AppError,
        model::{
            coupon::{Coupon, CouponParams},
            page::Page,
        },
        service::{
            cart::load_user_cart,
            pricing::{PriceBreakdown, ShippingRates},
        },
    },
};

/// Result of applying a coupon to the current cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponQuote {
    pub coupon: Coupon,
    pub breakdown: PriceBreakdown,
}

impl CouponQuote {
    pub fn into_dto(self) -> CouponQuoteDto {
        CouponQuoteDto {
            code: self.coupon.code,
            kind: self.coupon.kind,
            value: self.coupon.value,
            subtotal: self.breakdown.subtotal,
            discount: self.breakdown.discount,
            shipping: self.breakdown.shipping,
            total: self.breakdown.total,
        }
    }
}

pub struct CouponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a coupon against the user's current cart and prices it.
    ///
    /// # Returns
    /// - `Ok(CouponQuote)` - Coupon applies; totals include shipping
    /// - `Err(AppError::BadRequest)` - Empty cart or coupon rejected
    /// - `Err(AppError::NotFound)` - Unknown code
    pub async fn apply(&self, user_id: i32, code: &str) -> Result<CouponQuote, AppError> {
        let cart = load_user_cart(self.db, user_id).await?;
        if cart.is_empty() {
            return Err(AppError::bad_request("Корзина пуста"));
        }

        let subtotal = cart.subtotal();
        let coupon = find_applicable(self.db, code, subtotal, Utc::now()).await?;
        let rates = ShippingRates::load(self.db).await?;

        Ok(CouponQuote {
            breakdown: PriceBreakdown::calculate(subtotal, Some(&coupon), &rates),
            coupon,
        })
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Coupon>, AppError> {
        let (coupons, total) = CouponRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(coupons, total, page, per_page).try_map(Coupon::from_entity)?)
    }

    pub async fn create(&self, payload: CouponPayloadDto) -> Result<Coupon, AppError> {
        let params = self.validate(None, payload).await?;

        let created = CouponRepository::new(self.db).create(params).await?;

        tracing::info!("Created coupon {} ({})", created.id, created.code);

        Ok(Coupon::from_entity(created)?)
    }

    /// Overwrites a coupon's terms. The usage counter is left untouched.
    pub async fn update(&self, id: i32, payload: CouponPayloadDto) -> Result<Coupon, AppError> {
        let params = self.validate(Some(id), payload).await?;

        let updated = CouponRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found("Купон не найден"))?;

        Ok(Coupon::from_entity(updated)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CouponRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Купон не найден"));
        }

        Ok(())
    }

    async fn validate(
        &self,
        id: Option<i32>,
        payload: CouponPayloadDto,
    ) -> Result<CouponParams, AppError> {
        let code = normalize_code(&payload.code);
        if code.is_empty() {
            return Err(AppError::bad_request("Укажите код купона"));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(AppError::bad_request("Код купона не должен содержать пробелов"));
        }

        match payload.kind {
            CouponKind::Percent if !(1..=100).contains(&payload.value) => {
                return Err(AppError::bad_request(
                    "Процент скидки должен быть от 1 до 100",
                ));
            }
            CouponKind::Fixed if payload.value <= 0 => {
                return Err(AppError::bad_request("Сумма скидки должна быть больше нуля"));
            }
            _ => {}
        }

        if payload.min_order_amount.is_some_and(|min| min < 0) {
            return Err(AppError::bad_request(
                "Минимальная сумма заказа не может быть отрицательной",
            ));
        }
        if payload.max_uses.is_some_and(|max| max < 1) {
            return Err(AppError::bad_request(
                "Лимит использований должен быть не меньше 1",
            ));
        }
        if let (Some(starts_at), Some(expires_at)) = (payload.starts_at, payload.expires_at) {
            if expires_at <= starts_at {
                return Err(AppError::bad_request(
                    "Дата окончания должна быть позже даты начала",
                ));
            }
        }

        if CouponRepository::new(self.db)
            .code_taken(&code, id)
            .await?
        {
            return Err(AppError::conflict("Купон с таким кодом уже существует"));
        }

        Ok(CouponParams {
            code,
            kind: payload.kind,
            value: payload.value,
            min_order_amount: payload.min_order_amount,
            max_uses: payload.max_uses,
            starts_at: payload.starts_at,
            expires_at: payload.expires_at,
            is_active: payload.is_active,
        })
    }
}

/// Coupon codes are case-insensitive and stored uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Looks up a coupon by code and checks it against `subtotal` at `now`.
///
/// Shared by the cart quote and checkout so both reject the same coupons with
/// the same messages.
pub async fn find_applicable<C: ConnectionTrait>(
    db: &C,
    code: &str,
    subtotal: i64,
    now: DateTime<Utc>,
) -> Result<Coupon, AppError> {
    let entity = CouponRepository::new(db)
        .find_by_code(&normalize_code(code))
        .await?
        .ok_or_else(|| AppError::not_found("Купон не найден"))?;
    let coupon = Coupon::from_entity(entity)?;

    coupon
        .validate(subtotal, now)
        .map_err(|rejection| AppError::bad_request(rejection.to_string()))?;

    Ok(coupon)
}
