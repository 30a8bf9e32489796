//! Coupon domain model with validation and discount rules.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{
    model::coupon::{CouponDto, CouponKind},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: i32,
    pub code: String,
    pub kind: CouponKind,
    pub value: i64,
    pub min_order_amount: Option<i64>,
    pub max_uses: Option<i32>,
    pub used_count: i32,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Reason a coupon cannot be applied. `Display` is the customer-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouponRejection {
    #[error("Купон неактивен")]
    Inactive,
    #[error("Купон ещё не действует")]
    NotStarted,
    #[error("Срок действия купона истёк")]
    Expired,
    #[error("Лимит использований купона исчерпан")]
    UsageLimitReached,
    #[error("Минимальная сумма заказа для этого купона — {} ₽", format_rubles(*.0))]
    BelowMinimum(i64),
}

impl Coupon {
    /// Converts an entity model to a coupon domain model.
    ///
    /// # Returns
    /// - `Ok(Coupon)` - The converted coupon
    /// - `Err(InternalError::UnknownVariant)` - Stored kind is not a known `CouponKind`
    pub fn from_entity(entity: entity::coupon::Model) -> Result<Self, InternalError> {
        let kind = entity
            .kind
            .parse::<CouponKind>()
            .map_err(|value| InternalError::UnknownVariant {
                kind: "coupon kind",
                value,
            })?;

        Ok(Self {
            id: entity.id,
            code: entity.code,
            kind,
            value: entity.value,
            min_order_amount: entity.min_order_amount,
            max_uses: entity.max_uses,
            used_count: entity.used_count,
            starts_at: entity.starts_at,
            expires_at: entity.expires_at,
            is_active: entity.is_active,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CouponDto {
        CouponDto {
            id: self.id,
            code: self.code,
            kind: self.kind,
            value: self.value,
            min_order_amount: self.min_order_amount,
            max_uses: self.max_uses,
            used_count: self.used_count,
            starts_at: self.starts_at,
            expires_at: self.expires_at,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }

    /// Checks whether the coupon may be applied to `subtotal` at instant `now`.
    ///
    /// Checks run in a fixed order and the first failure wins: active flag, start
    /// date, expiry, usage limit, minimum order amount.
    pub fn validate(&self, subtotal: i64, now: DateTime<Utc>) -> Result<(), CouponRejection> {
        if !self.is_active {
            return Err(CouponRejection::Inactive);
        }

        if self.starts_at.is_some_and(|starts_at| now < starts_at) {
            return Err(CouponRejection::NotStarted);
        }

        if self.expires_at.is_some_and(|expires_at| now >= expires_at) {
            return Err(CouponRejection::Expired);
        }

        if self
            .max_uses
            .is_some_and(|max_uses| self.used_count >= max_uses)
        {
            return Err(CouponRejection::UsageLimitReached);
        }

        if let Some(min) = self.min_order_amount {
            if subtotal < min {
                return Err(CouponRejection::BelowMinimum(min));
            }
        }

        Ok(())
    }

    /// Discount in kopecks for `subtotal`, always within `[0, subtotal]`.
    ///
    /// Percent coupons round down to the kopeck.
    pub fn discount_for(&self, subtotal: i64) -> i64 {
        let subtotal = subtotal.max(0);
        let raw = match self.kind {
            CouponKind::Percent => subtotal.saturating_mul(self.value) / 100,
            CouponKind::Fixed => self.value,
        };

        raw.clamp(0, subtotal)
    }
}

/// Formats kopecks as roubles: `1500` for 1 500.00 ₽, `99.90` otherwise.
pub fn format_rubles(kopecks: i64) -> String {
    if kopecks % 100 == 0 {
        format!("{}", kopecks / 100)
    } else {
        format!("{}.{:02}", kopecks / 100, (kopecks % 100).abs())
    }
}

/// Validated fields for creating or updating a coupon. `code` is uppercase.
#[derive(Debug, Clone)]
pub struct CouponParams {
    pub code: String,
    pub kind: CouponKind,
    pub value: i64,
    pub min_order_amount: Option<i64>,
    pub max_uses: Option<i32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn coupon(kind: CouponKind, value: i64) -> Coupon {
        Coupon {
            id: 1,
            code: "SALE".to_string(),
            kind,
            value,
            min_order_amount: None,
            max_uses: None,
            used_count: 0,
            starts_at: None,
            expires_at: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn percent_discount_rounds_down() {
        let c = coupon(CouponKind::Percent, 15);
        assert_eq!(c.discount_for(999), 149);
        assert_eq!(c.discount_for(10_000_00), 1_500_00);
    }

    #[test]
    fn percent_discount_never_exceeds_subtotal() {
        let full = coupon(CouponKind::Percent, 100);
        let over = coupon(CouponKind::Percent, 250);

        for subtotal in [0, 1, 99, 12_345, 1_000_000_00] {
            assert_eq!(full.discount_for(subtotal), subtotal);
            assert!(over.discount_for(subtotal) <= subtotal);
        }
    }

    #[test]
    fn fixed_discount_is_clamped_to_subtotal() {
        let c = coupon(CouponKind::Fixed, 500_00);
        assert_eq!(c.discount_for(2_000_00), 500_00);
        assert_eq!(c.discount_for(300_00), 300_00);
        assert_eq!(c.discount_for(0), 0);
    }

    #[test]
    fn negative_values_give_no_discount() {
        assert_eq!(coupon(CouponKind::Fixed, -100).discount_for(1_000), 0);
        assert_eq!(coupon(CouponKind::Percent, -10).discount_for(1_000), 0);
    }

    #[test]
    fn checks_run_in_order() {
        let now = Utc::now();
        let mut c = coupon(CouponKind::Percent, 10);
        c.is_active = false;
        c.expires_at = Some(now - Duration::days(1));

        assert_eq!(c.validate(100_00, now), Err(CouponRejection::Inactive));

        c.is_active = true;
        assert_eq!(c.validate(100_00, now), Err(CouponRejection::Expired));
    }

    #[test]
    fn rejects_before_start_and_at_expiry() {
        let now = Utc::now();
        let mut c = coupon(CouponKind::Fixed, 100);

        c.starts_at = Some(now + Duration::hours(1));
        assert_eq!(c.validate(1_000, now), Err(CouponRejection::NotStarted));

        c.starts_at = Some(now);
        c.expires_at = Some(now);
        assert_eq!(c.validate(1_000, now), Err(CouponRejection::Expired));

        c.expires_at = Some(now + Duration::seconds(1));
        assert_eq!(c.validate(1_000, now), Ok(()));
    }

    #[test]
    fn rejects_exhausted_and_below_minimum() {
        let now = Utc::now();
        let mut c = coupon(CouponKind::Fixed, 100);

        c.max_uses = Some(3);
        c.used_count = 3;
        assert_eq!(
            c.validate(1_000, now),
            Err(CouponRejection::UsageLimitReached)
        );

        c.used_count = 2;
        c.min_order_amount = Some(1_500_00);
        assert_eq!(
            c.validate(1_499_99, now),
            Err(CouponRejection::BelowMinimum(1_500_00))
        );
        assert_eq!(c.validate(1_500_00, now), Ok(()));
    }

    #[test]
    fn minimum_amount_message_uses_roubles() {
        assert_eq!(
            CouponRejection::BelowMinimum(1_500_00).to_string(),
            "Минимальная сумма заказа для этого купона — 1500 ₽"
        );
        assert_eq!(format_rubles(99_90), "99.90");
    }
}
