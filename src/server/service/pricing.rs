//! Order totals: coupon discount plus shipping.

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::setting::{FREE_SHIPPING_THRESHOLD_KEY, SHIPPING_COST_KEY},
    server::{data::setting::SettingRepository, model::coupon::Coupon},
};

/// Delivery pricing read from the settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShippingRates {
    /// Flat delivery price in kopecks.
    pub cost: i64,
    /// Discounted subtotal from which delivery is free.
    pub free_threshold: Option<i64>,
}

impl ShippingRates {
    pub fn shipping_for(&self, discounted_subtotal: i64) -> i64 {
        match self.free_threshold {
            Some(threshold) if discounted_subtotal >= threshold => 0,
            _ => self.cost,
        }
    }

    /// Reads the rates through any connection, transaction included.
    ///
    /// Values are validated on write; anything unparseable found here is
    /// logged and treated as unset.
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self, DbErr> {
        let repo = SettingRepository::new(db);

        let cost = parse_amount(SHIPPING_COST_KEY, repo.get(SHIPPING_COST_KEY).await?);
        let free_threshold = parse_amount(
            FREE_SHIPPING_THRESHOLD_KEY,
            repo.get(FREE_SHIPPING_THRESHOLD_KEY).await?,
        );

        Ok(Self {
            cost: cost.unwrap_or(0),
            free_threshold,
        })
    }
}

fn parse_amount(key: &str, raw: Option<String>) -> Option<i64> {
    let raw = raw?;
    match raw.trim().parse::<i64>() {
        Ok(amount) if amount >= 0 => Some(amount),
        _ => {
            tracing::warn!("Ignoring invalid value '{}' of setting {}", raw, key);
            None
        }
    }
}

/// Money breakdown of a cart or order, all in kopecks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: i64,
    pub discount: i64,
    pub shipping: i64,
    pub total: i64,
}

impl PriceBreakdown {
    /// Prices a subtotal with an already validated coupon.
    pub fn calculate(subtotal: i64, coupon: Option<&Coupon>, rates: &ShippingRates) -> Self {
        let discount = coupon.map_or(0, |c| c.discount_for(subtotal));
        let shipping = rates.shipping_for(subtotal - discount);

        Self {
            subtotal,
            discount,
            shipping,
            total: subtotal - discount + shipping,
        }
    }
}
