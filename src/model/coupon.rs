use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `value` is a percentage of the subtotal, 1..=100.
    Percent,
    /// `value` is an amount in kopecks.
    Fixed,
}

impl CouponKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for CouponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CouponKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percent" => Ok(Self::Percent),
            "fixed" => Ok(Self::Fixed),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CouponDto {
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

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CouponPayloadDto {
    /// Stored uppercase.
    pub code: String,
    pub kind: CouponKind,
    pub value: i64,
    pub min_order_amount: Option<i64>,
    pub max_uses: Option<i32>,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApplyCouponDto {
    pub code: String,
}

/// Price breakdown of the caller's cart with a coupon applied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CouponQuoteDto {
    pub code: String,
    pub kind: CouponKind,
    pub value: i64,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping: i64,
    pub total: i64,
}
