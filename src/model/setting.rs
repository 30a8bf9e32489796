use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery price in kopecks.
pub const SHIPPING_COST_KEY: &str = "shipping_cost";
/// Subtotal (after discount) from which delivery is free.
pub const FREE_SHIPPING_THRESHOLD_KEY: &str = "free_shipping_threshold";

/// Settings that must hold a non-negative amount in kopecks.
pub const NUMERIC_SETTING_KEYS: [&str; 2] = [SHIPPING_COST_KEY, FREE_SHIPPING_THRESHOLD_KEY];

/// All store settings as a flat `key -> value` map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(transparent)]
pub struct SettingsDto(pub BTreeMap<String, String>);
