use serde::Serialize;

use crate::domain::SynthesizedOrder;

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub status: &'static str,
    pub messages: Vec<String>,
    pub data: OrderResponseData,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponseData {
    pub filters: FiltersEcho,
    pub stats: OrderStats,
    pub timestamp: String,
    pub orders: Vec<SynthesizedOrder>,
}

/// Request filters as echoed back. `order_id_from` and `order_ids` never
/// both carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiltersEcho {
    pub limit: Option<i32>,
    pub product_type: &'static str,
    pub order_id_from: Option<i64>,
    pub order_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub coupon: CouponStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponStats {
    #[serde(rename = "lastOrder")]
    pub last_order: LastOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastOrder {
    pub order_id: Option<i64>,
    pub date_created: String,
}

/// Body of `GET /api/back/v1/emulate`.
#[derive(Debug, Clone, Serialize)]
pub struct EmulatedResponse {
    pub timestamp: i64,
    pub status: &'static str,
    pub message: String,
}
