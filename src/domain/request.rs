use serde::{Deserialize, Serialize};

/// Body of `POST /api/back/v1/cpn/orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub filters: RequestFilters,
    #[serde(default)]
    pub stats: Option<RequestStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilters {
    pub limit: Option<i32>,
    pub product_type: Option<String>,
    pub order_ids: Option<Vec<i64>>, // duplicates are kept
    pub order_id_from: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestStats {
    pub coupon: Option<i32>,
}

impl RequestFilters {
    /// Explicit order ids, only when at least one was supplied.
    pub fn explicit_order_ids(&self) -> Option<&[i64]> {
        self.order_ids.as_deref().filter(|ids| !ids.is_empty())
    }
}
