use serde::{Deserialize, Serialize};

/// A CPN record from the catalog file. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub omni_id: String, // numeric, parsed when a product is built
    #[serde(rename = "use")]
    pub usage: String,
    pub conditions: String,
    pub partner_omni_id: i64,
    pub partner_crm_id: String,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub omni_id: String,
    pub price: i32,
}

impl Coupon {
    /// The offer every synthesized order is built from. Always index 0.
    pub fn primary_offer(&self) -> Option<&Offer> {
        self.offers.first()
    }
}
