use serde::Serialize;
use uuid::Uuid;

pub const STATUS_SUCCESS: &str = "success";
pub const PRODUCT_TYPE_COUPON: &str = "coupon";
pub const RULES_URL: &str = "https://rules.pdf";
pub const CHANNEL_WEB: &str = "web";
pub const PAYMENT_TYPE_SPS_BONUSES: &str = "spsBonuses";
pub const COMBINED_PDF_URL: &str = "https://combined.pdf";
pub const CONDITIONS_TEXT: &str = "conditions";
pub const USE_TEXT: &str = "use";
pub const PROMO_CODE_TEXT: &str = "CODE123";
pub const PROMO_CODE_PIN: i32 = 1234;

/// One fabricated order. Field order is the wire key order.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizedOrder {
    pub order_id: Option<i64>,
    pub client_id: String,
    pub order_id_sbol: Option<String>,
    pub order_number: i64,
    pub order_external_id: Option<String>,
    pub status: &'static str,
    pub rules: &'static str,
    pub channel: &'static str,
    #[serde(rename = "clientOS")]
    pub client_os: Option<String>,
    pub agreement: bool,
    pub payment_type: &'static str,
    pub pay_datetime: String,
    pub promocodes_count: i32,
    pub total_amount: TotalAmount,
    pub date_created: String,
    pub product_type: &'static str,
    pub combined_pdf_url: &'static str,
    pub reserve_key: Uuid,
    pub product: Product,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalAmount {
    #[serde(rename = "BON")]
    pub bon: Option<i32>,
    #[serde(rename = "RUB")]
    pub rub: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub cpn_id: i64,
    pub conditions: &'static str,
    #[serde(rename = "use")]
    pub usage: &'static str,
    pub partner: Partner,
    pub offer: ProductOffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub id: String,
    pub crm_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOffer {
    pub id: i64,
    pub cpn_id: i64,
    pub price: i32,
    pub promocodes: Vec<Promocode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Promocode {
    pub text_code: &'static str,
    pub qr_code: Option<String>,
    pub bar_code: Option<String>,
    pub pdf_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: i32,
    pub pin: i32,
    pub end_date_time: String,
}
