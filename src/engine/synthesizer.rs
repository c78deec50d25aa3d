use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use uuid::Uuid;

use crate::domain::order::{
    CHANNEL_WEB, COMBINED_PDF_URL, CONDITIONS_TEXT, PAYMENT_TYPE_SPS_BONUSES, PRODUCT_TYPE_COUPON,
    PROMO_CODE_PIN, PROMO_CODE_TEXT, RULES_URL, STATUS_SUCCESS, USE_TEXT,
};
use crate::domain::{
    Coupon, Offer, Partner, Product, ProductOffer, Promocode, RequestFilters, SynthesizedOrder,
    TotalAmount,
};
use crate::error::EmulatorError;
use crate::time_format;

/// Client ids are drawn from `[0, CLIENT_ID_BOUND)`.
pub const CLIENT_ID_BOUND: u32 = 1_000_000;

/// Largest number of orders one request may ask for.
pub const MAX_ORDER_COUNT: usize = 10_000;

const TOTAL_AMOUNT: TotalAmount = TotalAmount {
    bon: None,
    rub: Some(100),
};

/// Number of orders a request asks for.
///
/// Explicit order ids win over `limit`; with neither, one order is made.
/// A negative limit yields no orders.
pub fn order_count(filters: &RequestFilters) -> usize {
    if let Some(ids) = filters.explicit_order_ids() {
        return ids.len();
    }
    match filters.limit {
        Some(limit) => limit.max(0) as usize,
        None => 1,
    }
}

/// Order number for the order at `index`.
pub fn order_number(filters: &RequestFilters, index: usize) -> Result<i64, EmulatorError> {
    if let Some(ids) = filters.explicit_order_ids() {
        return ids
            .get(index)
            .copied()
            .ok_or(EmulatorError::OrderIndexOutOfBounds {
                index,
                len: ids.len(),
            });
    }
    match filters.order_id_from {
        Some(from) => i64::try_from(index)
            .ok()
            .and_then(|offset| from.checked_add(offset))
            .ok_or(EmulatorError::OrderNumberOverflow { from, index }),
        None => Ok(index as i64 + 1),
    }
}

/// Builds the orders for one request from the selected coupon.
///
/// Every order shares `now` and the same product; client id and reserve key
/// are drawn per order.
pub fn synthesize<R: Rng + ?Sized>(
    filters: &RequestFilters,
    coupon: &Coupon,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<Vec<SynthesizedOrder>, EmulatorError> {
    let offer = coupon
        .primary_offer()
        .ok_or_else(|| EmulatorError::InvalidCatalogEntry {
            coupon_id: coupon.id,
            reason: "coupon has no offers".to_string(),
        })?;
    let product = build_product(coupon, offer, now)?;
    let created = time_format::format(now);

    let count = order_count(filters);
    if count > MAX_ORDER_COUNT {
        return Err(EmulatorError::LimitTooLarge {
            requested: count,
            max: MAX_ORDER_COUNT,
        });
    }

    let mut orders = Vec::new();
    for index in 0..count {
        orders.push(SynthesizedOrder {
            order_id: None,
            client_id: rng.gen_range(0..CLIENT_ID_BOUND).to_string(),
            order_id_sbol: None,
            order_number: order_number(filters, index)?,
            order_external_id: None,
            status: STATUS_SUCCESS,
            rules: RULES_URL,
            channel: CHANNEL_WEB,
            client_os: None,
            agreement: true,
            payment_type: PAYMENT_TYPE_SPS_BONUSES,
            pay_datetime: created.clone(),
            promocodes_count: 1,
            total_amount: TOTAL_AMOUNT,
            date_created: created.clone(),
            product_type: PRODUCT_TYPE_COUPON,
            combined_pdf_url: COMBINED_PDF_URL,
            reserve_key: Uuid::new_v4(),
            product: product.clone(),
        });
    }

    Ok(orders)
}

fn build_product(
    coupon: &Coupon,
    offer: &Offer,
    now: NaiveDateTime,
) -> Result<Product, EmulatorError> {
    let promocode = Promocode {
        text_code: PROMO_CODE_TEXT,
        qr_code: None,
        bar_code: None,
        pdf_url: None,
        kind: 0,
        pin: PROMO_CODE_PIN,
        end_date_time: time_format::format(now + Duration::hours(1)),
    };

    Ok(Product {
        id: parse_omni_id(coupon.id, "coupon", &coupon.omni_id)?,
        cpn_id: coupon.id,
        conditions: CONDITIONS_TEXT,
        usage: USE_TEXT,
        partner: Partner {
            id: coupon.partner_omni_id.to_string(),
            crm_id: coupon.partner_crm_id.clone(),
        },
        offer: ProductOffer {
            id: parse_omni_id(coupon.id, "offer", &offer.omni_id)?,
            cpn_id: offer.id,
            price: offer.price,
            promocodes: vec![promocode],
        },
    })
}

fn parse_omni_id(coupon_id: i64, owner: &str, raw: &str) -> Result<i64, EmulatorError> {
    raw.parse()
        .map_err(|_| EmulatorError::InvalidCatalogEntry {
            coupon_id,
            reason: format!("{owner} omni_id {raw:?} is not numeric"),
        })
}
