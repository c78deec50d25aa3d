pub mod assembler;
pub mod delay;
pub mod selector;
pub mod synthesizer;

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::CouponCatalog;
use crate::domain::{OrderResponse, RequestFilters};
use crate::error::EmulatorError;

pub use assembler::assemble;
pub use delay::DelayConfig;
pub use selector::select;
pub use synthesizer::synthesize;

/// Runs one request through selection, synthesis and assembly.
///
/// Nothing is returned unless every stage succeeds.
pub fn generate_order_response<C, R>(
    request_id: &str,
    filters: &RequestFilters,
    catalog: &C,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<OrderResponse, EmulatorError>
where
    C: CouponCatalog + ?Sized,
    R: Rng + ?Sized,
{
    let coupons = catalog.coupons();
    debug!(request_id, coupons = coupons.len(), "selecting coupon");

    let coupon = select(coupons, rng)?;
    info!(request_id, coupon_id = coupon.id, "selected coupon");

    let orders = synthesize(filters, coupon, now, rng)?;
    info!(request_id, orders = orders.len(), "synthesized orders");

    Ok(assemble(orders, filters, now))
}
