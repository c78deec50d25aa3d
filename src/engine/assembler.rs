use chrono::NaiveDateTime;

use crate::domain::order::{PRODUCT_TYPE_COUPON, STATUS_SUCCESS};
use crate::domain::{
    CouponStats, FiltersEcho, LastOrder, OrderResponse, OrderResponseData, OrderStats,
    RequestFilters, SynthesizedOrder,
};
use crate::time_format;

/// Offset between the requested start id and the reported last order id.
pub const LAST_ORDER_OFFSET: i64 = 10;

pub fn assemble(
    orders: Vec<SynthesizedOrder>,
    filters: &RequestFilters,
    now: NaiveDateTime,
) -> OrderResponse {
    let timestamp = time_format::format(now);

    OrderResponse {
        status: STATUS_SUCCESS,
        messages: Vec::new(),
        data: OrderResponseData {
            filters: echo_filters(filters),
            stats: OrderStats {
                coupon: CouponStats {
                    last_order: LastOrder {
                        order_id: filters
                            .order_id_from
                            .map(|from| from.saturating_add(LAST_ORDER_OFFSET)),
                        date_created: timestamp.clone(),
                    },
                },
            },
            timestamp,
            orders,
        },
    }
}

/// Explicit order ids suppress `order_id_from`; otherwise `order_ids` is
/// dropped from the echo.
pub fn echo_filters(filters: &RequestFilters) -> FiltersEcho {
    let (order_id_from, order_ids) = match filters.explicit_order_ids() {
        Some(ids) => (None, Some(ids.to_vec())),
        None => (filters.order_id_from, None),
    };

    FiltersEcho {
        limit: filters.limit,
        product_type: PRODUCT_TYPE_COUPON,
        order_id_from,
        order_ids,
    }
}
