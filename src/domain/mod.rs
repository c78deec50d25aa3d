pub mod coupon;
pub mod order;
pub mod request;
pub mod response;

pub use coupon::{Coupon, Offer};
pub use order::{Partner, Product, ProductOffer, Promocode, SynthesizedOrder, TotalAmount};
pub use request::{OrderRequest, RequestFilters, RequestStats};
pub use response::{
    CouponStats, EmulatedResponse, FiltersEcho, LastOrder, OrderResponse, OrderResponseData,
    OrderStats,
};
