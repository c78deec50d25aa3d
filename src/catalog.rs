use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::Coupon;
use crate::error::CatalogError;

/// Read-only pool of coupons the engine selects from.
pub trait CouponCatalog: Send + Sync {
    fn coupons(&self) -> &[Coupon];
}

/// Catalog loaded once at startup and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    coupons: Vec<Coupon>,
}

impl StaticCatalog {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// Loads a JSON array of coupons from `path`.
    ///
    /// Suspicious entries are only reported here; they fail the request that
    /// selects them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let coupons: Vec<Coupon> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::new(coupons);
        if catalog.is_empty() {
            warn!(path = %path.display(), "catalog is empty, order requests will fail");
        }
        for coupon in catalog.coupons.iter().filter(|c| c.offers.is_empty()) {
            warn!(coupon_id = coupon.id, "coupon has no offers");
        }
        info!(path = %path.display(), coupons = catalog.len(), "loaded coupon catalog");

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl CouponCatalog for StaticCatalog {
    fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }
}
