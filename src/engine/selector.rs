use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Coupon;
use crate::error::EmulatorError;

/// Picks one coupon with uniform probability.
pub fn select<'a, R: Rng + ?Sized>(
    coupons: &'a [Coupon],
    rng: &mut R,
) -> Result<&'a Coupon, EmulatorError> {
    coupons.choose(rng).ok_or(EmulatorError::EmptyCatalog)
}
