//! 256-bit intermediates for reserve products.
//!
//! Two 18-decimal reserves of a few hundred thousand tokens already
//! multiply past `u128::MAX`.  Every product of two amounts (the ratio
//! gate, proportional minting and burning, swap pricing and the `k`
//! invariant) is therefore formed in [`U256`] and only the quotient is
//! narrowed back to `u128`.

use crate::domain::Rounding;

#[allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast, clippy::manual_div_ceil)]
mod uint256 {
    uint::construct_uint! {
        /// Unsigned 256-bit integer for intermediate products.
        pub struct U256(4);
    }
}

pub use uint256::U256;

/// Returns `a × b` without loss.
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Returns `true` when `a × b == c × d`.
///
/// Used to compare two ratios `a / d` and `c / b` exactly, without
/// division.
#[must_use]
pub fn cross_products_equal(a: u128, b: u128, c: u128, d: u128) -> bool {
    product(a, b) == product(c, d)
}

/// Computes `a × b / denominator` with the requested rounding.
///
/// Returns `None` if `denominator` is zero or the quotient exceeds
/// `u128::MAX`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::mul_div;
///
/// let e18 = 10u128.pow(18);
/// assert_eq!(
///     mul_div(1_000_000 * e18, 1_000 * e18, 11_000 * e18, Rounding::Down),
///     Some(90_909_090_909_090_909_090_909),
/// );
/// assert_eq!(mul_div(7, 3, 0, Rounding::Down), None);
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let numerator = product(a, b);
    let d = U256::from(denominator);
    let mut quotient = numerator / d;
    if rounding.is_up() && !(numerator % d).is_zero() {
        quotient = quotient + U256::one();
    }
    narrow(quotient)
}

/// Narrows a [`U256`] back to `u128`, or `None` if it does not fit.
#[must_use]
pub fn narrow(value: U256) -> Option<u128> {
    if value.bits() > 128 {
        None
    } else {
        Some(value.low_u128())
    }
}
