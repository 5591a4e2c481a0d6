//! Rounding helpers for integer division.
//!
//! This module provides [`div_round`], a free function that performs `u128`
//! division with an explicit [`Rounding`] direction.  It is the low-level
//! building block behind [`mul_div`](super::mul_div) and the fee calculation
//! in [`BasisPoints`](crate::domain::BasisPoints).
//!
//! # Convention
//!
//! Round against the caller, in favour of the pool:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Withdrawal amounts | [`Rounding::Down`] |
//! | Minted shares | [`Rounding::Down`] |
//! | Swap fee | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Rounding;
//! use pairswap::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(0, 5, Rounding::Up), Some(0));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::Up`]: ceiling division — returns the smallest integer
///   ≥ the exact quotient.
///
/// Returns [`None`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Rounding;
/// use pairswap::math::div_round;
///
/// // Exact division: both directions agree
/// assert_eq!(div_round(10, 5, Rounding::Down), Some(2));
/// assert_eq!(div_round(10, 5, Rounding::Up), Some(2));
///
/// // Non-exact division: Up rounds toward +∞
/// assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
/// assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
/// ```
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    match rounding {
        Rounding::Down => Some(numerator / denominator),
        Rounding::Up => {
            // Ceiling division: (n + d - 1) / d
            // Guard against overflow of (n + d - 1).
            match numerator.checked_add(denominator - 1) {
                Some(adjusted) => Some(adjusted / denominator),
                None => {
                    // Fallback: ceil(n / d) = floor(n / d) + (n % d != 0) as u128
                    let q = numerator / denominator;
                    let r = numerator % denominator;
                    if r != 0 {
                        // q + 1 cannot overflow: if n == u128::MAX and d == 1 then
                        // r == 0, so we never reach this branch with q == u128::MAX.
                        Some(q + 1)
                    } else {
                        Some(q)
                    }
                }
            }
        }
    }
}
