//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning checked
//! methods of [`Amount`] and [`Shares`] into [`Result`]s carrying a
//! [`DexError`] with caller-supplied context, so pool code can chain
//! calculations with `?`.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::{Amount, Rounding};
//! use pairswap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(12_000);
//! let out = reserve.safe_scale(10_000, 24_000, Rounding::Down, "withdrawal");
//! assert_eq!(out, Ok(Amount::new(5_000)));
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::{DexError, Result};

use super::mul_div;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: errors propagate instead.
/// - The `context` string names the quantity being computed and ends up
///   in [`DexError::Overflow`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self>;

    /// Computes `self × numerator / denominator` through a 256-bit
    /// intermediate.
    ///
    /// # Errors
    ///
    /// - [`DexError::DivisionByZero`] if `denominator` is zero.
    /// - [`DexError::Overflow`] if the quotient exceeds `u128::MAX`.
    fn safe_scale(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
        context: &'static str,
    ) -> Result<Self>;
}

fn scale(
    value: u128,
    numerator: u128,
    denominator: u128,
    rounding: Rounding,
    context: &'static str,
) -> Result<u128> {
    if denominator == 0 {
        return Err(DexError::DivisionByZero);
    }
    mul_div(value, numerator, denominator, rounding).ok_or(DexError::Overflow(context))
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(DexError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(DexError::Overflow(context))
    }

    #[inline]
    fn safe_scale(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
        context: &'static str,
    ) -> Result<Self> {
        scale(self.get(), numerator, denominator, rounding, context).map(Amount::new)
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(DexError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(DexError::Overflow(context))
    }

    #[inline]
    fn safe_scale(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
        context: &'static str,
    ) -> Result<Self> {
        scale(self.get(), numerator, denominator, rounding, context).map(Shares::new)
    }
}
