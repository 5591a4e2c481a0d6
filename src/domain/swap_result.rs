//! Outcome of a swap.

use core::fmt;

use super::Amount;
use crate::error::{DexError, Result};

/// The outcome of a swap: what went in, what came out, and how much of
/// the input was kept as fee.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`: some part of the input is always priced.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, SwapResult};
///
/// let result = SwapResult::new(Amount::new(1_000), Amount::new(90_909), Amount::ZERO)
///     .expect("valid swap result");
/// assert_eq!(result.amount_out(), Amount::new(90_909));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if either amount is zero or
    /// `fee >= amount_in`.
    pub const fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(DexError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(DexError::InvalidQuantity("amount_out must be positive"));
        }
        if fee.get() >= amount_in.get() {
            return Err(DexError::InvalidQuantity("fee must be less than amount_in"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the input amount pulled from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount pushed to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the part of the input retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}
