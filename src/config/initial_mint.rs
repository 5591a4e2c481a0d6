//! Share-minting rule for the first deposit into an empty pool.

use crate::domain::{Amount, Shares};
use crate::error::{DexError, Result};

/// How many LP shares the seeding deposit of a pool mints.
///
/// Later deposits always mint proportionally to the existing supply; only
/// the first one needs a rule.
///
/// | Rule | Shares for `(5_000, 500_000)` |
/// |------|-------------------------------|
/// | [`SpotValue`](Self::SpotValue) | `10_000` |
/// | [`Sum`](Self::Sum) | `505_000` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialMint {
    /// Both legs valued in units of the scarcer leg at the deposit's own
    /// price: `2 × min(amount_x, amount_y)`.
    #[default]
    SpotValue,
    /// Plain sum of both legs: `amount_x + amount_y`.
    Sum,
}

impl InitialMint {
    /// Computes the initial share supply for a seeding deposit.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidQuantity`] if either amount is zero.
    /// - [`DexError::Overflow`] if the supply does not fit in `u128`.
    pub fn compute(self, amount_x: Amount, amount_y: Amount) -> Result<Shares> {
        if amount_x.is_zero() || amount_y.is_zero() {
            return Err(DexError::InvalidQuantity(
                "seeding deposit requires both amounts to be positive",
            ));
        }
        let minted = match self {
            Self::SpotValue => core::cmp::min(amount_x, amount_y).get().checked_mul(2),
            Self::Sum => amount_x.get().checked_add(amount_y.get()),
        };
        minted
            .map(Shares::new)
            .ok_or(DexError::Overflow("initial share supply"))
    }
}
