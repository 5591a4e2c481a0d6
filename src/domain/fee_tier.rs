//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::{DexError, Result};

/// The swap fee charged by a pool, deducted from the input amount before
/// pricing.
///
/// The default tier is zero: swaps price the full input through the
/// constant-product formula.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, FeeTier, Rounding};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.apply_to_amount(Amount::new(1_000), Rounding::Up), Ok(Amount::new(3)));
/// assert_eq!(FeeTier::default(), FeeTier::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Computes the fee for `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::Overflow`] if the intermediate multiplication overflows.
    pub const fn apply_to_amount(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        self.0.apply(amount, rounding)
    }

    /// Checks that the tier leaves a nonzero share of every input to be
    /// priced.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`] if the tier is 100% or more.
    pub const fn validate(&self) -> Result<()> {
        if self.0.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(DexError::InvalidFee("fee must be below 100%"));
        }
        Ok(())
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
