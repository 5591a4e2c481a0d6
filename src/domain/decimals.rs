//! Token decimal places.

use super::Amount;
use crate::error::{DexError, Result};

/// Maximum supported decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places a token uses for display.
///
/// The exchange never converts between scales: every [`Amount`] is already
/// in the smallest unit.  `Decimals` exists so callers can turn whole-token
/// figures into raw amounts the way wallets do.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Decimals};
///
/// let d = Decimals::new(18).expect("18 is valid");
/// assert_eq!(d.scale_up(5_000), Some(Amount::new(5_000 * 10u128.pow(18))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the scale used by ERC-20 style tokens.
    pub const EIGHTEEN: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidQuantity`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(DexError::InvalidQuantity("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole-token figure into raw units.
    ///
    /// Returns `None` if the result overflows `u128`.
    #[must_use]
    pub const fn scale_up(&self, whole: u128) -> Option<Amount> {
        match whole.checked_mul(self.factor()) {
            Some(v) => Some(Amount::new(v)),
            None => None,
        }
    }

    /// Returns `10^decimals`.
    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}
