//! Exchange-wide configuration.

use super::InitialMint;
use crate::domain::FeeTier;
use crate::error::Result;

/// Parameters shared by every pool an [`Exchange`](crate::exchange::Exchange)
/// registers.
///
/// - `fee_tier`: swap fee, charged on the input and left in the pool.
///   Defaults to zero.
/// - `initial_mint`: share supply rule for a seeding deposit. Defaults to
///   [`InitialMint::SpotValue`].
///
/// A pool keeps the fee tier it was registered with; changing the config
/// of a running exchange is not supported.
///
/// # Examples
///
/// ```
/// use pairswap::config::{ExchangeConfig, InitialMint};
/// use pairswap::domain::FeeTier;
///
/// let config = ExchangeConfig::default()
///     .with_fee_tier(FeeTier::TIER_0_30_PERCENT)
///     .with_initial_mint(InitialMint::Sum);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    fee_tier: FeeTier,
    #[cfg_attr(feature = "serde", serde(default))]
    initial_mint: InitialMint,
}

impl ExchangeConfig {
    /// Creates a validated `ExchangeConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`](crate::error::DexError::InvalidFee)
    /// if the fee is 100% or more.
    pub fn new(fee_tier: FeeTier, initial_mint: InitialMint) -> Result<Self> {
        let config = Self {
            fee_tier,
            initial_mint,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`](crate::error::DexError::InvalidFee)
    /// if the fee is 100% or more.
    pub fn validate(&self) -> Result<()> {
        self.fee_tier.validate()
    }

    /// Returns a copy with the given fee tier. Not validated until
    /// [`validate`](Self::validate) or `Exchange::new`.
    #[must_use]
    pub const fn with_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.fee_tier = fee_tier;
        self
    }

    /// Returns a copy with the given initial mint rule.
    #[must_use]
    pub const fn with_initial_mint(mut self, initial_mint: InitialMint) -> Self {
        self.initial_mint = initial_mint;
        self
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the initial mint rule.
    #[must_use]
    pub const fn initial_mint(&self) -> InitialMint {
        self.initial_mint
    }
}
