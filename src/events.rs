//! Journal entries for committed exchange operations.
//!
//! One [`ExchangeEvent`] is recorded per successful mutating call, after
//! the ledger has settled and the pool update is committed.  Failed calls
//! record nothing.  Token amounts are in canonical pair order.

use crate::domain::{AccountAddress, Amount, Shares, TokenAddress, TokenPair};

/// A committed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExchangeEvent {
    /// A pool was seeded by its first deposit.
    PoolCreated {
        /// Seeding provider.
        provider: AccountAddress,
        /// Pool pair.
        pair: TokenPair,
        /// Deposited amount of the pair's first token.
        amount_a: Amount,
        /// Deposited amount of the pair's second token.
        amount_b: Amount,
        /// Initial share supply, all credited to `provider`.
        minted: Shares,
    },

    /// Liquidity was added at the spot price.
    LiquidityAdded {
        /// Depositing provider.
        provider: AccountAddress,
        /// Pool pair.
        pair: TokenPair,
        /// Deposited amount of the pair's first token.
        amount_a: Amount,
        /// Deposited amount of the pair's second token.
        amount_b: Amount,
        /// Shares credited to `provider`.
        minted: Shares,
    },

    /// A provider withdrew its whole position.
    LiquidityRemoved {
        /// Withdrawing provider.
        provider: AccountAddress,
        /// Pool pair.
        pair: TokenPair,
        /// Returned amount of the pair's first token.
        amount_a: Amount,
        /// Returned amount of the pair's second token.
        amount_b: Amount,
        /// Shares burned.
        burned: Shares,
    },

    /// A trader swapped one token of the pair for the other.
    Swapped {
        /// Trader.
        trader: AccountAddress,
        /// Token sold to the pool.
        token_in: TokenAddress,
        /// Token bought from the pool.
        token_out: TokenAddress,
        /// Amount pulled from the trader, fee included.
        amount_in: Amount,
        /// Amount pushed to the trader.
        amount_out: Amount,
        /// Part of `amount_in` kept as fee.
        fee: Amount,
    },
}

impl ExchangeEvent {
    /// Returns the account that initiated the operation.
    #[must_use]
    pub const fn caller(&self) -> AccountAddress {
        match self {
            Self::PoolCreated { provider, .. }
            | Self::LiquidityAdded { provider, .. }
            | Self::LiquidityRemoved { provider, .. } => *provider,
            Self::Swapped { trader, .. } => *trader,
        }
    }
}
