//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountAddress, Amount, BasisPoints, Decimals, FeeTier, Rounding, Shares, SwapResult,
    TokenAddress, TokenPair, Withdrawal,
};

pub use crate::traits::Ledger;

pub use crate::math::CheckedArithmetic;

pub use crate::config::{ExchangeConfig, InitialMint};

pub use crate::error::{DexError, Result};

pub use crate::events::ExchangeEvent;
pub use crate::exchange::Exchange;
pub use crate::ledger::{InMemoryLedger, LedgerError, Settlement};
pub use crate::pools::ConstantProductPool;
pub use crate::registry::PoolRegistry;
