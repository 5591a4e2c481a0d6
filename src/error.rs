//! Unified error types for the exchange.
//!
//! Every fallible operation in the crate returns [`DexError`].  Ledger
//! rejections are carried inside [`DexError::TransferFailed`] so callers
//! can tell a failed pull from a failed precondition.

use crate::ledger::LedgerError;

/// Error returned by every exchange, pool and registry operation.
///
/// A returned error means the call had no effect: no pool state changed
/// and no ledger transfer remains applied.  The one exception is
/// [`DexError::TransferFailed`] carrying
/// [`LedgerError::UnwindFailed`], where the ledger rejected the reversal
/// of a leg it had already applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DexError {
    /// `create_pool` on a pair whose pool still holds reserves.
    #[error("pool already exists for this pair")]
    AlreadyExists,

    /// Operation on an unregistered or empty pair.
    #[error("no pool exists for this pair")]
    PoolNotFound,

    /// Deposit ratio deviates from the pool's reserve ratio.
    #[error("must add liquidity at the current spot price")]
    InvalidRatio,

    /// `remove_liquidity` by an account holding no shares.
    #[error("caller holds no shares in this pool")]
    NoShares,

    /// Swap output would be zero or would drain the output reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The ledger rejected a pull or push.
    #[error("ledger transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),

    /// Token arguments do not describe a usable pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// An amount is zero or too small to have an effect.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Exchange configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Fee outside the usable range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Checked arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, DexError>;
