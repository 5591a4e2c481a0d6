//! Errors raised by a token ledger.

use crate::domain::{AccountAddress, Amount, TokenAddress};

/// A rejected ledger transfer.
///
/// Carried to callers inside
/// [`DexError::TransferFailed`](crate::error::DexError::TransferFailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The holder's balance does not cover the transfer.
    #[error("insufficient balance of {token} for {holder}: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Token being moved.
        token: TokenAddress,
        /// Account being debited.
        holder: AccountAddress,
        /// Amount requested.
        needed: Amount,
        /// Amount held.
        available: Amount,
    },

    /// The owner has not approved enough for the spender.
    #[error("insufficient allowance of {token} from {owner}: needed {needed}, available {available}")]
    InsufficientAllowance {
        /// Token being pulled.
        token: TokenAddress,
        /// Account whose approval is consumed.
        owner: AccountAddress,
        /// Amount requested.
        needed: Amount,
        /// Amount approved.
        available: Amount,
    },

    /// A leg was rejected and reversing an already applied leg failed too.
    ///
    /// The reversal of `amount` of `token` from `from` back to `to` was not
    /// applied, so the ledger no longer matches its state before the
    /// settlement.
    #[error("unwind of {amount} of {token} from {from} back to {to} failed")]
    UnwindFailed {
        /// Token of the leg that could not be reversed.
        token: TokenAddress,
        /// Account the reversal debits.
        from: AccountAddress,
        /// Account the reversal credits.
        to: AccountAddress,
        /// Amount left unreversed.
        amount: Amount,
    },

    /// Crediting the holder would overflow its balance.
    #[error("balance overflow of {token} for {holder}")]
    BalanceOverflow {
        /// Token being credited.
        token: TokenAddress,
        /// Account being credited.
        holder: AccountAddress,
    },
}
