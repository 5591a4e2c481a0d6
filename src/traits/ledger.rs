//! Token ledger collaborator.
//!
//! The exchange never holds token balances itself.  Every deposit,
//! withdrawal and swap moves tokens on a [`Ledger`] between the caller and
//! the exchange's custody account.
//!
//! # Pull and push
//!
//! - **Pull**: [`Ledger::transfer_from`] moves tokens from a caller into
//!   custody, consuming an allowance the caller granted to custody.
//! - **Push**: [`Ledger::transfer`] moves tokens out of custody to a
//!   caller.
//!
//! Implementations must leave balances and allowances unchanged when they
//! return an error.

use crate::domain::{AccountAddress, Amount, TokenAddress};
use crate::ledger::LedgerError;

/// Balance and transfer operations of an external token ledger.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger): a map-backed
///   ledger with allowances, used by tests and simulations.
pub trait Ledger {
    /// Returns the balance of `holder` in `token`.
    fn balance_of(&self, token: TokenAddress, holder: AccountAddress) -> Amount;

    /// Returns how much of `owner`'s `token` balance `spender` may pull.
    fn allowance(&self, token: TokenAddress, owner: AccountAddress, spender: AccountAddress)
        -> Amount;

    /// Sets the amount of `owner`'s `token` that `spender` may pull,
    /// replacing any previous approval.
    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountAddress,
        spender: AccountAddress,
        amount: Amount,
    );

    /// Moves `amount` of `token` from `owner` to `spender`, consuming the
    /// allowance `owner` granted `spender`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too low.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds too little.
    /// - [`LedgerError::BalanceOverflow`] if `spender`'s balance would
    ///   overflow.
    fn transfer_from(
        &mut self,
        token: TokenAddress,
        owner: AccountAddress,
        spender: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds too little.
    /// - [`LedgerError::BalanceOverflow`] if `to`'s balance would overflow.
    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Creates `amount` of `token` for `to`.  Used to fund accounts in
    /// tests and simulations; the exchange itself never mints.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceOverflow`] if the balance would
    /// overflow.
    fn mint(
        &mut self,
        token: TokenAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
