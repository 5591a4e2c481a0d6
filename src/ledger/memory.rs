//! Map-backed reference ledger.

use std::collections::HashMap;

use log::debug;

use super::LedgerError;
use crate::domain::{AccountAddress, Amount, TokenAddress};
use crate::traits::Ledger;

/// An in-memory [`Ledger`] with ERC-20 style allowances.
///
/// Balances and allowances default to zero.  Zero balances are not
/// stored.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountAddress, Amount, TokenAddress};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::traits::Ledger;
///
/// let token = TokenAddress::from_bytes([1u8; 32]);
/// let alice = AccountAddress::from_bytes([10u8; 32]);
/// let bob = AccountAddress::from_bytes([11u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(token, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(token, alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(token, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(TokenAddress, AccountAddress), Amount>,
    allowances: HashMap<(TokenAddress, AccountAddress, AccountAddress), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn set_balance(&mut self, token: TokenAddress, holder: AccountAddress, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&(token, holder));
        } else {
            self.balances.insert((token, holder), amount);
        }
    }

    /// Computes both new balances of a move before writing either.
    fn debit_credit(
        &self,
        token: TokenAddress,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(Amount, Amount), LedgerError> {
        let available = self.balance_of(token, from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                token,
                holder: from,
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok((available, available));
        }
        let credited = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow { token, holder: to })?;
        Ok((debited, credited))
    }
}

impl Ledger for InMemoryLedger {
    fn balance_of(&self, token: TokenAddress, holder: AccountAddress) -> Amount {
        self.balances
            .get(&(token, holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn allowance(
        &self,
        token: TokenAddress,
        owner: AccountAddress,
        spender: AccountAddress,
    ) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(
        &mut self,
        token: TokenAddress,
        owner: AccountAddress,
        spender: AccountAddress,
        amount: Amount,
    ) {
        if amount.is_zero() {
            self.allowances.remove(&(token, owner, spender));
        } else {
            self.allowances.insert((token, owner, spender), amount);
        }
    }

    fn transfer_from(
        &mut self,
        token: TokenAddress,
        owner: AccountAddress,
        spender: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let approved = self.allowance(token, owner, spender);
        let remaining = approved
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                token,
                owner,
                needed: amount,
                available: approved,
            })?;
        let (debited, credited) = self.debit_credit(token, owner, spender, amount)?;
        self.approve(token, owner, spender, remaining);
        self.set_balance(token, owner, debited);
        self.set_balance(token, spender, credited);
        debug!("ledger: {owner} -> {spender} pulled {amount} of {token}");
        Ok(())
    }

    fn transfer(
        &mut self,
        token: TokenAddress,
        from: AccountAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let (debited, credited) = self.debit_credit(token, from, to, amount)?;
        self.set_balance(token, from, debited);
        self.set_balance(token, to, credited);
        debug!("ledger: {from} -> {to} sent {amount} of {token}");
        Ok(())
    }

    fn mint(
        &mut self,
        token: TokenAddress,
        to: AccountAddress,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let credited = self
            .balance_of(token, to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow { token, holder: to })?;
        self.set_balance(token, to, credited);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn token() -> TokenAddress {
        TokenAddress::from_bytes([1u8; 32])
    }

    fn alice() -> AccountAddress {
        AccountAddress::from_bytes([10u8; 32])
    }

    fn bob() -> AccountAddress {
        AccountAddress::from_bytes([11u8; 32])
    }

    fn funded(amount: u128) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(token(), alice(), Amount::new(amount)) else {
            panic!("mint");
        };
        ledger
    }

    // -- mint / balance_of --------------------------------------------------

    #[test]
    fn unknown_balance_is_zero() {
        let ledger = InMemoryLedger::new();
        assert_eq!(ledger.balance_of(token(), alice()), Amount::ZERO);
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::ZERO);
    }

    #[test]
    fn mint_overflow_rejected() {
        let mut ledger = funded(u128::MAX);
        assert_eq!(
            ledger.mint(token(), alice(), Amount::new(1)),
            Err(LedgerError::BalanceOverflow {
                token: token(),
                holder: alice()
            })
        );
        assert_eq!(ledger.balance_of(token(), alice()), Amount::MAX);
    }

    // -- transfer -----------------------------------------------------------

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = funded(100);
        let Ok(()) = ledger.transfer(token(), alice(), bob(), Amount::new(30)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(70));
        assert_eq!(ledger.balance_of(token(), bob()), Amount::new(30));
    }

    #[test]
    fn transfer_beyond_balance_changes_nothing() {
        let mut ledger = funded(100);
        assert_eq!(
            ledger.transfer(token(), alice(), bob(), Amount::new(101)),
            Err(LedgerError::InsufficientBalance {
                token: token(),
                holder: alice(),
                needed: Amount::new(101),
                available: Amount::new(100),
            })
        );
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(100));
        assert_eq!(ledger.balance_of(token(), bob()), Amount::ZERO);
    }

    #[test]
    fn self_transfer_is_a_no_op() {
        let mut ledger = funded(100);
        let Ok(()) = ledger.transfer(token(), alice(), alice(), Amount::new(60)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(100));
    }

    // -- transfer_from ------------------------------------------------------

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut ledger = funded(100);
        ledger.approve(token(), alice(), bob(), Amount::new(50));
        let Ok(()) = ledger.transfer_from(token(), alice(), bob(), Amount::new(20)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(30));
        assert_eq!(ledger.balance_of(token(), bob()), Amount::new(20));
    }

    #[test]
    fn transfer_from_without_allowance_rejected() {
        let mut ledger = funded(100);
        let Err(LedgerError::InsufficientAllowance { available, .. }) =
            ledger.transfer_from(token(), alice(), bob(), Amount::new(1))
        else {
            panic!("expected InsufficientAllowance");
        };
        assert_eq!(available, Amount::ZERO);
    }

    #[test]
    fn transfer_from_beyond_balance_keeps_allowance() {
        let mut ledger = funded(10);
        ledger.approve(token(), alice(), bob(), Amount::new(50));
        let Err(LedgerError::InsufficientBalance { .. }) =
            ledger.transfer_from(token(), alice(), bob(), Amount::new(20))
        else {
            panic!("expected InsufficientBalance");
        };
        assert_eq!(ledger.allowance(token(), alice(), bob()), Amount::new(50));
        assert_eq!(ledger.balance_of(token(), alice()), Amount::new(10));
    }
}
