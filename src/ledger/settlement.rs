//! All-or-nothing batches of ledger transfers.
//!
//! Each exchange operation settles one [`Settlement`]: the tokens pulled
//! from the caller into custody and the tokens pushed from custody back
//! to the caller.  Execution order:
//!
//! 1. **Preflight**: aggregate balances, allowances and credit headroom
//!    are checked for every leg before anything moves.
//! 2. **Pulls** run before **pushes**, so custody is funded by the
//!    operation's own inputs first.
//! 3. If a leg is rejected anyway, completed legs are reversed in
//!    reverse order, allowances consumed by reversed pulls are granted
//!    back, and the original error is returned.  If a reversal is itself
//!    rejected, [`LedgerError::UnwindFailed`] is returned instead.

use std::collections::HashMap;

use log::{debug, warn};

use super::LedgerError;
use crate::domain::{AccountAddress, Amount, TokenAddress};
use crate::traits::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Leg {
    token: TokenAddress,
    account: AccountAddress,
    amount: Amount,
}

/// A batch of pulls into and pushes out of a custody account.
///
/// Zero-amount legs are dropped when added.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AccountAddress, Amount, TokenAddress};
/// use pairswap::ledger::{InMemoryLedger, Settlement};
/// use pairswap::traits::Ledger;
///
/// let (a, b) = (TokenAddress::from_bytes([1u8; 32]), TokenAddress::from_bytes([2u8; 32]));
/// let custody = AccountAddress::from_bytes([0xEE; 32]);
/// let trader = AccountAddress::from_bytes([7u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(a, trader, Amount::new(100)).expect("mint");
/// ledger.mint(b, custody, Amount::new(50)).expect("mint");
/// ledger.approve(a, trader, custody, Amount::new(100));
///
/// Settlement::new(custody)
///     .pull(a, trader, Amount::new(100))
///     .push(b, trader, Amount::new(50))
///     .execute(&mut ledger)
///     .expect("settles");
/// assert_eq!(ledger.balance_of(b, trader), Amount::new(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Settlement {
    custody: AccountAddress,
    pulls: Vec<Leg>,
    pushes: Vec<Leg>,
}

impl Settlement {
    /// Starts an empty settlement against `custody`.
    pub const fn new(custody: AccountAddress) -> Self {
        Self {
            custody,
            pulls: Vec::new(),
            pushes: Vec::new(),
        }
    }

    /// Adds a pull of `amount` of `token` from `from` into custody.
    pub fn pull(mut self, token: TokenAddress, from: AccountAddress, amount: Amount) -> Self {
        if !amount.is_zero() {
            self.pulls.push(Leg {
                token,
                account: from,
                amount,
            });
        }
        self
    }

    /// Adds a push of `amount` of `token` from custody to `to`.
    pub fn push(mut self, token: TokenAddress, to: AccountAddress, amount: Amount) -> Self {
        if !amount.is_zero() {
            self.pushes.push(Leg {
                token,
                account: to,
                amount,
            });
        }
        self
    }

    /// Returns `true` if the settlement moves nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pulls.is_empty() && self.pushes.is_empty()
    }

    /// Checks that every leg can be applied, without moving anything.
    ///
    /// Legs touching the same `(token, account)` are checked against
    /// their aggregate.
    ///
    /// # Errors
    ///
    /// Returns the [`LedgerError`] the first failing leg would raise.
    pub fn preflight<L: Ledger>(&self, ledger: &L) -> Result<(), LedgerError> {
        let mut pulled: HashMap<(TokenAddress, AccountAddress), Amount> = HashMap::new();
        let mut into_custody: HashMap<TokenAddress, Amount> = HashMap::new();
        for leg in &self.pulls {
            accumulate(&mut pulled, (leg.token, leg.account), leg.amount);
            accumulate(&mut into_custody, leg.token, leg.amount);
        }
        for (&(token, owner), &needed) in &pulled {
            let available = ledger.balance_of(token, owner);
            if available < needed {
                return Err(LedgerError::InsufficientBalance {
                    token,
                    holder: owner,
                    needed,
                    available,
                });
            }
            let approved = ledger.allowance(token, owner, self.custody);
            if approved < needed {
                return Err(LedgerError::InsufficientAllowance {
                    token,
                    owner,
                    needed,
                    available: approved,
                });
            }
        }

        let mut pushed: HashMap<(TokenAddress, AccountAddress), Amount> = HashMap::new();
        let mut out_of_custody: HashMap<TokenAddress, Amount> = HashMap::new();
        for leg in &self.pushes {
            accumulate(&mut pushed, (leg.token, leg.account), leg.amount);
            accumulate(&mut out_of_custody, leg.token, leg.amount);
        }
        for (&token, &needed) in &out_of_custody {
            let held = ledger.balance_of(token, self.custody);
            let incoming = into_custody.get(&token).copied().unwrap_or(Amount::ZERO);
            let available = held.checked_add(&incoming).unwrap_or(Amount::MAX);
            if available < needed {
                return Err(LedgerError::InsufficientBalance {
                    token,
                    holder: self.custody,
                    needed,
                    available: held,
                });
            }
        }
        for (&token, &incoming) in &into_custody {
            if ledger
                .balance_of(token, self.custody)
                .checked_add(&incoming)
                .is_none()
            {
                return Err(LedgerError::BalanceOverflow {
                    token,
                    holder: self.custody,
                });
            }
        }
        for (&(token, holder), &credit) in &pushed {
            if holder != self.custody
                && ledger.balance_of(token, holder).checked_add(&credit).is_none()
            {
                return Err(LedgerError::BalanceOverflow { token, holder });
            }
        }
        Ok(())
    }

    /// Preflights, then applies every pull followed by every push.
    ///
    /// # Errors
    ///
    /// Returns the first [`LedgerError`] raised.  Any legs already
    /// applied are reversed before returning; if one of them cannot be,
    /// the error is [`LedgerError::UnwindFailed`] naming the first
    /// reversal that failed.
    pub fn execute<L: Ledger>(&self, ledger: &mut L) -> Result<(), LedgerError> {
        if let Err(err) = self.preflight(ledger) {
            warn!("settlement rejected in preflight: {err}");
            return Err(err);
        }

        for (done, leg) in self.pulls.iter().enumerate() {
            debug!("settlement: pull {} of {} from {}", leg.amount, leg.token, leg.account);
            if let Err(err) = ledger.transfer_from(leg.token, leg.account, self.custody, leg.amount)
            {
                warn!("settlement pull rejected, unwinding {done} pull(s): {err}");
                return Err(self.unwind(ledger, &self.pulls[..done], &[]).unwrap_or(err));
            }
        }

        for (done, leg) in self.pushes.iter().enumerate() {
            debug!("settlement: push {} of {} to {}", leg.amount, leg.token, leg.account);
            if let Err(err) = ledger.transfer(leg.token, self.custody, leg.account, leg.amount) {
                warn!("settlement push rejected, unwinding {done} push(es) and all pulls: {err}");
                return Err(self
                    .unwind(ledger, &self.pulls, &self.pushes[..done])
                    .unwrap_or(err));
            }
        }
        Ok(())
    }

    /// Reverses `pushes` then `pulls`, returning the first reversal that
    /// failed.
    fn unwind<L: Ledger>(
        &self,
        ledger: &mut L,
        pulls: &[Leg],
        pushes: &[Leg],
    ) -> Option<LedgerError> {
        let mut stranded = None;
        for leg in pushes.iter().rev() {
            if let Err(err) = ledger.transfer(leg.token, leg.account, self.custody, leg.amount) {
                warn!("settlement unwind of push to {} failed: {err}", leg.account);
                stranded.get_or_insert(LedgerError::UnwindFailed {
                    token: leg.token,
                    from: leg.account,
                    to: self.custody,
                    amount: leg.amount,
                });
            }
        }
        for leg in pulls.iter().rev() {
            if let Err(err) = ledger.transfer(leg.token, self.custody, leg.account, leg.amount) {
                warn!("settlement unwind of pull from {} failed: {err}", leg.account);
                stranded.get_or_insert(LedgerError::UnwindFailed {
                    token: leg.token,
                    from: self.custody,
                    to: leg.account,
                    amount: leg.amount,
                });
                continue;
            }
            let approved = ledger.allowance(leg.token, leg.account, self.custody);
            let restored = approved.checked_add(&leg.amount).unwrap_or(Amount::MAX);
            ledger.approve(leg.token, leg.account, self.custody, restored);
        }
        stranded
    }
}

fn accumulate<K: Eq + core::hash::Hash>(totals: &mut HashMap<K, Amount>, key: K, amount: Amount) {
    let total = totals.entry(key).or_insert(Amount::ZERO);
    *total = total.checked_add(&amount).unwrap_or(Amount::MAX);
}
