//! Constant-product pool with LP share accounting.
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two tokens.  Fees are deducted from the input amount **before**
//! the pricing formula is applied.
//!
//! # Swap Algorithm (Token A → Token B)
//!
//! 1. `fee = ⌈amount_in × fee_bps / 10 000⌉`
//! 2. `net_input = amount_in − fee`
//! 3. `amount_out = ⌊reserve_b × net_input / (reserve_a + net_input)⌋`
//! 4. `reserve_a += amount_in` (fee stays in the pool)
//! 5. `reserve_b -= amount_out`
//!
//! # Staged updates
//!
//! Every mutating operation is split in two.  A `plan_*` method validates
//! the request against the current state and returns a [`PoolUpdate`]
//! without touching the pool; [`ConstantProductPool::commit`] then
//! applies it by plain assignment and cannot fail.  The exchange settles
//! ledger transfers between the two steps, so a rejected transfer leaves
//! the pool as it was.
//!
//! All amounts handled here are in canonical pair order (token A is
//! [`TokenPair::first`]).

use std::collections::BTreeMap;

use log::debug;

use crate::config::InitialMint;
use crate::domain::{
    AccountAddress, Amount, FeeTier, Rounding, Shares, SwapResult, TokenAddress, TokenPair,
    Withdrawal,
};
use crate::error::{DexError, Result};
use crate::math::{cross_products_equal, mul_div, product, CheckedArithmetic, U256};

/// A constant-product pool (`x · y = k`) for one token pair.
///
/// # State
///
/// - `reserve_a` / `reserve_b`: current token balances, fees included.
/// - `total_shares`: outstanding LP shares.
/// - `shares`: per-provider share balances; zero balances are not kept,
///   and the entries always sum to `total_shares`.
///
/// A pool starts empty, is seeded by [`plan_seed`](Self::plan_seed), and
/// returns to empty when the last provider withdraws.
///
/// # Example
///
/// ```rust
/// use pairswap::config::InitialMint;
/// use pairswap::domain::{AccountAddress, Amount, FeeTier, Shares, TokenAddress, TokenPair};
/// use pairswap::pools::ConstantProductPool;
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let lp = AccountAddress::from_bytes([10u8; 32]);
///
/// let mut pool = ConstantProductPool::new(TokenPair::new(a, b).expect("distinct"), FeeTier::ZERO);
/// let (update, minted) = pool
///     .plan_seed(lp, Amount::new(5_000), Amount::new(500_000), InitialMint::SpotValue)
///     .expect("seeded");
/// pool.commit(update);
///
/// assert_eq!(minted, Shares::new(10_000));
/// let quote = pool.quote_swap(a, Amount::new(1_000)).expect("priced");
/// assert_eq!(quote.amount_out(), Amount::new(83_333));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    pair: TokenPair,
    fee_tier: FeeTier,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    shares: BTreeMap<AccountAddress, Shares>,
}

/// A staged pool mutation produced by one of the `plan_*` methods.
///
/// Holds the complete post-operation state of the touched fields; it
/// must be committed to the pool it was planned on, before any other
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PoolUpdate {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    provider: Option<(AccountAddress, Shares)>,
}

impl PoolUpdate {
    /// Returns the reserves the pool will hold after commit.
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns the share supply after commit.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }
}

impl ConstantProductPool {
    /// Creates an empty pool for `pair`.
    #[must_use]
    pub const fn new(pair: TokenPair, fee_tier: FeeTier) -> Self {
        Self {
            pair,
            fee_tier,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            shares: BTreeMap::new(),
        }
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the current reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the share balance of `provider`, zero if unknown.
    pub fn shares_of(&self, provider: &AccountAddress) -> Shares {
        self.shares.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Iterates over providers with a nonzero balance, in address order.
    pub fn providers(&self) -> impl Iterator<Item = (AccountAddress, Shares)> + '_ {
        self.shares.iter().map(|(account, shares)| (*account, *shares))
    }

    /// Returns `true` if the pool holds no reserves and no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns `k = reserve_a × reserve_b` at full width.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        product(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Plans the seeding deposit of an empty pool.
    ///
    /// Returns the update and the shares minted to `provider`, which
    /// become the entire supply.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidQuantity`] if either amount is zero.
    /// - [`DexError::AlreadyExists`] if the pool holds reserves.
    /// - [`DexError::Overflow`] if the initial supply overflows.
    pub fn plan_seed(
        &self,
        provider: AccountAddress,
        amount_a: Amount,
        amount_b: Amount,
        rule: InitialMint,
    ) -> Result<(PoolUpdate, Shares)> {
        let minted = rule.compute(amount_a, amount_b)?;
        if !self.is_empty() {
            return Err(DexError::AlreadyExists);
        }
        debug!(
            "plan seed {}: {amount_a}/{amount_b} mints {minted} to {provider}",
            self.pair
        );
        Ok((
            PoolUpdate {
                reserve_a: amount_a,
                reserve_b: amount_b,
                total_shares: minted,
                provider: Some((provider, minted)),
            },
            minted,
        ))
    }

    /// Plans a deposit at the current spot price.
    ///
    /// The deposit must satisfy `amount_a × reserve_b == amount_b ×
    /// reserve_a` exactly.  Shares minted are
    /// `⌊total_shares × amount_a / reserve_a⌋`, computed on the
    /// pre-deposit state.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidQuantity`] if either amount is zero or the
    ///   deposit is too small to mint a share.
    /// - [`DexError::PoolNotFound`] if the pool is empty.
    /// - [`DexError::InvalidRatio`] if the ratio deviates from the
    ///   reserves.
    /// - [`DexError::Overflow`] if a reserve or the supply overflows.
    pub fn plan_deposit(
        &self,
        provider: AccountAddress,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(PoolUpdate, Shares)> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(DexError::InvalidQuantity(
                "deposit requires both amounts to be positive",
            ));
        }
        if self.is_empty() {
            return Err(DexError::PoolNotFound);
        }
        if !cross_products_equal(
            amount_a.get(),
            self.reserve_b.get(),
            amount_b.get(),
            self.reserve_a.get(),
        ) {
            return Err(DexError::InvalidRatio);
        }

        let minted = self.total_shares.safe_scale(
            amount_a.get(),
            self.reserve_a.get(),
            Rounding::Down,
            "minted shares overflow",
        )?;
        if minted.is_zero() {
            return Err(DexError::InvalidQuantity(
                "deposit too small to mint shares",
            ));
        }

        let reserve_a = self.reserve_a.safe_add(&amount_a, "reserve_a overflow on deposit")?;
        let reserve_b = self.reserve_b.safe_add(&amount_b, "reserve_b overflow on deposit")?;
        let total_shares = self.total_shares.safe_add(&minted, "total shares overflow")?;
        let balance = self.shares_of(&provider).safe_add(&minted, "provider shares overflow")?;

        debug!(
            "plan deposit {}: {amount_a}/{amount_b} mints {minted} to {provider}",
            self.pair
        );
        Ok((
            PoolUpdate {
                reserve_a,
                reserve_b,
                total_shares,
                provider: Some((provider, balance)),
            },
            minted,
        ))
    }

    /// Plans the withdrawal of all of `provider`'s shares.
    ///
    /// Each reserve pays out `⌊reserve × shares / total_shares⌋`; the
    /// truncated remainder stays with the remaining providers.  The
    /// returned [`Withdrawal`] is in canonical order.
    ///
    /// # Errors
    ///
    /// - [`DexError::NoShares`] if `provider` holds no shares.
    /// - [`DexError::Overflow`] on inconsistent state.
    pub fn plan_withdrawal(&self, provider: AccountAddress) -> Result<(PoolUpdate, Withdrawal)> {
        let burned = self.shares_of(&provider);
        if burned.is_zero() {
            return Err(DexError::NoShares);
        }
        let total = self.total_shares.get();
        let out_a = self.reserve_a.safe_scale(
            burned.get(),
            total,
            Rounding::Down,
            "withdrawal of token A",
        )?;
        let out_b = self.reserve_b.safe_scale(
            burned.get(),
            total,
            Rounding::Down,
            "withdrawal of token B",
        )?;

        let reserve_a = self.reserve_a.safe_sub(&out_a, "reserve_a underflow on withdrawal")?;
        let reserve_b = self.reserve_b.safe_sub(&out_b, "reserve_b underflow on withdrawal")?;
        let total_shares = self.total_shares.safe_sub(&burned, "total shares underflow")?;

        debug!(
            "plan withdrawal {}: {provider} burns {burned} for {out_a}/{out_b}",
            self.pair
        );
        Ok((
            PoolUpdate {
                reserve_a,
                reserve_b,
                total_shares,
                provider: Some((provider, Shares::ZERO)),
            },
            Withdrawal::new(out_a, out_b, burned),
        ))
    }

    /// Plans an exact-in swap of `amount_in` of `token_in`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`DexError::InvalidQuantity`] if `amount_in` or the post-fee
    ///   input is zero.
    /// - [`DexError::PoolNotFound`] if the pool is empty.
    /// - [`DexError::InsufficientLiquidity`] if the output would be zero
    ///   or drain the output reserve.
    /// - [`DexError::Overflow`] if any arithmetic overflows.
    pub fn plan_swap(
        &self,
        token_in: TokenAddress,
        amount_in: Amount,
    ) -> Result<(PoolUpdate, SwapResult)> {
        if !self.pair.contains(&token_in) {
            return Err(DexError::InvalidToken("token_in is not part of the pool pair"));
        }
        if amount_in.is_zero() {
            return Err(DexError::InvalidQuantity("amount_in must be positive"));
        }
        if self.is_empty() {
            return Err(DexError::PoolNotFound);
        }

        let is_a_to_b = token_in == self.pair.first();
        let (reserve_in, reserve_out) = if is_a_to_b {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        };

        let (amount_out, fee) = self.compute_exact_in(amount_in, reserve_in, reserve_out)?;

        let new_reserve_in = reserve_in.safe_add(&amount_in, "reserve_in overflow after swap")?;
        let new_reserve_out =
            reserve_out.safe_sub(&amount_out, "reserve_out underflow after swap")?;
        let (reserve_a, reserve_b) = if is_a_to_b {
            (new_reserve_in, new_reserve_out)
        } else {
            (new_reserve_out, new_reserve_in)
        };

        debug!(
            "plan swap {}: {amount_in} of {token_in} for {amount_out} (fee {fee})",
            self.pair
        );
        Ok((
            PoolUpdate {
                reserve_a,
                reserve_b,
                total_shares: self.total_shares,
                provider: None,
            },
            SwapResult::new(amount_in, amount_out, fee)?,
        ))
    }

    /// Prices an exact-in swap without planning a mutation.
    ///
    /// # Errors
    ///
    /// Same as [`plan_swap`](Self::plan_swap).
    pub fn quote_swap(&self, token_in: TokenAddress, amount_in: Amount) -> Result<SwapResult> {
        self.plan_swap(token_in, amount_in).map(|(_, result)| result)
    }

    /// Applies a staged update.
    pub fn commit(&mut self, update: PoolUpdate) {
        self.reserve_a = update.reserve_a;
        self.reserve_b = update.reserve_b;
        self.total_shares = update.total_shares;
        if let Some((provider, balance)) = update.provider {
            if balance.is_zero() {
                self.shares.remove(&provider);
            } else {
                self.shares.insert(provider, balance);
            }
        }
    }

    /// Computes the exact-in swap output.
    ///
    /// Formula: `amount_out = reserve_out × net_input / (reserve_in + net_input)`
    ///
    /// Returns `(amount_out, fee)`.
    fn compute_exact_in(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<(Amount, Amount)> {
        // round the fee up to favour the pool
        let fee = self.fee_tier.apply_to_amount(amount_in, Rounding::Up)?;
        let net_input = amount_in.safe_sub(&fee, "net input underflow")?;
        if net_input.is_zero() {
            return Err(DexError::InvalidQuantity("net input after fee is zero"));
        }

        let denominator = reserve_in.safe_add(&net_input, "swap denominator overflow")?;
        let amount_out = mul_div(
            reserve_out.get(),
            net_input.get(),
            denominator.get(),
            Rounding::Down,
        )
        .map(Amount::new)
        .ok_or(DexError::Overflow("swap output overflow"))?;

        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(DexError::InsufficientLiquidity);
        }
        Ok((amount_out, fee))
    }
}
