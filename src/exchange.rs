//! The exchange: pool registry, ledger settlement and queries.
//!
//! Every mutating operation follows the same three steps:
//!
//! 1. **Plan**: the pool validates the request and stages a
//!    [`PoolUpdate`](crate::pools::PoolUpdate) without mutating anything.
//! 2. **Settle**: the ledger transfers run as one [`Settlement`]; a
//!    rejection unwinds them and aborts the call.
//! 3. **Commit**: the staged update is assigned to the pool and an
//!    [`ExchangeEvent`] is journaled.
//!
//! A failed call therefore leaves every pool and every ledger balance as
//! it found them.

use log::info;

use crate::config::ExchangeConfig;
use crate::domain::{
    AccountAddress, Amount, Shares, SwapResult, TokenAddress, TokenPair, Withdrawal,
};
use crate::error::{DexError, Result};
use crate::events::ExchangeEvent;
use crate::ledger::Settlement;
use crate::pools::ConstantProductPool;
use crate::registry::PoolRegistry;
use crate::traits::Ledger;

/// A constant-product exchange settling against a [`Ledger`].
///
/// Reserves of every pool are held by the `custody` account on the
/// ledger.  Liquidity providers and traders must approve `custody` to
/// pull their deposits and swap inputs.
///
/// # Examples
///
/// ```
/// use pairswap::config::ExchangeConfig;
/// use pairswap::domain::{AccountAddress, Amount, Shares, TokenAddress};
/// use pairswap::exchange::Exchange;
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::traits::Ledger;
///
/// let (a, b) = (TokenAddress::from_bytes([1u8; 32]), TokenAddress::from_bytes([2u8; 32]));
/// let custody = AccountAddress::from_bytes([0xEE; 32]);
/// let lp = AccountAddress::from_bytes([10u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// for (token, amount) in [(a, 5_000), (b, 500_000)] {
///     ledger.mint(token, lp, Amount::new(amount)).expect("mint");
///     ledger.approve(token, lp, custody, Amount::new(amount));
/// }
///
/// let mut exchange = Exchange::new(ExchangeConfig::default(), custody, ledger).expect("valid");
/// let minted = exchange
///     .create_pool(lp, b, a, Amount::new(500_000), Amount::new(5_000))
///     .expect("created");
/// assert_eq!(minted, Shares::new(10_000));
/// assert_eq!(
///     exchange.get_balances(a, b),
///     Ok((Amount::new(5_000), Amount::new(500_000)))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<L: Ledger> {
    config: ExchangeConfig,
    custody: AccountAddress,
    ledger: L,
    registry: PoolRegistry,
    events: Vec<ExchangeEvent>,
}

impl<L: Ledger> Exchange<L> {
    /// Creates an exchange with an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidFee`] if `config` fails validation.
    pub fn new(config: ExchangeConfig, custody: AccountAddress, ledger: L) -> Result<Self> {
        config.validate()?;
        info!(
            "exchange started: custody {custody}, fee {}, initial mint {:?}",
            config.fee_tier(),
            config.initial_mint()
        );
        Ok(Self {
            config,
            custody,
            ledger,
            registry: PoolRegistry::new(),
            events: Vec::new(),
        })
    }

    // -- mutating operations -------------------------------------------------

    /// Seeds the pool for `(token_x, token_y)` with a first deposit and
    /// credits the whole initial share supply to `caller`.
    ///
    /// An emptied pool may be seeded again.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::InvalidQuantity`] if either amount is zero.
    /// - [`DexError::AlreadyExists`] if the pool holds reserves.
    /// - [`DexError::TransferFailed`] if the deposit cannot be pulled.
    pub fn create_pool(
        &mut self,
        caller: AccountAddress,
        token_x: TokenAddress,
        token_y: TokenAddress,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Shares> {
        let (pair, orientation) = TokenPair::orient(token_x, token_y)?;
        let (amount_a, amount_b) = orientation.arrange(amount_x, amount_y);
        let rule = self.config.initial_mint();
        let (update, minted) =
            self.plan_on(pair, |pool| pool.plan_seed(caller, amount_a, amount_b, rule))?;

        Settlement::new(self.custody)
            .pull(token_x, caller, amount_x)
            .pull(token_y, caller, amount_y)
            .execute(&mut self.ledger)?;

        self.registry
            .get_or_register(pair, self.config.fee_tier())
            .commit(update);
        info!("pool {pair} created by {caller}: {amount_a}/{amount_b}, {minted} shares");
        self.events.push(ExchangeEvent::PoolCreated {
            provider: caller,
            pair,
            amount_a,
            amount_b,
            minted,
        });
        Ok(minted)
    }

    /// Deposits `(amount_x, amount_y)` at the pool's current spot price
    /// and returns the shares minted to `caller`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::InvalidQuantity`] if either amount is zero or too
    ///   small to mint a share.
    /// - [`DexError::PoolNotFound`] if the pool is absent or empty.
    /// - [`DexError::InvalidRatio`] if
    ///   `amount_x × reserve_y != amount_y × reserve_x`.
    /// - [`DexError::TransferFailed`] if the deposit cannot be pulled.
    pub fn add_liquidity(
        &mut self,
        caller: AccountAddress,
        token_x: TokenAddress,
        token_y: TokenAddress,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Shares> {
        let (pair, orientation) = TokenPair::orient(token_x, token_y)?;
        let (amount_a, amount_b) = orientation.arrange(amount_x, amount_y);
        let (update, minted) =
            self.plan_on(pair, |pool| pool.plan_deposit(caller, amount_a, amount_b))?;

        Settlement::new(self.custody)
            .pull(token_x, caller, amount_x)
            .pull(token_y, caller, amount_y)
            .execute(&mut self.ledger)?;

        self.registry
            .get_or_register(pair, self.config.fee_tier())
            .commit(update);
        info!("pool {pair}: {caller} added {amount_a}/{amount_b} for {minted} shares");
        self.events.push(ExchangeEvent::LiquidityAdded {
            provider: caller,
            pair,
            amount_a,
            amount_b,
            minted,
        });
        Ok(minted)
    }

    /// Burns all of `caller`'s shares and pays out the proportional part
    /// of both reserves, truncated.
    ///
    /// The returned amounts follow the `(token_x, token_y)` order.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::PoolNotFound`] if no pool is registered for the pair.
    /// - [`DexError::NoShares`] if `caller` holds no shares.
    /// - [`DexError::TransferFailed`] if the payout cannot be pushed.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountAddress,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Result<Withdrawal> {
        let (pair, orientation) = TokenPair::orient(token_x, token_y)?;
        let (update, canonical) = self
            .registry
            .get(&pair)
            .ok_or(DexError::PoolNotFound)?
            .plan_withdrawal(caller)?;
        let (amount_x, amount_y) = orientation.arrange(canonical.amount_x(), canonical.amount_y());

        Settlement::new(self.custody)
            .push(token_x, caller, amount_x)
            .push(token_y, caller, amount_y)
            .execute(&mut self.ledger)?;

        self.registry
            .get_or_register(pair, self.config.fee_tier())
            .commit(update);
        info!(
            "pool {pair}: {caller} burned {} shares for {}/{}",
            canonical.burned(),
            canonical.amount_x(),
            canonical.amount_y()
        );
        self.events.push(ExchangeEvent::LiquidityRemoved {
            provider: caller,
            pair,
            amount_a: canonical.amount_x(),
            amount_b: canonical.amount_y(),
            burned: canonical.burned(),
        });
        Ok(Withdrawal::new(amount_x, amount_y, canonical.burned()))
    }

    /// Sells exactly `amount_in` of `token_in` for `token_out`.
    ///
    /// The fee is taken from the input and stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_in == token_out`.
    /// - [`DexError::InvalidQuantity`] if `amount_in` or the post-fee
    ///   input is zero.
    /// - [`DexError::PoolNotFound`] if the pool is absent or empty.
    /// - [`DexError::InsufficientLiquidity`] if the output would be zero
    ///   or drain the output reserve.
    /// - [`DexError::TransferFailed`] if the input cannot be pulled or the
    ///   output pushed.
    pub fn swap(
        &mut self,
        caller: AccountAddress,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
    ) -> Result<SwapResult> {
        let pair = TokenPair::new(token_in, token_out)?;
        let (update, result) = self.plan_on(pair, |pool| pool.plan_swap(token_in, amount_in))?;

        Settlement::new(self.custody)
            .pull(token_in, caller, result.amount_in())
            .push(token_out, caller, result.amount_out())
            .execute(&mut self.ledger)?;

        self.registry
            .get_or_register(pair, self.config.fee_tier())
            .commit(update);
        info!(
            "pool {pair}: {caller} swapped {} of {token_in} for {} of {token_out} (fee {})",
            result.amount_in(),
            result.amount_out(),
            result.fee()
        );
        self.events.push(ExchangeEvent::Swapped {
            trader: caller,
            token_in,
            token_out,
            amount_in: result.amount_in(),
            amount_out: result.amount_out(),
            fee: result.fee(),
        });
        Ok(result)
    }

    // -- queries -------------------------------------------------------------

    /// Prices a swap exactly as [`swap`](Self::swap) would, without
    /// touching the ledger or the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), minus [`DexError::TransferFailed`].
    pub fn quote_swap(
        &self,
        token_in: TokenAddress,
        token_out: TokenAddress,
        amount_in: Amount,
    ) -> Result<SwapResult> {
        let pair = TokenPair::new(token_in, token_out)?;
        self.plan_on(pair, |pool| pool.quote_swap(token_in, amount_in))
    }

    /// Returns the pool's reserves in `(token_x, token_y)` order.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::PoolNotFound`] if no pool is registered.
    pub fn get_balances(
        &self,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Result<(Amount, Amount)> {
        let (pair, orientation) = TokenPair::orient(token_x, token_y)?;
        let pool = self.registry.get(&pair).ok_or(DexError::PoolNotFound)?;
        Ok(orientation.arrange(pool.reserve_a(), pool.reserve_b()))
    }

    /// Returns the pool's outstanding share supply.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::PoolNotFound`] if no pool is registered.
    pub fn get_total_lp_tokens(
        &self,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Result<Shares> {
        Ok(self.pool(token_x, token_y)?.total_shares())
    }

    /// Returns `account`'s share balance, or zero if the pool or the
    /// account is unknown.
    #[must_use]
    pub fn get_lp_balance(
        &self,
        account: AccountAddress,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Shares {
        self.pool(token_x, token_y)
            .map(|pool| pool.shares_of(&account))
            .unwrap_or(Shares::ZERO)
    }

    /// Returns the pool registered for `(token_x, token_y)`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidToken`] if `token_x == token_y`.
    /// - [`DexError::PoolNotFound`] if no pool is registered.
    pub fn pool(
        &self,
        token_x: TokenAddress,
        token_y: TokenAddress,
    ) -> Result<&ConstantProductPool> {
        let pair = TokenPair::new(token_x, token_y)?;
        self.registry.get(&pair).ok_or(DexError::PoolNotFound)
    }

    // -- accessors -----------------------------------------------------------

    /// Returns the exchange configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the custody account holding every pool's reserves.
    #[must_use]
    pub const fn custody(&self) -> AccountAddress {
        self.custody
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the ledger mutably, e.g. to fund accounts or grant
    /// approvals.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Returns every event journaled since the last drain.
    #[must_use]
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Takes the journaled events, leaving the journal empty.
    pub fn drain_events(&mut self) -> Vec<ExchangeEvent> {
        core::mem::take(&mut self.events)
    }

    /// Runs `plan` against the registered pool, or against an empty pool
    /// for an unregistered pair so validation errors surface in the same
    /// order either way.
    fn plan_on<T>(
        &self,
        pair: TokenPair,
        plan: impl FnOnce(&ConstantProductPool) -> Result<T>,
    ) -> Result<T> {
        match self.registry.get(&pair) {
            Some(pool) => plan(pool),
            None => plan(&ConstantProductPool::new(pair, self.config.fee_tier())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::FeeTier;
    use crate::ledger::{InMemoryLedger, LedgerError};

    // -- helpers --------------------------------------------------------------

    fn tok_a() -> TokenAddress {
        TokenAddress::from_bytes([1u8; 32])
    }

    fn tok_b() -> TokenAddress {
        TokenAddress::from_bytes([2u8; 32])
    }

    fn custody() -> AccountAddress {
        AccountAddress::from_bytes([0xEE; 32])
    }

    fn lp1() -> AccountAddress {
        AccountAddress::from_bytes([10u8; 32])
    }

    fn trader() -> AccountAddress {
        AccountAddress::from_bytes([20u8; 32])
    }

    fn fund(ledger: &mut InMemoryLedger, who: AccountAddress, token: TokenAddress, amount: u128) {
        let Ok(()) = ledger.mint(token, who, Amount::new(amount)) else {
            panic!("mint");
        };
        let approved = ledger.allowance(token, who, custody()).get();
        ledger.approve(token, who, custody(), Amount::new(approved + amount));
    }

    fn exchange(config: ExchangeConfig) -> Exchange<InMemoryLedger> {
        let mut ledger = InMemoryLedger::new();
        fund(&mut ledger, lp1(), tok_a(), 10_000);
        fund(&mut ledger, lp1(), tok_b(), 1_000_000);
        fund(&mut ledger, trader(), tok_a(), 1_000);
        let Ok(exchange) = Exchange::new(config, custody(), ledger) else {
            panic!("valid config");
        };
        exchange
    }

    fn seeded(config: ExchangeConfig) -> Exchange<InMemoryLedger> {
        let mut ex = exchange(config);
        let Ok(_) = ex.create_pool(lp1(), tok_a(), tok_b(), Amount::new(5_000), Amount::new(500_000))
        else {
            panic!("expected pool");
        };
        ex
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn invalid_fee_rejected() {
        let config = ExchangeConfig::default()
            .with_fee_tier(FeeTier::new(crate::domain::BasisPoints::new(10_000)));
        let Err(DexError::InvalidFee(_)) = Exchange::new(config, custody(), InMemoryLedger::new())
        else {
            panic!("expected InvalidFee");
        };
    }

    // -- create_pool ----------------------------------------------------------

    #[test]
    fn create_moves_deposit_into_custody() {
        let ex = seeded(ExchangeConfig::default());
        assert_eq!(ex.ledger().balance_of(tok_a(), custody()), Amount::new(5_000));
        assert_eq!(ex.ledger().balance_of(tok_b(), custody()), Amount::new(500_000));
        assert_eq!(ex.get_lp_balance(lp1(), tok_b(), tok_a()), Shares::new(10_000));
        assert_eq!(ex.registry().len(), 1);
    }

    #[test]
    fn create_twice_rejected() {
        let mut ex = seeded(ExchangeConfig::default());
        assert_eq!(
            ex.create_pool(lp1(), tok_b(), tok_a(), Amount::new(100), Amount::new(1)),
            Err(DexError::AlreadyExists)
        );
    }

    #[test]
    fn create_with_same_token_rejected() {
        let mut ex = exchange(ExchangeConfig::default());
        let Err(DexError::InvalidToken(_)) =
            ex.create_pool(lp1(), tok_a(), tok_a(), Amount::new(1), Amount::new(1))
        else {
            panic!("expected InvalidToken");
        };
    }

    #[test]
    fn failed_create_registers_nothing() {
        let mut ex = exchange(ExchangeConfig::default());
        let Err(DexError::TransferFailed(_)) =
            ex.create_pool(lp1(), tok_a(), tok_b(), Amount::new(20_000), Amount::new(1))
        else {
            panic!("expected TransferFailed");
        };
        assert!(ex.registry().is_empty());
        assert_eq!(ex.ledger().balance_of(tok_a(), lp1()), Amount::new(10_000));
        assert_eq!(ex.ledger().balance_of(tok_b(), lp1()), Amount::new(1_000_000));
        assert!(ex.events().is_empty());
    }

    #[test]
    fn sum_rule_applies() {
        let ex = seeded(ExchangeConfig::default().with_initial_mint(crate::config::InitialMint::Sum));
        assert_eq!(ex.get_total_lp_tokens(tok_a(), tok_b()), Ok(Shares::new(505_000)));
    }

    // -- add_liquidity --------------------------------------------------------

    #[test]
    fn add_to_unregistered_pair_reports_quantity_first() {
        let mut ex = exchange(ExchangeConfig::default());
        let Err(DexError::InvalidQuantity(_)) =
            ex.add_liquidity(lp1(), tok_a(), tok_b(), Amount::ZERO, Amount::new(1))
        else {
            panic!("expected InvalidQuantity");
        };
        assert_eq!(
            ex.add_liquidity(lp1(), tok_a(), tok_b(), Amount::new(1), Amount::new(1)),
            Err(DexError::PoolNotFound)
        );
    }

    #[test]
    fn add_in_flipped_order() {
        let mut ex = seeded(ExchangeConfig::default());
        let Ok(minted) = ex.add_liquidity(lp1(), tok_b(), tok_a(), Amount::new(100_000), Amount::new(1_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(minted, Shares::new(2_000));
        assert_eq!(
            ex.get_balances(tok_b(), tok_a()),
            Ok((Amount::new(600_000), Amount::new(6_000)))
        );
    }

    // -- swap -----------------------------------------------------------------

    #[test]
    fn swap_settles_both_legs() {
        let mut ex = seeded(ExchangeConfig::default());
        let Ok(result) = ex.swap(trader(), tok_a(), tok_b(), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_out(), Amount::new(83_333));
        assert_eq!(ex.ledger().balance_of(tok_a(), trader()), Amount::ZERO);
        assert_eq!(ex.ledger().balance_of(tok_b(), trader()), Amount::new(83_333));
        assert_eq!(ex.ledger().balance_of(tok_b(), custody()), Amount::new(416_667));
        assert_eq!(
            ex.get_balances(tok_a(), tok_b()),
            Ok((Amount::new(6_000), Amount::new(416_667)))
        );
    }

    #[test]
    fn quote_matches_swap_and_changes_nothing() {
        let mut ex = seeded(ExchangeConfig::default().with_fee_tier(FeeTier::TIER_0_30_PERCENT));
        let Ok(quote) = ex.quote_swap(tok_a(), tok_b(), Amount::new(1_000)) else {
            panic!("expected quote");
        };
        assert_eq!(ex.get_balances(tok_a(), tok_b()), Ok((Amount::new(5_000), Amount::new(500_000))));
        assert_eq!(ex.swap(trader(), tok_a(), tok_b(), Amount::new(1_000)), Ok(quote));
        assert_eq!(quote.fee(), Amount::new(3));
    }

    #[test]
    fn swap_without_allowance_changes_nothing() {
        let mut ex = seeded(ExchangeConfig::default());
        ex.ledger_mut().approve(tok_a(), trader(), custody(), Amount::ZERO);
        let Err(DexError::TransferFailed(LedgerError::InsufficientAllowance { .. })) =
            ex.swap(trader(), tok_a(), tok_b(), Amount::new(1_000))
        else {
            panic!("expected TransferFailed");
        };
        assert_eq!(ex.get_balances(tok_a(), tok_b()), Ok((Amount::new(5_000), Amount::new(500_000))));
        assert_eq!(ex.ledger().balance_of(tok_a(), trader()), Amount::new(1_000));
    }

    #[test]
    fn swap_same_token_rejected() {
        let mut ex = seeded(ExchangeConfig::default());
        let Err(DexError::InvalidToken(_)) = ex.swap(trader(), tok_a(), tok_a(), Amount::new(1))
        else {
            panic!("expected InvalidToken");
        };
    }

    // -- remove_liquidity -----------------------------------------------------

    #[test]
    fn remove_reports_caller_order() {
        let mut ex = seeded(ExchangeConfig::default());
        let Ok(w) = ex.remove_liquidity(lp1(), tok_b(), tok_a()) else {
            panic!("expected Ok");
        };
        assert_eq!(w.amount_x(), Amount::new(500_000));
        assert_eq!(w.amount_y(), Amount::new(5_000));
        assert_eq!(ex.get_total_lp_tokens(tok_a(), tok_b()), Ok(Shares::ZERO));
        assert_eq!(ex.ledger().balance_of(tok_a(), lp1()), Amount::new(10_000));
        // the emptied pool stays registered and behaves as absent for swaps
        assert_eq!(ex.get_balances(tok_a(), tok_b()), Ok((Amount::ZERO, Amount::ZERO)));
        assert_eq!(
            ex.swap(trader(), tok_a(), tok_b(), Amount::new(1)),
            Err(DexError::PoolNotFound)
        );
    }

    #[test]
    fn remove_from_unknown_pair_or_without_shares() {
        let mut ex = exchange(ExchangeConfig::default());
        assert_eq!(ex.remove_liquidity(lp1(), tok_a(), tok_b()), Err(DexError::PoolNotFound));
        let mut ex = seeded(ExchangeConfig::default());
        assert_eq!(ex.remove_liquidity(trader(), tok_a(), tok_b()), Err(DexError::NoShares));
    }

    // -- queries & events -----------------------------------------------------

    #[test]
    fn lp_balance_never_errors() {
        let ex = exchange(ExchangeConfig::default());
        assert_eq!(ex.get_lp_balance(lp1(), tok_a(), tok_b()), Shares::ZERO);
        assert_eq!(ex.get_lp_balance(lp1(), tok_a(), tok_a()), Shares::ZERO);
        assert_eq!(ex.get_balances(tok_a(), tok_b()), Err(DexError::PoolNotFound));
    }

    #[test]
    fn events_journal_commits_only() {
        let mut ex = seeded(ExchangeConfig::default());
        let Err(DexError::InvalidRatio) =
            ex.add_liquidity(lp1(), tok_a(), tok_b(), Amount::new(7_000), Amount::new(500_000))
        else {
            panic!("expected InvalidRatio");
        };
        let Ok(_) = ex.swap(trader(), tok_a(), tok_b(), Amount::new(500)) else {
            panic!("expected swap");
        };
        let events = ex.drain_events();
        assert_eq!(events.len(), 2);
        let ExchangeEvent::PoolCreated { minted, .. } = events[0] else {
            panic!("expected PoolCreated");
        };
        assert_eq!(minted, Shares::new(10_000));
        assert!(matches!(events[1], ExchangeEvent::Swapped { .. }));
        assert!(ex.events().is_empty());
    }
}
