//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Invariant preservation**: `k` never decreases across swaps.
//! 3. **Fee monotonicity**: larger input ⇒ larger or equal fee.
//! 4. **Share conservation**: provider balances always sum to the supply.
//! 5. **Ratio gate**: exact-ratio deposits pass, anything else fails.
//! 6. **Withdrawal bound**: a provider never withdraws more than it put in
//!    when no swaps happen in between.

use proptest::prelude::*;

use super::ConstantProductPool;
use crate::config::InitialMint;
use crate::domain::{AccountAddress, Amount, BasisPoints, FeeTier, Shares, TokenAddress, TokenPair};
use crate::error::DexError;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> TokenAddress {
    TokenAddress::from_bytes([1u8; 32])
}

fn tok_b() -> TokenAddress {
    TokenAddress::from_bytes([2u8; 32])
}

fn provider(index: u8) -> AccountAddress {
    AccountAddress::from_bytes([10u8.wrapping_add(index); 32])
}

fn make_pair() -> TokenPair {
    let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
        panic!("valid pair");
    };
    pair
}

fn fee_30bp() -> FeeTier {
    FeeTier::new(BasisPoints::new(30))
}

fn make_cp(ra: u128, rb: u128, fee: FeeTier) -> ConstantProductPool {
    let mut pool = ConstantProductPool::new(make_pair(), fee);
    let Ok((update, _)) =
        pool.plan_seed(provider(0), Amount::new(ra), Amount::new(rb), InitialMint::SpotValue)
    else {
        panic!("valid seed");
    };
    pool.commit(update);
    pool
}

fn swap(pool: &mut ConstantProductPool, token_in: TokenAddress, amount: u128) -> Option<u128> {
    let (update, result) = pool.plan_swap(token_in, Amount::new(amount)).ok()?;
    pool.commit(update);
    Some(result.amount_out().get())
}

fn share_sum(pool: &ConstantProductPool) -> Shares {
    pool.providers().map(|(_, s)| s).sum()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Fee tiers from zero up to 1%.
fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    (0u32..=100u32).prop_map(|bps| FeeTier::new(BasisPoints::new(bps)))
}

/// A swap as (direction, input as per-mille of the input reserve).
fn swap_step_strategy() -> impl Strategy<Value = (bool, u128)> {
    (any::<bool>(), 1u128..=200u128)
}

/// A liquidity step as (provider index, deposit multiple or withdrawal).
fn liquidity_step_strategy() -> impl Strategy<Value = (u8, Option<u128>)> {
    (0u8..4u8, prop::option::weighted(0.7, 1u128..=5u128))
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = make_cp(ra, rb, fee);

        let Some(received_b) = swap(&mut pool, tok_a(), swap_in) else {
            return Ok(());
        };
        let Some(final_a) = swap(&mut pool, tok_b(), received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        steps in prop::collection::vec(swap_step_strategy(), 1..12),
    ) {
        let mut pool = make_cp(ra, rb, fee);
        let supply = pool.total_shares();

        for (a_to_b, per_mille) in steps {
            let k_before = pool.invariant();
            let (token_in, reserve_in) = if a_to_b {
                (tok_a(), pool.reserve_a().get())
            } else {
                (tok_b(), pool.reserve_b().get())
            };
            let amount = (reserve_in * per_mille / 1_000).max(1);
            let _ = swap(&mut pool, token_in, amount);

            prop_assert!(pool.invariant() >= k_before, "k decreased");
            prop_assert_eq!(pool.total_shares(), supply);
            prop_assert!(!pool.reserve_a().is_zero());
            prop_assert!(!pool.reserve_b().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_monotonicity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_cp(ra, rb, fee_30bp());
        let inputs = [
            (ra / 10_000).max(1),
            (ra / 1_000).max(2),
            (ra / 100).max(3),
        ];

        let mut prev_fee = 0u128;
        for input in inputs {
            let Ok(result) = pool.quote_swap(tok_a(), Amount::new(input)) else {
                continue;
            };
            let fee = result.fee().get();
            prop_assert!(fee >= prev_fee, "fee decreased: {} < {}", fee, prev_fee);
            prev_fee = fee;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Share Conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_shares_sum_to_supply(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        steps in prop::collection::vec(liquidity_step_strategy(), 1..16),
    ) {
        let mut pool = make_cp(ra, rb, FeeTier::ZERO);

        for (index, action) in steps {
            let who = provider(index);
            let planned = match action {
                Some(multiple) if !pool.is_empty() => pool
                    .plan_deposit(
                        who,
                        Amount::new(pool.reserve_a().get() * multiple),
                        Amount::new(pool.reserve_b().get() * multiple),
                    )
                    .map(|(update, _)| update),
                Some(_) => pool
                    .plan_seed(who, Amount::new(ra), Amount::new(rb), InitialMint::SpotValue)
                    .map(|(update, _)| update),
                None => pool.plan_withdrawal(who).map(|(update, _)| update),
            };
            if let Ok(update) = planned {
                pool.commit(update);
            }

            prop_assert_eq!(share_sum(&pool), pool.total_shares());
            for (_, balance) in pool.providers() {
                prop_assert!(balance <= pool.total_shares());
            }
            let reserves_empty = pool.reserve_a().is_zero() && pool.reserve_b().is_zero();
            prop_assert_eq!(reserves_empty, pool.total_shares().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Ratio Gate
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ratio_gate(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        multiple in 1u128..=10u128,
        skew in 1u128..=1_000u128,
    ) {
        let pool = make_cp(ra, rb, FeeTier::ZERO);
        let (da, db) = (ra * multiple, rb * multiple);

        prop_assert!(pool.plan_deposit(provider(1), Amount::new(da), Amount::new(db)).is_ok());
        prop_assert_eq!(
            pool.plan_deposit(provider(1), Amount::new(da), Amount::new(db + skew))
                .map(|(_, minted)| minted),
            Err(DexError::InvalidRatio)
        );
        prop_assert_eq!(
            pool.plan_deposit(provider(1), Amount::new(da + skew), Amount::new(db))
                .map(|(_, minted)| minted),
            Err(DexError::InvalidRatio)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Withdrawal Bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdrawal_bounded_by_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        multiple in 1u128..=5u128,
    ) {
        let mut pool = make_cp(ra, rb, FeeTier::ZERO);
        let (da, db) = (ra * multiple, rb * multiple);
        let Ok((update, _)) = pool.plan_deposit(provider(1), Amount::new(da), Amount::new(db))
        else {
            return Ok(());
        };
        pool.commit(update);

        let Ok((update, w)) = pool.plan_withdrawal(provider(1)) else {
            panic!("depositor holds shares");
        };
        pool.commit(update);
        prop_assert!(w.amount_x().get() <= da);
        prop_assert!(w.amount_y().get() <= db);

        // the seeding provider is now alone and drains the pool exactly
        let Ok((update, w)) = pool.plan_withdrawal(provider(0)) else {
            panic!("seeder holds shares");
        };
        pool.commit(update);
        prop_assert!(w.amount_x().get() >= ra);
        prop_assert!(w.amount_y().get() >= rb);
        prop_assert!(pool.is_empty());
        prop_assert!(pool.reserve_a().is_zero() && pool.reserve_b().is_zero());
    }

    #[test]
    fn prop_sole_provider_round_trip_is_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let mut pool = make_cp(ra, rb, FeeTier::ZERO);
        let Ok((update, w)) = pool.plan_withdrawal(provider(0)) else {
            panic!("seeder holds shares");
        };
        pool.commit(update);
        prop_assert_eq!(w.amount_x(), Amount::new(ra));
        prop_assert_eq!(w.amount_y(), Amount::new(rb));
        prop_assert!(pool.is_empty());
    }
}
