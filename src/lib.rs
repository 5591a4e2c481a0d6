//! # pairswap
//!
//! Constant-product AMM exchange engine: a registry of token-pair pools,
//! LP share accounting, deposits gated on the exact spot price, full
//! withdrawals and fee-bearing swaps, all settled against an external
//! token ledger.
//!
//! The crate is a deterministic library: it owns pool state and talks to
//! token balances only through the [`Ledger`](traits::Ledger) trait.
//! An in-memory ledger is included for tests and simulations.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for config, domain values and events |
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let custody = AccountAddress::from_bytes([0xEE; 32]);
//! let lp = AccountAddress::from_bytes([10u8; 32]);
//! let trader = AccountAddress::from_bytes([20u8; 32]);
//!
//! // 1. Fund accounts and approve the custody account
//! let mut ledger = InMemoryLedger::new();
//! for (who, token, amount) in [(lp, usdc, 5_000), (lp, weth, 500_000), (trader, usdc, 1_000)] {
//!     ledger.mint(token, who, Amount::new(amount)).expect("mint");
//!     ledger.approve(token, who, custody, Amount::new(amount));
//! }
//!
//! // 2. Seed a pool
//! let mut exchange = Exchange::new(ExchangeConfig::default(), custody, ledger).expect("valid");
//! exchange
//!     .create_pool(lp, usdc, weth, Amount::new(5_000), Amount::new(500_000))
//!     .expect("pool created");
//!
//! // 3. Swap
//! let result = exchange.swap(trader, usdc, weth, Amount::new(1_000)).expect("swap");
//! assert_eq!(result.amount_out(), Amount::new(83_333));
//! assert_eq!(exchange.ledger().balance_of(weth, trader), Amount::new(83_333));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange   │  create_pool / add_liquidity / remove_liquidity / swap
//! └──────┬───────┘
//!        │ plan ─► settle ─► commit
//!        ▼
//! ┌──────────────┐      ┌──────────────┐
//! │ PoolRegistry │      │  Settlement  │──► Ledger (external)
//! └──────┬───────┘      └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │    Pools     │  ConstantProductPool: reserves + share ledger
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ Domain, math │  Amount, Shares, TokenPair, U256, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`TokenPair`](domain::TokenPair), etc. |
//! | [`math`] | Rounding division, 256-bit intermediates, [`CheckedArithmetic`](math::CheckedArithmetic) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) and the [`InitialMint`](config::InitialMint) rule |
//! | [`traits`] | The [`Ledger`](traits::Ledger) collaborator |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger), [`Settlement`](ledger::Settlement), [`LedgerError`](ledger::LedgerError) |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) with staged updates |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) keyed by canonical pair |
//! | [`exchange`] | [`Exchange`](exchange::Exchange), the public entry point |
//! | [`events`] | [`ExchangeEvent`](events::ExchangeEvent) journal entries |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
