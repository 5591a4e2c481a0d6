//! Exchange configuration.
//!
//! [`ExchangeConfig`] carries the swap fee and the [`InitialMint`] rule
//! used when a pool is seeded.

mod exchange;
mod initial_mint;

pub use exchange::ExchangeConfig;
pub use initial_mint::InitialMint;
