//! Pool implementations.
//!
//! | Pool | Style |
//! |------|-------|
//! | [`ConstantProductPool`] | Uniswap V2, with per-provider share ledger |

pub mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::{ConstantProductPool, PoolUpdate};
