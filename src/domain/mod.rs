//! Domain value types used throughout the exchange.
//!
//! Tokens and accounts are identified by 32-byte addresses, amounts and
//! shares are `u128` newtypes with checked arithmetic, and pairs are kept
//! in canonical order so `(A, B)` and `(B, A)` name the same pool.

mod account_address;
mod amount;
mod basis_points;
mod decimals;
mod fee_tier;
mod rounding;
mod shares;
mod swap_result;
mod token_address;
mod token_pair;
mod withdrawal;

pub use account_address::AccountAddress;
pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::SwapResult;
pub use token_address::TokenAddress;
pub use token_pair::{Orientation, TokenPair};
pub use withdrawal::Withdrawal;
