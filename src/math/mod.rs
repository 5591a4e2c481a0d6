//! Arithmetic utilities for pool calculations.
//!
//! - [`div_round`]: `u128` division with an explicit rounding direction.
//! - [`mul_div`], [`product`], [`cross_products_equal`]: 256-bit
//!   intermediates for anything that multiplies two amounts.
//! - [`CheckedArithmetic`]: `Result`-returning wrappers over the checked
//!   methods of the domain newtypes.

mod checked;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use wide::{cross_products_equal, mul_div, narrow, product, U256};
