//! Pool registry keyed by canonical token pair.

mod pool_registry;

pub use pool_registry::PoolRegistry;
