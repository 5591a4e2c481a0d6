//! Map from token pair to pool.

use std::collections::HashMap;

use crate::domain::{FeeTier, TokenPair};
use crate::pools::ConstantProductPool;

/// Owns every pool the exchange knows about, keyed by canonical
/// [`TokenPair`].
///
/// Because the key is canonical, a lookup for `(x, y)` and one for
/// `(y, x)` hit the same pool.  Pools are never removed; an emptied pool
/// stays registered and keeps its fee tier.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{FeeTier, TokenAddress, TokenPair};
/// use pairswap::registry::PoolRegistry;
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
///
/// let mut registry = PoolRegistry::new();
/// registry.get_or_register(TokenPair::new(b, a).expect("distinct"), FeeTier::ZERO);
/// assert!(registry.contains(&TokenPair::new(a, b).expect("distinct")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<TokenPair, ConstantProductPool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool for `pair`, if registered.
    #[must_use]
    pub fn get(&self, pair: &TokenPair) -> Option<&ConstantProductPool> {
        self.pools.get(pair)
    }

    /// Returns the pool for `pair`, registering an empty one with
    /// `fee_tier` if none exists.
    pub fn get_or_register(
        &mut self,
        pair: TokenPair,
        fee_tier: FeeTier,
    ) -> &mut ConstantProductPool {
        self.pools
            .entry(pair)
            .or_insert_with(|| ConstantProductPool::new(pair, fee_tier))
    }

    /// Returns `true` if a pool is registered for `pair`, empty or not.
    #[must_use]
    pub fn contains(&self, pair: &TokenPair) -> bool {
        self.pools.contains_key(pair)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over every registered pool, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenPair, &ConstantProductPool)> {
        self.pools.iter()
    }
}
