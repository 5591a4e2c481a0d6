//! Unordered pair of distinct tokens in canonical order.

use core::fmt;

use super::TokenAddress;
use crate::error::{DexError, Result};

/// An unordered pair of distinct tokens, stored canonically sorted by
/// address.
///
/// `TokenPair::new(a, b) == TokenPair::new(b, a)`, so the pair works as a
/// registry key no matter which order a caller names the tokens in.
/// Pool state is always kept in canonical order: "token A" is
/// [`first`](Self::first), "token B" is [`second`](Self::second).
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Orientation, TokenAddress, TokenPair};
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let (pair, orientation) = TokenPair::orient(weth, usdc).expect("distinct tokens");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(orientation, Orientation::Flipped);
/// // caller order (weth, usdc) -> canonical order (usdc, weth)
/// assert_eq!(orientation.arrange(10, 20), (20, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: TokenAddress,
    token_b: TokenAddress,
}

/// How a caller's `(x, y)` argument order relates to canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `x` is the pair's first token.
    Canonical,
    /// `x` is the pair's second token.
    Flipped,
}

impl Orientation {
    /// Reorders a value pair between caller order and canonical order.
    ///
    /// The mapping is its own inverse, so the same call converts caller
    /// amounts into canonical amounts and canonical reserves back into
    /// caller order.
    #[must_use]
    pub fn arrange<T>(self, first: T, second: T) -> (T, T) {
        match self {
            Self::Canonical => (first, second),
            Self::Flipped => (second, first),
        }
    }
}

impl TokenPair {
    /// Creates a canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if both tokens are the same.
    pub fn new(token_x: TokenAddress, token_y: TokenAddress) -> Result<Self> {
        Self::orient(token_x, token_y).map(|(pair, _)| pair)
    }

    /// Creates the canonical pair for `(token_x, token_y)` together with
    /// the [`Orientation`] of the caller's argument order.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidToken`] if both tokens are the same.
    pub fn orient(token_x: TokenAddress, token_y: TokenAddress) -> Result<(Self, Orientation)> {
        if token_x == token_y {
            return Err(DexError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        if token_x < token_y {
            Ok((
                Self {
                    token_a: token_x,
                    token_b: token_y,
                },
                Orientation::Canonical,
            ))
        } else {
            Ok((
                Self {
                    token_a: token_y,
                    token_b: token_x,
                },
                Orientation::Flipped,
            ))
        }
    }

    /// Returns the first token (lower address).
    #[must_use]
    pub const fn first(&self) -> TokenAddress {
        self.token_a
    }

    /// Returns the second token (higher address).
    #[must_use]
    pub const fn second(&self) -> TokenAddress {
        self.token_b
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token_a == *token || self.token_b == *token
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_a, self.token_b)
    }
}
