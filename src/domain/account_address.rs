//! Ledger account address.

use core::fmt;

use super::token_address::write_hex;

/// Address of an account on the external ledger: an LP, a swapper, or the
/// exchange's own custody account.
///
/// # Examples
///
/// ```
/// use pairswap::domain::AccountAddress;
///
/// let lp = AccountAddress::from_bytes([7u8; 32]);
/// assert_eq!(lp.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    /// Creates an `AccountAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}
