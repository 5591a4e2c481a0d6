//! Outcome of a liquidity withdrawal.

use core::fmt;

use super::{Amount, Shares};

/// Tokens returned to an LP by `remove_liquidity`, together with the
/// shares that were burned.
///
/// `amount_x` and `amount_y` follow the token order the caller used, not
/// the pool's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Withdrawal {
    amount_x: Amount,
    amount_y: Amount,
    burned: Shares,
}

impl Withdrawal {
    /// Creates a new `Withdrawal`.
    pub const fn new(amount_x: Amount, amount_y: Amount, burned: Shares) -> Self {
        Self {
            amount_x,
            amount_y,
            burned,
        }
    }

    /// Returns the amount of the caller's first token.
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Returns the amount of the caller's second token.
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }

    /// Returns the shares burned.
    pub const fn burned(&self) -> Shares {
        self.burned
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(x={}, y={}, burned={})",
            self.amount_x, self.amount_y, self.burned
        )
    }
}
