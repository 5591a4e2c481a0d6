//! Token ledger support.
//!
//! - [`InMemoryLedger`]: a reference [`Ledger`](crate::traits::Ledger)
//!   implementation with allowances.
//! - [`Settlement`]: an all-or-nothing batch of pulls and pushes against
//!   any ledger.
//! - [`LedgerError`]: the rejection reasons a ledger reports.

mod error;
mod memory;
mod settlement;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use settlement::Settlement;
