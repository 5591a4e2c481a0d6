//! Trait abstractions at the exchange's seams.
//!
//! [`Ledger`] is the external token ledger the exchange settles against.

mod ledger;

pub use ledger::Ledger;
