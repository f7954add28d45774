//! # splitledger-netting
//!
//! **Net Balance Calculator plane**: converts raw financial events into a
//! canonical set of pairwise net balances — zero side effects, no I/O.
//!
//! ```text
//! compute_net_balances(&[Expense], &[Payment]) -> Vec<Balance>
//! ```
//!
//! ## Architecture
//!
//! The plane is a pure fold over the input snapshot:
//! 1. Validate every record up front (fail fast on degenerate input)
//! 2. Accumulate signed per-pair totals in a [`PairLedger`] keyed by the
//!    canonical [`splitledger_types::PairKey`]
//! 3. Drop sub-epsilon residues, round to 2 decimal places, and orient
//!    each surviving total into a directed [`splitledger_types::Balance`]
//!
//! The fold is commutative: permuting the input records never changes the
//! result. The downstream settlement plane consumes only this plane's
//! output, never the raw records.

pub mod calculator;
pub mod pair_ledger;

pub use calculator::compute_net_balances;
pub use pair_ledger::PairLedger;
