//! # splitledger-settlement
//!
//! **Settlement Minimizer plane**: turns pairwise balances into the
//! smallest practical list of point-to-point payments that zeroes every
//! member's net position.
//!
//! ```text
//! plan_settlements(&[Balance]) -> Vec<Settlement>
//! ```
//!
//! ## Architecture
//!
//! 1. Collapse balances into one signed net position per member
//! 2. Partition into debtors and creditors, dropping near-zero members
//! 3. Greedy largest-debtor/largest-creditor two-pointer matching
//!
//! The greedy order is a heuristic: it minimizes transaction count well in
//! practice but carries no optimality proof (exact minimization is a
//! partition-style hard problem). The output is a *suggestion* for the
//! caller to present; nothing here is recorded as an actual payment.
//!
//! [`conservation`] provides the post-condition audit: settlements must
//! conserve value member by member and discharge every net position.

pub mod conservation;
pub mod minimizer;
pub mod net_position;

pub use conservation::{verify_conservation, verify_plan, verify_round_trip};
pub use minimizer::plan_settlements;
pub use net_position::{OpenPosition, net_positions, partition_positions};
