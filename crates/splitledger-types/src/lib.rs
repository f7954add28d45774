//! # splitledger-types
//!
//! Shared types, errors, and configuration for the **Splitledger**
//! balance-settlement engine.
//!
//! This crate is the leaf dependency of the workspace — both engine planes
//! depend on it. It defines:
//!
//! - **Identifiers**: [`MemberId`], [`GroupId`], [`ExpenseId`], [`PaymentId`]
//! - **Pair canonicalization**: [`PairKey`]
//! - **Input records**: [`Expense`], [`Payment`]
//! - **Results**: [`Balance`], [`Settlement`]
//! - **Configuration**: [`EngineConfig`], [`PayerPolicy`]
//! - **Errors**: [`LedgerError`] with `SL_ERR_` prefix codes
//! - **Constants**: rounding precision and defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod expense;
pub mod ids;
pub mod pair;
pub mod payment;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitledger_types::{Expense, Payment, Balance, Settlement, ...};

pub use balance::*;
pub use config::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use pair::*;
pub use payment::*;

// Constants are accessed via `splitledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
