//! Result types of the two engine planes.
//!
//! [`Balance`] is what the netting plane emits: at most one directed entry
//! per unordered member pair. [`Settlement`] is what the settlement plane
//! emits: a *suggested* payment, never recorded as authoritative state —
//! the caller turns an accepted suggestion into a real [`crate::Payment`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::MemberId;

/// Directed pairwise net debt: `from` owes `to` the given positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub from: MemberId,
    pub to: MemberId,
    /// Positive, rounded to 2 decimal places.
    pub amount: Decimal,
}

impl Balance {
    #[must_use]
    pub fn involves(&self, member: &MemberId) -> bool {
        &self.from == member || &self.to == member
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.from, self.to, self.amount)
    }
}

/// Suggested point-to-point payment that discharges the debt portion it
/// represents for both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: MemberId,
    pub to: MemberId,
    /// Positive, rounded to 2 decimal places.
    pub amount: Decimal,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}
