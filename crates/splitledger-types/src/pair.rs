//! Canonical unordered member pairs.
//!
//! A debt recorded as "A owes B" and one recorded as "B owes A" must land
//! in the same accumulator slot. `PairKey` guarantees that by always
//! storing the lexicographically lower member first.

use serde::{Deserialize, Serialize};

use crate::MemberId;

/// Canonical key for an unordered pair of members.
///
/// Invariant: `low < high` under [`MemberId`]'s total order. The netting
/// plane's sign convention hangs off this: a positive accumulator value
/// means "low owes high".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PairKey {
    low: MemberId,
    high: MemberId,
}

impl PairKey {
    /// Build the canonical key for two members, in either order.
    ///
    /// Callers must not pass the same member twice; upstream validation
    /// rejects self-referential records before keys are built.
    #[must_use]
    pub fn new(a: MemberId, b: MemberId) -> Self {
        debug_assert_ne!(a, b, "pair key requires two distinct members");
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[must_use]
    pub fn low(&self) -> &MemberId {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &MemberId {
        &self.high
    }

    /// Whether `member` is the lexicographically lower side of this pair.
    #[must_use]
    pub fn is_low(&self, member: &MemberId) -> bool {
        &self.low == member
    }

    #[must_use]
    pub fn contains(&self, member: &MemberId) -> bool {
        &self.low == member || &self.high == member
    }

    /// Consume the key, yielding `(low, high)`.
    #[must_use]
    pub fn into_parts(self) -> (MemberId, MemberId) {
        (self.low, self.high)
    }
}
