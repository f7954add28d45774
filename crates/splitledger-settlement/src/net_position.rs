//! Per-member net positions.
//!
//! A member can owe one person while being owed by another; for planning
//! purposes only the single net scalar matters. Sign convention: negative
//! = net debtor, positive = net creditor.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use splitledger_types::{Balance, MemberId};

/// A member's outstanding magnitude while the planner walks the lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPosition {
    pub member: MemberId,
    /// Absolute value of the member's remaining net position.
    pub remaining: Decimal,
}

/// Collapse a balance list into one signed net position per member:
/// `-amount` where the member is `from`, `+amount` where the member is
/// `to`.
///
/// Keyed by `BTreeMap` so downstream partitioning and tie-breaking are
/// deterministic.
#[must_use]
pub fn net_positions(balances: &[Balance]) -> BTreeMap<MemberId, Decimal> {
    let mut positions: BTreeMap<MemberId, Decimal> = BTreeMap::new();
    for balance in balances {
        *positions.entry(balance.from.clone()).or_insert(Decimal::ZERO) -= balance.amount;
        *positions.entry(balance.to.clone()).or_insert(Decimal::ZERO) += balance.amount;
    }
    positions
}

/// Partition net positions into debtors and creditors, both sorted
/// descending by magnitude with ascending member id as tie-break.
///
/// Members strictly inside `epsilon` of zero are dropped entirely; a
/// position of exactly `epsilon` is kept. The netting plane rounds its
/// output to 2 decimal places and may emit a balance of exactly 0.01,
/// which must still be settleable here.
#[must_use]
pub fn partition_positions(
    positions: BTreeMap<MemberId, Decimal>,
    epsilon: Decimal,
) -> (Vec<OpenPosition>, Vec<OpenPosition>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();
    for (member, net) in positions {
        if net <= -epsilon {
            debtors.push(OpenPosition {
                member,
                remaining: -net,
            });
        } else if net >= epsilon {
            creditors.push(OpenPosition {
                member,
                remaining: net,
            });
        }
    }

    let largest_first = |a: &OpenPosition, b: &OpenPosition| {
        b.remaining
            .cmp(&a.remaining)
            .then_with(|| a.member.cmp(&b.member))
    };
    debtors.sort_by(largest_first);
    creditors.sort_by(largest_first);
    (debtors, creditors)
}
