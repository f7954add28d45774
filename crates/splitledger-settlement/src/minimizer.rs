//! Greedy settlement planner.
//!
//! Largest-debtor/largest-creditor matching. Termination holds because
//! total debtor magnitude equals total creditor magnitude (nets sum to ~0
//! by construction in the netting plane) and every step exhausts at least
//! one side.

use rust_decimal::RoundingStrategy;
use splitledger_types::{Balance, EngineConfig, Settlement, constants};

use crate::net_position::{net_positions, partition_positions};

/// Plan the settlement suggestions for a balance list.
///
/// ## Algorithm
///
/// 1. Collapse balances into per-member net positions
/// 2. Partition into debtors/creditors sorted largest-first
///    (ascending-id tie-break keeps the plan deterministic)
/// 3. Two pointers: settle `min(debtor.remaining, creditor.remaining)`,
///    decrement both, advance whichever side dropped below epsilon
///
/// Emits at most `max(0, nonzero-net members − 1)` settlements and never
/// a self-settlement. Empty input yields empty output; there is no error
/// path.
#[must_use]
pub fn plan_settlements(balances: &[Balance], config: &EngineConfig) -> Vec<Settlement> {
    let (mut debtors, mut creditors) =
        partition_positions(net_positions(balances), config.epsilon);

    let mut settlements = Vec::new();
    let mut d = 0;
    let mut c = 0;
    while d < debtors.len() && c < creditors.len() {
        let transfer = debtors[d].remaining.min(creditors[c].remaining);
        settlements.push(Settlement {
            from: debtors[d].member.clone(),
            to: creditors[c].member.clone(),
            amount: transfer
                .round_dp_with_strategy(constants::AMOUNT_DP, RoundingStrategy::MidpointAwayFromZero),
        });
        debtors[d].remaining -= transfer;
        creditors[c].remaining -= transfer;
        // Open positions start at >= epsilon, so a remaining of exactly
        // epsilon is still owed; only a drop below it retires the member.
        if debtors[d].remaining < config.epsilon {
            d += 1;
        }
        if creditors[c].remaining < config.epsilon {
            c += 1;
        }
    }

    tracing::debug!(
        balances = balances.len(),
        debtors = debtors.len(),
        creditors = creditors.len(),
        settlements = settlements.len(),
        "settlement plan complete"
    );
    settlements
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use splitledger_types::MemberId;

    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn balance(from: &str, to: &str, amount: i64) -> Balance {
        Balance {
            from: MemberId::from(from),
            to: MemberId::from(to),
            amount: Decimal::new(amount, 2),
        }
    }

    fn settlement(from: &str, to: &str, amount: i64) -> Settlement {
        Settlement {
            from: MemberId::from(from),
            to: MemberId::from(to),
            amount: Decimal::new(amount, 2),
        }
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        assert!(plan_settlements(&[], &config()).is_empty());
    }

    #[test]
    fn single_balance_single_settlement() {
        let plan = plan_settlements(&[balance("bob", "alice", 1000)], &config());
        assert_eq!(plan, vec![settlement("bob", "alice", 1000)]);
    }

    #[test]
    fn sole_debtor_pays_both_creditors() {
        // carol owes alice 20 and bob 15 — already minimal, plan mirrors it.
        let balances = vec![
            balance("carol", "alice", 2000),
            balance("carol", "bob", 1500),
        ];
        let plan = plan_settlements(&balances, &config());
        assert_eq!(
            plan,
            vec![
                settlement("carol", "alice", 2000),
                settlement("carol", "bob", 1500),
            ]
        );
    }

    #[test]
    fn debt_chain_collapses_to_one_transfer() {
        // bob -> alice and carol -> bob: bob is a pass-through, nets to zero.
        let balances = vec![
            balance("bob", "alice", 1000),
            balance("carol", "bob", 1000),
        ];
        let plan = plan_settlements(&balances, &config());
        assert_eq!(plan, vec![settlement("carol", "alice", 1000)]);
    }

    #[test]
    fn largest_debtor_meets_largest_creditor_first() {
        let balances = vec![
            balance("dave", "alice", 4000),
            balance("carol", "bob", 1000),
        ];
        let plan = plan_settlements(&balances, &config());
        // dave(40) vs alice(40) first, then carol(10) vs bob(10).
        assert_eq!(
            plan,
            vec![
                settlement("dave", "alice", 4000),
                settlement("carol", "bob", 1000),
            ]
        );
    }

    #[test]
    fn partial_exhaustion_splits_across_creditors() {
        // One debtor (60) against creditors 40 and 20.
        let balances = vec![
            balance("carol", "alice", 4000),
            balance("carol", "bob", 2000),
        ];
        let plan = plan_settlements(&balances, &config());
        assert_eq!(plan.len(), 2);
        let total: Decimal = plan.iter().map(|s| s.amount).sum();
        assert_eq!(total, Decimal::new(6000, 2));
    }

    #[test]
    fn no_self_settlement() {
        let balances = vec![
            balance("bob", "alice", 1000),
            balance("alice", "carol", 1000),
            balance("carol", "bob", 500),
        ];
        for s in plan_settlements(&balances, &config()) {
            assert_ne!(s.from, s.to);
        }
    }

    #[test]
    fn minimality_bound_holds() {
        let balances = vec![
            balance("bob", "alice", 700),
            balance("carol", "alice", 1300),
            balance("dave", "bob", 2100),
            balance("erin", "carol", 400),
        ];
        let plan = plan_settlements(&balances, &config());

        let nonzero = net_positions(&balances)
            .values()
            .filter(|net| net.abs() >= config().epsilon)
            .count();
        assert!(plan.len() <= nonzero.saturating_sub(1));
    }

    #[test]
    fn equal_magnitude_ties_are_deterministic() {
        // Two debtors at 10 and two creditors at 10: ties break by id.
        let balances = vec![
            balance("zoe", "alice", 1000),
            balance("bob", "carol", 1000),
        ];
        let plan = plan_settlements(&balances, &config());
        assert_eq!(
            plan,
            vec![
                settlement("bob", "alice", 1000),
                settlement("zoe", "carol", 1000),
            ]
        );
    }

    #[test]
    fn one_cent_balance_is_settled() {
        // Smallest amount the netting plane can emit after rounding.
        let plan = plan_settlements(&[balance("bob", "alice", 1)], &config());
        assert_eq!(plan, vec![settlement("bob", "alice", 1)]);
    }

    #[test]
    fn near_zero_positions_produce_no_settlements() {
        let balances = vec![Balance {
            from: MemberId::from("bob"),
            to: MemberId::from("alice"),
            amount: Decimal::new(9, 3),
        }];
        assert!(plan_settlements(&balances, &config()).is_empty());
    }
}
