//! The netting plane's single entry point.
//!
//! Validation policy for degenerate records (empty share lists, non-positive
//! amounts, self-payments): the whole computation is rejected with a
//! descriptive error before any accumulation happens. Skipping bad records
//! silently is not an option — a partially-applied snapshot would corrupt
//! the aggregate without anyone noticing.

use splitledger_types::{
    Balance, EngineConfig, Expense, GroupId, LedgerError, Payment, Result,
};

use crate::PairLedger;

/// Compute deduplicated pairwise net balances for one group snapshot.
///
/// ## Algorithm
///
/// 1. Validate every expense and payment record, and that all records
///    belong to one group
/// 2. Fold expenses: one per-head share of debt toward the payer per
///    beneficiary
/// 3. Fold payments: mirror-signed, cancelling debt between the pair
/// 4. Drop pairs netting to within `config.epsilon` of zero, round the
///    rest to 2 decimal places, orient by sign
///
/// The fold is order-independent: any permutation of `expenses` and
/// `payments` yields the same balance list.
///
/// # Errors
/// Any record-contract violation (`SL_ERR_1xx` / `SL_ERR_2xx`) or a
/// cross-group record (`SL_ERR_300`). Well-formed input cannot fail.
pub fn compute_net_balances(
    expenses: &[Expense],
    payments: &[Payment],
    config: &EngineConfig,
) -> Result<Vec<Balance>> {
    validate_snapshot(expenses, payments)?;

    let mut ledger = PairLedger::new();
    for expense in expenses {
        ledger.apply_expense(expense, config.payer_policy);
    }
    for payment in payments {
        ledger.apply_payment(payment);
    }

    let pairs_touched = ledger.pair_count();
    let balances = ledger.into_balances(config.epsilon);
    tracing::debug!(
        expenses = expenses.len(),
        payments = payments.len(),
        pairs_touched,
        balances = balances.len(),
        payer_policy = %config.payer_policy,
        "netting complete"
    );
    Ok(balances)
}

/// Fail-fast boundary check: record contracts plus single-group scoping.
fn validate_snapshot(expenses: &[Expense], payments: &[Payment]) -> Result<()> {
    let mut group: Option<GroupId> = None;
    for expense in expenses {
        expense.validate()?;
        check_group(&mut group, expense.group_id)?;
    }
    for payment in payments {
        payment.validate()?;
        check_group(&mut group, payment.group_id)?;
    }
    Ok(())
}

fn check_group(expected: &mut Option<GroupId>, found: GroupId) -> Result<()> {
    match expected {
        None => {
            *expected = Some(found);
            Ok(())
        }
        Some(group) if *group == found => Ok(()),
        Some(group) => Err(LedgerError::GroupMismatch {
            expected: *group,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use splitledger_types::MemberId;

    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn single_expense_three_way_split() {
        let expenses = vec![Expense::dummy(
            Decimal::new(30, 0),
            "alice",
            &["alice", "bob", "carol"],
        )];

        let balances = compute_net_balances(&expenses, &[], &config()).unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].from, MemberId::from("bob"));
        assert_eq!(balances[0].to, MemberId::from("alice"));
        assert_eq!(balances[0].amount, Decimal::new(1000, 2));
        assert_eq!(balances[1].from, MemberId::from("carol"));
        assert_eq!(balances[1].to, MemberId::from("alice"));
        assert_eq!(balances[1].amount, Decimal::new(1000, 2));
    }

    #[test]
    fn payment_fully_clears_one_debtor() {
        let expenses = vec![Expense::dummy(
            Decimal::new(30, 0),
            "alice",
            &["alice", "bob", "carol"],
        )];
        let payments = vec![Payment::dummy(Decimal::new(10, 0), "bob", "alice")];

        let balances = compute_net_balances(&expenses, &payments, &config()).unwrap();

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].from, MemberId::from("carol"));
        assert_eq!(balances[0].to, MemberId::from("alice"));
        assert_eq!(balances[0].amount, Decimal::new(1000, 2));
    }

    #[test]
    fn sole_beneficiary_equal_to_payer_yields_nothing() {
        let expenses = vec![Expense::dummy(Decimal::new(42, 0), "alice", &["alice"])];
        let balances = compute_net_balances(&expenses, &[], &config()).unwrap();
        assert!(balances.is_empty());
    }

    #[test]
    fn perfectly_balanced_group_yields_nothing() {
        // Everyone pays 30 for the same three-way split once — all pairs net out.
        let expenses = vec![
            Expense::dummy(Decimal::new(30, 0), "alice", &["alice", "bob", "carol"]),
            Expense::dummy(Decimal::new(30, 0), "bob", &["alice", "bob", "carol"]),
            Expense::dummy(Decimal::new(30, 0), "carol", &["alice", "bob", "carol"]),
        ];
        let balances = compute_net_balances(&expenses, &[], &config()).unwrap();
        assert!(balances.is_empty());
    }

    #[test]
    fn multi_creditor_scenario() {
        let expenses = vec![
            Expense::dummy(Decimal::new(60, 0), "alice", &["alice", "bob", "carol"]),
            Expense::dummy(Decimal::new(30, 0), "bob", &["bob", "carol"]),
        ];

        let balances = compute_net_balances(&expenses, &[], &config()).unwrap();

        // bob's 20 debt to alice stands; carol owes alice 20 and bob 15.
        assert_eq!(balances.len(), 3);
        let find = |from: &str, to: &str| {
            balances
                .iter()
                .find(|b| b.from == MemberId::from(from) && b.to == MemberId::from(to))
                .map(|b| b.amount)
        };
        assert_eq!(find("bob", "alice"), Some(Decimal::new(2000, 2)));
        assert_eq!(find("carol", "alice"), Some(Decimal::new(2000, 2)));
        assert_eq!(find("carol", "bob"), Some(Decimal::new(1500, 2)));
    }

    #[test]
    fn order_independence() {
        use rand::seq::SliceRandom;

        let mut expenses = vec![
            Expense::dummy(Decimal::new(60, 0), "alice", &["alice", "bob", "carol"]),
            Expense::dummy(Decimal::new(30, 0), "bob", &["bob", "carol"]),
            Expense::dummy(Decimal::new(755, 1), "carol", &["alice", "carol"]),
        ];
        let mut payments = vec![
            Payment::dummy(Decimal::new(5, 0), "carol", "bob"),
            Payment::dummy(Decimal::new(12, 0), "bob", "alice"),
        ];

        let reference = compute_net_balances(&expenses, &payments, &config()).unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            expenses.shuffle(&mut rng);
            payments.shuffle(&mut rng);
            let shuffled = compute_net_balances(&expenses, &payments, &config()).unwrap();
            assert_eq!(shuffled, reference);
        }
    }

    #[test]
    fn degenerate_expense_rejects_whole_computation() {
        let expenses = vec![
            Expense::dummy(Decimal::new(30, 0), "alice", &["alice", "bob"]),
            Expense::dummy(Decimal::new(10, 0), "bob", &[]),
        ];
        let err = compute_net_balances(&expenses, &[], &config()).unwrap_err();
        assert!(matches!(err, LedgerError::EmptyShareList(_)));
    }

    #[test]
    fn self_payment_rejects_whole_computation() {
        let payments = vec![Payment::dummy(Decimal::new(10, 0), "alice", "alice")];
        let err = compute_net_balances(&[], &payments, &config()).unwrap_err();
        assert!(matches!(err, LedgerError::SelfPayment(_)));
    }

    #[test]
    fn cross_group_record_rejected() {
        let mut foreign = Expense::dummy(Decimal::new(10, 0), "alice", &["alice", "bob"]);
        foreign.group_id = GroupId::new();
        let expenses = vec![
            Expense::dummy(Decimal::new(30, 0), "alice", &["alice", "bob"]),
            foreign,
        ];
        let err = compute_net_balances(&expenses, &[], &config()).unwrap_err();
        assert!(matches!(err, LedgerError::GroupMismatch { .. }));
    }

    #[test]
    fn empty_snapshot_yields_empty_output() {
        let balances = compute_net_balances(&[], &[], &config()).unwrap();
        assert!(balances.is_empty());
    }

    #[test]
    fn uneven_split_rounds_at_output_only() {
        // 10 over three heads: bob and carol each owe 3.33 after rounding.
        let expenses = vec![Expense::dummy(
            Decimal::new(10, 0),
            "alice",
            &["alice", "bob", "carol"],
        )];
        let balances = compute_net_balances(&expenses, &[], &config()).unwrap();
        assert_eq!(balances.len(), 2);
        for balance in &balances {
            assert_eq!(balance.amount, Decimal::new(333, 2));
        }
    }
}
