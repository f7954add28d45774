//! Signed per-pair accumulator.
//!
//! One `PairLedger` lives for exactly one computation — local state only,
//! no process-wide singleton. The sign convention is fixed by the
//! canonical pair key: a positive running total means the
//! lexicographically lower member owes the higher one.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use splitledger_types::{Balance, Expense, MemberId, PairKey, PayerPolicy, Payment, constants};

/// Mapping from canonical pair key to the signed running total of debt
/// between the two members.
///
/// Keyed by a `BTreeMap` so that [`PairLedger::into_balances`] emits
/// entries in a deterministic order: same snapshot, same output, byte for
/// byte.
#[derive(Debug, Default)]
pub struct PairLedger {
    totals: BTreeMap<PairKey, Decimal>,
}

impl PairLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }

    /// Number of pairs with any recorded activity (including pairs that
    /// currently net to zero).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.totals.len()
    }

    /// Accumulate "debtor owes creditor `amount`" into the pair's slot.
    ///
    /// The stored sign encodes direction relative to the canonical key:
    /// `+` when the debtor is the low member, `-` when the debtor is the
    /// high member.
    pub fn record_debt(&mut self, debtor: &MemberId, creditor: &MemberId, amount: Decimal) {
        let key = PairKey::new(debtor.clone(), creditor.clone());
        let signed = if key.is_low(debtor) { amount } else { -amount };
        *self.totals.entry(key).or_insert(Decimal::ZERO) += signed;
    }

    /// Fold one expense into the ledger: every beneficiary other than the
    /// payer owes the payer one per-head share.
    ///
    /// Under [`PayerPolicy::IncludePayer`], a payer missing from the share
    /// list is counted as an extra head; their own share is simply never
    /// recorded (nobody owes themselves).
    pub fn apply_expense(&mut self, expense: &Expense, policy: PayerPolicy) {
        let extra_head =
            policy == PayerPolicy::IncludePayer && !expense.payer_is_beneficiary();
        let head_count = expense.shared_with.len() + usize::from(extra_head);
        if head_count == 0 {
            // Rejected upstream by Expense::validate; nothing to divide.
            return;
        }
        let share = expense.amount / Decimal::from(head_count);
        for beneficiary in &expense.shared_with {
            if beneficiary == &expense.paid_by {
                continue;
            }
            self.record_debt(beneficiary, &expense.paid_by, share);
        }
    }

    /// Fold one payment into the ledger.
    ///
    /// A payment from X to Y cancels expense-driven debt from X to Y —
    /// the mirror of recording a debt in the opposite direction, so it is
    /// booked as "Y owes X".
    pub fn apply_payment(&mut self, payment: &Payment) {
        self.record_debt(&payment.to, &payment.from, payment.amount);
    }

    /// Finalize the ledger into directed balances.
    ///
    /// Pairs whose total nets to within `epsilon` of zero are omitted;
    /// survivors are rounded to 2 decimal places (midpoint away from
    /// zero) and oriented by the sign of the total.
    #[must_use]
    pub fn into_balances(self, epsilon: Decimal) -> Vec<Balance> {
        let mut balances = Vec::with_capacity(self.totals.len());
        for (key, total) in self.totals {
            if total.abs() <= epsilon {
                continue;
            }
            let amount = total
                .abs()
                .round_dp_with_strategy(constants::AMOUNT_DP, RoundingStrategy::MidpointAwayFromZero);
            let (low, high) = key.into_parts();
            let (from, to) = if total > Decimal::ZERO {
                (low, high)
            } else {
                (high, low)
            };
            balances.push(Balance { from, to, amount });
        }
        balances
    }
}
