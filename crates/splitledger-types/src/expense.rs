//! Expense records.
//!
//! An expense is one member fronting a cost that a set of beneficiaries
//! divides equally. Records arrive read-only from the document store; the
//! engine validates them at the plane boundary and never mutates them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, GroupId, LedgerError, MemberId, Result};

/// A cost fronted by one member and shared equally by `shared_with`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub group_id: GroupId,
    /// Total cost, strictly positive.
    pub amount: Decimal,
    /// The member who fronted the money.
    pub paid_by: MemberId,
    /// Beneficiaries the cost is divided equally among. Non-empty and
    /// duplicate-free; whether it must include `paid_by` is a
    /// [`crate::PayerPolicy`] question, not a validity one.
    pub shared_with: Vec<MemberId>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Validate the record contract.
    ///
    /// # Errors
    /// - [`LedgerError::NonPositiveExpenseAmount`] for amount ≤ 0
    /// - [`LedgerError::EmptyShareList`] for an empty beneficiary list
    /// - [`LedgerError::DuplicateBeneficiary`] for a repeated beneficiary
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveExpenseAmount {
                expense: self.id,
                amount: self.amount,
            });
        }
        if self.shared_with.is_empty() {
            return Err(LedgerError::EmptyShareList(self.id));
        }
        let mut seen = std::collections::HashSet::with_capacity(self.shared_with.len());
        for member in &self.shared_with {
            if !seen.insert(member) {
                return Err(LedgerError::DuplicateBeneficiary {
                    expense: self.id,
                    member: member.clone(),
                });
            }
        }
        Ok(())
    }

    /// Per-head share: `amount / |shared_with|`, exact and unrounded.
    ///
    /// Empty share lists are rejected by [`Expense::validate`] before any
    /// share is computed; the guard here only keeps a contract-violating
    /// record from dividing by zero.
    #[must_use]
    pub fn share(&self) -> Decimal {
        if self.shared_with.is_empty() {
            return Decimal::ZERO;
        }
        self.amount / Decimal::from(self.shared_with.len())
    }

    /// Whether the payer appears in the beneficiary list.
    #[must_use]
    pub fn payer_is_beneficiary(&self) -> bool {
        self.shared_with.contains(&self.paid_by)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Expense in the nil group with a fresh id, today's timestamp, and
    /// string-literal member tokens.
    pub fn dummy(amount: Decimal, paid_by: &str, shared_with: &[&str]) -> Self {
        Self {
            id: ExpenseId::new(),
            group_id: GroupId::nil(),
            amount,
            paid_by: MemberId::from(paid_by),
            shared_with: shared_with.iter().map(|m| MemberId::from(*m)).collect(),
            note: None,
            created_at: Utc::now(),
        }
    }
}
