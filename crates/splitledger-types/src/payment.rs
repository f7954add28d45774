//! Payment records.
//!
//! A payment is money actually handed from one member to another,
//! cancelling debt between the pair. Like expenses, payments arrive
//! read-only from the document store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{GroupId, LedgerError, MemberId, PaymentId, Result};

/// Money transferred from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub group_id: GroupId,
    /// Transferred amount, strictly positive.
    pub amount: Decimal,
    pub from: MemberId,
    pub to: MemberId,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    /// Validate the record contract.
    ///
    /// # Errors
    /// - [`LedgerError::NonPositivePaymentAmount`] for amount ≤ 0
    /// - [`LedgerError::SelfPayment`] when `from == to`
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositivePaymentAmount {
                payment: self.id,
                amount: self.amount,
            });
        }
        if self.from == self.to {
            return Err(LedgerError::SelfPayment(self.id));
        }
        Ok(())
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Payment {
    /// Payment in the nil group with a fresh id and today's timestamp.
    pub fn dummy(amount: Decimal, from: &str, to: &str) -> Self {
        Self {
            id: PaymentId::new(),
            group_id: GroupId::nil(),
            amount,
            from: MemberId::from(from),
            to: MemberId::from(to),
            note: None,
            recorded_at: Utc::now(),
        }
    }
}
