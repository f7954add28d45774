//! Error types for the Splitledger engine.
//!
//! All errors use the `SL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Expense record errors
//! - 2xx: Payment record errors
//! - 3xx: Netting errors
//! - 4xx: Settlement / conservation errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ExpenseId, GroupId, MemberId, PaymentId};

/// Central error enum for all Splitledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Expense Record Errors (1xx)
    // =================================================================
    /// The expense has an empty beneficiary list, so no per-head share
    /// can be computed.
    #[error("SL_ERR_100: Expense {0} has an empty share list")]
    EmptyShareList(ExpenseId),

    /// The same member appears twice among an expense's beneficiaries.
    #[error("SL_ERR_101: Expense {expense} lists beneficiary {member} more than once")]
    DuplicateBeneficiary {
        expense: ExpenseId,
        member: MemberId,
    },

    /// An expense amount must be strictly positive.
    #[error("SL_ERR_102: Expense {expense} has non-positive amount {amount}")]
    NonPositiveExpenseAmount { expense: ExpenseId, amount: Decimal },

    // =================================================================
    // Payment Record Errors (2xx)
    // =================================================================
    /// A payment's payer and receiver are the same member.
    #[error("SL_ERR_200: Payment {0} is self-referential (from == to)")]
    SelfPayment(PaymentId),

    /// A payment amount must be strictly positive.
    #[error("SL_ERR_201: Payment {payment} has non-positive amount {amount}")]
    NonPositivePaymentAmount { payment: PaymentId, amount: Decimal },

    // =================================================================
    // Netting Errors (3xx)
    // =================================================================
    /// All records of one computation must belong to the same group.
    #[error("SL_ERR_300: Record belongs to {found}, expected {expected}")]
    GroupMismatch { expected: GroupId, found: GroupId },

    // =================================================================
    // Settlement / Conservation Errors (4xx)
    // =================================================================
    /// Total debits and total credits diverged beyond epsilon — the
    /// netting output is internally inconsistent.
    #[error("SL_ERR_400: Conservation violation: {reason}")]
    ConservationViolation { reason: String },

    /// After applying a settlement plan, a member's net position did not
    /// discharge to ~0.
    #[error("SL_ERR_401: Unsettled position: {member} still nets {net} after settlement")]
    UnsettledPosition { member: MemberId, net: Decimal },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SL_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;
