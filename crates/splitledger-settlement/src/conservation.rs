//! Conservation and round-trip auditing.
//!
//! Invariant enforced after every planning run:
//! ```text
//! ∀ member: net(balances) + outflow(settlements) - inflow(settlements) ≈ 0
//! ```
//! Equivalently, applying the plan as if its settlements were payments
//! must discharge every member's net position. If this ever breaks, the
//! plan would leave money unaccounted for — the ultimate safety net for
//! both planes' rounding and epsilon handling.

use rust_decimal::Decimal;
use splitledger_types::{Balance, EngineConfig, LedgerError, Result, Settlement};

use crate::net_position::net_positions;

/// Verify that a balance list conserves value: every amount is strictly
/// positive and the members' total net debit equals their total net
/// credit within `epsilon`.
///
/// # Errors
/// [`LedgerError::ConservationViolation`] naming the defect.
pub fn verify_conservation(balances: &[Balance], epsilon: Decimal) -> Result<()> {
    for balance in balances {
        if balance.amount <= Decimal::ZERO {
            return Err(LedgerError::ConservationViolation {
                reason: format!(
                    "non-positive balance amount {} ({} -> {})",
                    balance.amount, balance.from, balance.to
                ),
            });
        }
    }

    let positions = net_positions(balances);
    let total_debit: Decimal = positions
        .values()
        .filter(|net| net.is_sign_negative())
        .map(|net| -net)
        .sum();
    let total_credit: Decimal = positions
        .values()
        .filter(|net| !net.is_sign_negative())
        .sum();
    if (total_debit - total_credit).abs() > epsilon {
        return Err(LedgerError::ConservationViolation {
            reason: format!(
                "total debit {total_debit} diverges from total credit {total_credit}"
            ),
        });
    }
    Ok(())
}

/// Verify that `settlements` fully discharges `balances`, member by
/// member, within `epsilon`.
///
/// # Errors
/// [`LedgerError::UnsettledPosition`] naming the first member whose
/// residual exceeds `epsilon`.
pub fn verify_round_trip(
    balances: &[Balance],
    settlements: &[Settlement],
    epsilon: Decimal,
) -> Result<()> {
    let mut residuals = net_positions(balances);
    for settlement in settlements {
        // Paying raises a debtor's (negative) net; receiving lowers a
        // creditor's (positive) net.
        *residuals
            .entry(settlement.from.clone())
            .or_insert(Decimal::ZERO) += settlement.amount;
        *residuals
            .entry(settlement.to.clone())
            .or_insert(Decimal::ZERO) -= settlement.amount;
    }
    for (member, net) in residuals {
        if net.abs() > epsilon {
            return Err(LedgerError::UnsettledPosition { member, net });
        }
    }
    Ok(())
}

/// Structural audit of a settlement plan against its source balances:
///
/// - the balances themselves conserve value (see [`verify_conservation`])
/// - every settlement amount is strictly positive
/// - no settlement is self-referential
/// - total settled value matches the balances' debit total within a
///   plan-size-scaled tolerance
/// - plan size respects the `nonzero members − 1` bound
/// - the plan round-trips (see [`verify_round_trip`])
///
/// # Errors
/// [`LedgerError::ConservationViolation`] for structural defects,
/// [`LedgerError::UnsettledPosition`] for a failed round-trip.
pub fn verify_plan(
    balances: &[Balance],
    settlements: &[Settlement],
    config: &EngineConfig,
) -> Result<()> {
    verify_conservation(balances, config.epsilon)?;

    for settlement in settlements {
        if settlement.from == settlement.to {
            return Err(LedgerError::ConservationViolation {
                reason: format!("self-settlement for member {}", settlement.from),
            });
        }
        if settlement.amount <= Decimal::ZERO {
            return Err(LedgerError::ConservationViolation {
                reason: format!(
                    "non-positive settlement amount {} ({} -> {})",
                    settlement.amount, settlement.from, settlement.to
                ),
            });
        }
    }

    let positions = net_positions(balances);
    // Same boundary as partition_positions: exactly epsilon counts.
    let nonzero = positions
        .values()
        .filter(|net| net.abs() >= config.epsilon)
        .count();
    let bound = nonzero.saturating_sub(1);
    if settlements.len() > bound {
        return Err(LedgerError::ConservationViolation {
            reason: format!(
                "plan has {} settlements for {nonzero} members with nonzero net (bound {bound})",
                settlements.len()
            ),
        });
    }

    let total_debit: Decimal = positions
        .values()
        .filter(|net| net.is_sign_negative())
        .map(|net| -net)
        .sum();
    let total_settled: Decimal = settlements.iter().map(|s| s.amount).sum();
    // Each emitted settlement is individually rounded, so allow the drift
    // to scale with plan size.
    let tolerance = config.epsilon * Decimal::from(settlements.len().max(1));
    if (total_debit - total_settled).abs() > tolerance {
        return Err(LedgerError::ConservationViolation {
            reason: format!(
                "total settled {total_settled} diverges from total debit {total_debit}"
            ),
        });
    }

    verify_round_trip(balances, settlements, tolerance)
}
