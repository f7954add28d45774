//! System-wide constants for the Splitledger engine.

use rust_decimal::Decimal;

/// Decimal places kept on every amount emitted at a plane boundary.
pub const AMOUNT_DP: u32 = 2;

/// Tolerance below which a balance or net position is treated as zero
/// (0.01 currency units).
///
/// A function rather than a `const` because `Decimal` construction is not
/// const-evaluable.
#[must_use]
pub fn default_epsilon() -> Decimal {
    Decimal::new(1, 2)
}
