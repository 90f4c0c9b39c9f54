//! Rounding and percentage helpers shared by the calculators.
//!
//! Intermediate figures are carried at full precision; rounding happens
//! once, when a result record is assembled.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a dollar amount to whole dollars, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_core::calculations::common::round_to_whole_dollars;
///
/// assert_eq!(round_to_whole_dollars(dec!(6286.33)), dec!(6286));
/// assert_eq!(round_to_whole_dollars(dec!(1450.50)), dec!(1451));
/// assert_eq!(round_to_whole_dollars(dec!(-1450.50)), dec!(-1451));
/// ```
pub fn round_to_whole_dollars(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a whole percentage (`6` for 6%) to a fraction (`0.06`).
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
