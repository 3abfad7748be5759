//! Whole-yen rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit.
///
/// Ties round toward positive infinity (`floor(x + 0.5)`), so `2.5`
/// becomes `3` and `-2.5` becomes `-2`.
///
/// # Examples
///
/// ```
/// use deduction_estimator::calculation::round_to_unit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_unit(Decimal::from_str("22904.4").unwrap()), Decimal::from(22904));
/// assert_eq!(round_to_unit(Decimal::from_str("22904.5").unwrap()), Decimal::from(22905));
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}
