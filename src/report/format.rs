//! Display formatting for amounts and rates.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole yen with grouped thousands.
///
/// Fractions round half away from zero.
///
/// # Examples
///
/// ```
/// use deduction_estimator::report::format_yen;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_yen(Decimal::from(458_996)), "￥458,996");
/// assert_eq!(format_yen(Decimal::from(-1_200)), "-￥1,200");
/// ```
pub fn format_yen(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}￥{}", sign, group_thousands(&digits))
}

/// Formats a percentage with two decimal places.
///
/// # Examples
///
/// ```
/// use deduction_estimator::report::format_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_percent(Decimal::from_str("18.3").unwrap()), "18.30%");
/// assert_eq!(format_percent(Decimal::from_str("0.82").unwrap()), "0.82%");
/// ```
pub fn format_percent(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
