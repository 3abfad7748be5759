//! Form session for the estimator.
//!
//! [`EstimatorForm`] holds the three text fields a user types into and the
//! result of the last successful estimate. It has two states: idle (no
//! result) and showing a result. A successful submit moves to the second;
//! [`EstimatorForm::reset`] returns to the first. A failed submit changes
//! nothing.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculation::Estimator;
use crate::error::EngineResult;
use crate::models::{CalculationResult, EstimateInput};

/// The two states of a form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No result is held.
    Idle,
    /// The last submit produced a result.
    HasResult,
}

/// Text-field state plus the last result.
///
/// # Example
///
/// ```no_run
/// use deduction_estimator::calculation::Estimator;
/// use deduction_estimator::config::ConfigLoader;
/// use deduction_estimator::form::{EstimatorForm, FormState};
///
/// let loader = ConfigLoader::load("./config/jp2024")?;
/// let estimator = Estimator::new(loader.schedule().clone());
///
/// let mut form = EstimatorForm::new();
/// form.set_net_salary("300000");
/// form.set_age("30");
/// form.set_region_code("tokyo");
/// form.submit(&estimator)?;
/// assert_eq!(form.state(), FormState::HasResult);
///
/// form.reset();
/// assert_eq!(form.state(), FormState::Idle);
/// # Ok::<(), deduction_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EstimatorForm {
    net_salary: String,
    age: String,
    region_code: String,
    result: Option<CalculationResult>,
}

impl EstimatorForm {
    /// Creates an empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the net salary field text.
    pub fn set_net_salary(&mut self, value: impl Into<String>) {
        self.net_salary = value.into();
    }

    /// Sets the age field text.
    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
    }

    /// Sets the selected region code.
    pub fn set_region_code(&mut self, value: impl Into<String>) {
        self.region_code = value.into();
    }

    /// Returns the net salary field text.
    pub fn net_salary(&self) -> &str {
        &self.net_salary
    }

    /// Returns the age field text.
    pub fn age(&self) -> &str {
        &self.age
    }

    /// Returns the selected region code.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Returns the last result, if any.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Returns the current state.
    pub fn state(&self) -> FormState {
        if self.result.is_some() {
            FormState::HasResult
        } else {
            FormState::Idle
        }
    }

    /// Parses the fields into an estimate input.
    ///
    /// Text that does not start with a number parses as missing.
    pub fn to_input(&self) -> EstimateInput {
        EstimateInput {
            net_salary: parse_amount(&self.net_salary),
            age: parse_age(&self.age),
            region_code: Some(self.region_code.clone()),
        }
    }

    /// Runs an estimate from the current fields.
    ///
    /// On success the result replaces any previous one. On failure the
    /// previous result is kept.
    pub fn submit(&mut self, estimator: &Estimator) -> EngineResult<&CalculationResult> {
        let result = estimator.estimate(&self.to_input())?;
        Ok(self.result.insert(result))
    }

    /// Clears all three fields and discards the result.
    pub fn reset(&mut self) {
        self.net_salary.clear();
        self.age.clear();
        self.region_code.clear();
        self.result = None;
    }
}

/// Reads the leading decimal number of `text`, ignoring anything after it.
///
/// Accepts a sign, a fraction and an exponent (`3e5`, `-1.5E-2`). An
/// exponent marker without digits after it ends the number.
fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let (mantissa_end, number_end) = float_prefix(text);
    if mantissa_end == 0 {
        return None;
    }
    let mantissa = parse_mantissa(&text[..mantissa_end])?;
    if number_end == mantissa_end {
        return Some(mantissa);
    }
    let exponent: i64 = text[mantissa_end + 1..number_end].parse().ok()?;
    scale_by_power_of_ten(mantissa, exponent)
}

fn parse_mantissa(text: &str) -> Option<Decimal> {
    let (sign, unsigned) = text.split_at(sign_len(text));
    let value = if unsigned.starts_with('.') {
        Decimal::from_str(&format!("0{}", unsigned))
    } else {
        Decimal::from_str(unsigned)
    }
    .ok()?;
    Some(if sign == "-" { -value } else { value })
}

/// Multiplies by `10^exponent`; `None` once the value leaves Decimal range.
fn scale_by_power_of_ten(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}

/// Reads the leading signed whole number of `text`, ignoring anything after it.
fn parse_age(text: &str) -> Option<i32> {
    let text = text.trim();
    let end = sign_len(text) + digits_len(&text[sign_len(text)..]);
    text[..end].parse().ok()
}

/// Returns the end of the mantissa and the end of the whole number,
/// exponent included. Both are zero when `text` has no leading number.
fn float_prefix(text: &str) -> (usize, usize) {
    let sign = sign_len(text);
    let whole = digits_len(&text[sign..]);
    let mut end = sign + whole;
    let mut fraction = 0;
    if text[end..].starts_with('.') {
        fraction = digits_len(&text[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return (0, 0);
    }

    let mantissa_end = end;
    if text[end..].starts_with(['e', 'E']) {
        let exponent_sign = sign_len(&text[end + 1..]);
        let exponent_digits = digits_len(&text[end + 1 + exponent_sign..]);
        if exponent_digits > 0 {
            end += 1 + exponent_sign + exponent_digits;
        }
    }
    (mantissa_end, end)
}

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with(['+', '-']))
}

fn digits_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContributionRates, RateSchedule, RegionRate, RegionTable, ScheduleMetadata};
    use crate::error::EngineError;

    fn estimator() -> Estimator {
        let regions = RegionTable::new(vec![RegionRate {
            code: "tokyo".to_string(),
            label: "東京都".to_string(),
            health_rate: Decimal::from_str("9.98").unwrap(),
        }])
        .unwrap();
        Estimator::new(RateSchedule::new(
            ScheduleMetadata {
                code: "test".to_string(),
                name: "Test schedule".to_string(),
                currency: "JPY".to_string(),
                source_url: "https://example.invalid".to_string(),
            },
            regions,
            ContributionRates::default(),
        ))
    }

    fn filled_form(net: &str, age: &str, region: &str) -> EstimatorForm {
        let mut form = EstimatorForm::new();
        form.set_net_salary(net);
        form.set_age(age);
        form.set_region_code(region);
        form
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = EstimatorForm::new();
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_submit_moves_to_has_result() {
        let mut form = filled_form("300000", "30", "tokyo");
        let gross = form.submit(&estimator()).unwrap().gross_salary;

        assert_eq!(gross, Decimal::from(458_996));
        assert_eq!(form.state(), FormState::HasResult);
    }

    #[test]
    fn test_reset_clears_fields_and_result() {
        let mut form = filled_form("300000", "45", "tokyo");
        form.submit(&estimator()).unwrap();

        form.reset();

        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.net_salary(), "");
        assert_eq!(form.age(), "");
        assert_eq!(form.region_code(), "");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_previous_result() {
        let estimator = estimator();
        let mut form = filled_form("300000", "30", "tokyo");
        form.submit(&estimator).unwrap();

        form.set_age("");
        let error = form.submit(&estimator).unwrap_err();

        assert!(matches!(error, EngineError::IncompleteInput { .. }));
        assert_eq!(form.state(), FormState::HasResult);
        assert_eq!(form.result().unwrap().age, 30);
    }

    #[test]
    fn test_failed_submit_from_idle_stays_idle() {
        let mut form = filled_form("0", "30", "tokyo");
        assert!(form.submit(&estimator()).is_err());
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn test_blank_region_is_missing() {
        let mut form = filled_form("300000", "30", "");
        match form.submit(&estimator()) {
            Err(EngineError::IncompleteInput { fields }) => assert_eq!(fields, vec!["region_code"]),
            other => panic!("Expected IncompleteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_amount_parsing_reads_leading_number() {
        assert_eq!(parse_amount("300000"), Some(Decimal::from(300_000)));
        assert_eq!(parse_amount(" 250000.5 "), Decimal::from_str("250000.5").ok());
        assert_eq!(parse_amount("300000yen"), Some(Decimal::from(300_000)));
        assert_eq!(parse_amount("12."), Some(Decimal::from(12)));
        assert_eq!(parse_amount(".5"), Decimal::from_str("0.5").ok());
        assert_eq!(parse_amount("-1200"), Some(Decimal::from(-1_200)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_amount_parsing_reads_exponent() {
        assert_eq!(parse_amount("3e5"), Some(Decimal::from(300_000)));
        assert_eq!(parse_amount("2.5E+5"), Some(Decimal::from(250_000)));
        assert_eq!(parse_amount("15e-1"), Decimal::from_str("1.5").ok());
        assert_eq!(parse_amount("3e"), Some(Decimal::from(3)));
        assert_eq!(parse_amount("3e+x"), Some(Decimal::from(3)));
        assert_eq!(parse_amount("1e400"), None);
    }

    #[test]
    fn test_age_parsing_drops_fraction() {
        assert_eq!(parse_age("45"), Some(45));
        assert_eq!(parse_age("39.9"), Some(39));
        assert_eq!(parse_age("4e1"), Some(4));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("-"), None);
    }

    #[test]
    fn test_negative_age_passes_through() {
        assert_eq!(parse_age("-5"), Some(-5));

        let mut form = filled_form("300000", "-5", "tokyo");
        let result = form.submit(&estimator()).unwrap();
        assert_eq!(result.age, -5);
        assert_eq!(result.long_term_care_insurance, Decimal::ZERO);
        assert_eq!(result.gross_salary, Decimal::from(458_996));
    }

    #[test]
    fn test_max_salary_is_rejected_without_panicking() {
        let mut form = filled_form("79228162514264337593543950335", "30", "tokyo");
        let error = form.submit(&estimator()).unwrap_err();

        assert!(matches!(error, EngineError::CalculationError { .. }));
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn test_exponent_salary_submits_full_amount() {
        let mut form = filled_form("3e5", "30", "tokyo");
        let result = form.submit(&estimator()).unwrap();
        assert_eq!(result.net_salary, Decimal::from(300_000));
        assert_eq!(result.gross_salary, Decimal::from(458_996));
    }

    #[test]
    fn test_to_input_carries_region_verbatim() {
        let form = filled_form("1", "20", "osaka");
        let input = form.to_input();
        assert_eq!(input.region_code.as_deref(), Some("osaka"));
        assert_eq!(input.age, Some(20));
    }
}
