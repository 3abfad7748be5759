//! Estimate input model and validation.
//!
//! Inputs arrive as optional values because the presentation layer may
//! submit a form with blank fields. Validation turns them into a
//! [`ValidatedInput`] or reports every missing field at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The raw inputs of one estimate request.
///
/// A zero salary or zero age counts as missing, the same as an absent value.
///
/// # Example
///
/// ```
/// use deduction_estimator::models::EstimateInput;
/// use rust_decimal::Decimal;
///
/// let input = EstimateInput::new(Decimal::from(300_000), 30, "tokyo");
/// assert!(input.validate().is_ok());
///
/// let blank = EstimateInput::default();
/// assert!(blank.validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Monthly take-home pay.
    #[serde(default)]
    pub net_salary: Option<Decimal>,
    /// Age in whole years.
    #[serde(default)]
    pub age: Option<i32>,
    /// Region lookup code (e.g., "tokyo").
    #[serde(default)]
    pub region_code: Option<String>,
}

/// Inputs that passed validation; every field is present and non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    /// Monthly take-home pay.
    pub net_salary: Decimal,
    /// Age in whole years.
    pub age: i32,
    /// Region lookup code.
    pub region_code: String,
}

impl EstimateInput {
    /// Creates an input with all three fields present.
    pub fn new(net_salary: Decimal, age: i32, region_code: impl Into<String>) -> Self {
        Self {
            net_salary: Some(net_salary),
            age: Some(age),
            region_code: Some(region_code.into()),
        }
    }

    /// Checks that every field is present and non-zero.
    ///
    /// Returns `IncompleteInput` naming each offending field. Negative
    /// salaries are passed through unchanged.
    pub fn validate(&self) -> EngineResult<ValidatedInput> {
        let mut missing = Vec::new();

        let net_salary = self.net_salary.filter(|n| !n.is_zero());
        if net_salary.is_none() {
            missing.push("net_salary".to_string());
        }

        let age = self.age.filter(|&a| a != 0);
        if age.is_none() {
            missing.push("age".to_string());
        }

        let region_code = self.region_code.as_deref().filter(|c| !c.is_empty());
        if region_code.is_none() {
            missing.push("region_code".to_string());
        }

        match (net_salary, age, region_code) {
            (Some(net_salary), Some(age), Some(region_code)) => Ok(ValidatedInput {
                net_salary,
                age,
                region_code: region_code.to_string(),
            }),
            _ => Err(EngineError::IncompleteInput { fields: missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_fields(input: &EstimateInput) -> Vec<String> {
        match input.validate() {
            Err(EngineError::IncompleteInput { fields }) => fields,
            other => panic!("Expected IncompleteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_input_validates() {
        let input = EstimateInput::new(Decimal::from(300_000), 30, "tokyo");
        let validated = input.validate().unwrap();

        assert_eq!(validated.net_salary, Decimal::from(300_000));
        assert_eq!(validated.age, 30);
        assert_eq!(validated.region_code, "tokyo");
    }

    #[test]
    fn test_blank_input_reports_all_fields() {
        let fields = missing_fields(&EstimateInput::default());
        assert_eq!(fields, vec!["net_salary", "age", "region_code"]);
    }

    #[test]
    fn test_zero_salary_is_treated_as_missing() {
        let input = EstimateInput::new(Decimal::ZERO, 30, "tokyo");
        assert_eq!(missing_fields(&input), vec!["net_salary"]);
    }

    #[test]
    fn test_zero_age_is_treated_as_missing() {
        let input = EstimateInput::new(Decimal::from(300_000), 0, "tokyo");
        assert_eq!(missing_fields(&input), vec!["age"]);
    }

    #[test]
    fn test_empty_region_is_treated_as_missing() {
        let input = EstimateInput::new(Decimal::from(300_000), 30, "");
        assert_eq!(missing_fields(&input), vec!["region_code"]);
    }

    #[test]
    fn test_unknown_region_code_still_validates() {
        let input = EstimateInput::new(Decimal::from(300_000), 30, "atlantis");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_salary_passes_validation() {
        let input = EstimateInput::new(Decimal::from(-1000), 30, "tokyo");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let input: EstimateInput = serde_json::from_str(r#"{"age": 45}"#).unwrap();
        assert_eq!(input.age, Some(45));
        assert!(input.net_salary.is_none());
        assert!(input.region_code.is_none());
    }

    #[test]
    fn test_deserialize_salary_from_string_or_number() {
        let input: EstimateInput =
            serde_json::from_str(r#"{"net_salary": "300000", "age": 30, "region_code": "tokyo"}"#)
                .unwrap();
        assert_eq!(input.net_salary, Some(Decimal::from(300_000)));

        let input: EstimateInput =
            serde_json::from_str(r#"{"net_salary": 300000, "age": 30, "region_code": "tokyo"}"#)
                .unwrap();
        assert_eq!(input.net_salary, Some(Decimal::from(300_000)));
    }
}
