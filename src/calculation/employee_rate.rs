//! Employee-side contribution rate.
//!
//! Sums the employee share of every insurance category into one
//! percentage, which the gross salary inversion then divides by.

use rust_decimal::Decimal;

use crate::models::{AppliedRates, AuditStep, InsuranceCategory};

/// The result of summing employee-side rates.
#[derive(Debug, Clone)]
pub struct EmployeeRateResult {
    /// Total employee contribution rate in percent.
    pub rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes `health/2 + pension/2 + employment_employee + long_term_care/2`.
///
/// # Examples
///
/// ```
/// use deduction_estimator::calculation::employee_contribution_rate;
/// use deduction_estimator::models::AppliedRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = AppliedRates {
///     health_rate: Decimal::from_str("9.98").unwrap(),
///     pension_rate: Decimal::from_str("18.3").unwrap(),
///     employment_rate_employee: Decimal::from_str("0.5").unwrap(),
///     employment_rate_employer: Decimal::from_str("0.85").unwrap(),
///     long_term_care_rate: Decimal::ZERO,
/// };
///
/// let result = employee_contribution_rate(&rates, 2);
/// assert_eq!(result.rate, Decimal::from_str("14.64").unwrap());
/// ```
pub fn employee_contribution_rate(rates: &AppliedRates, step_number: u32) -> EmployeeRateResult {
    let rate: Decimal = InsuranceCategory::ALL
        .iter()
        .map(|&category| rates.employee_rate(category))
        .sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_rate".to_string(),
        rule_name: "Employee Contribution Rate".to_string(),
        input: serde_json::json!({
            "health_rate": rates.health_rate.to_string(),
            "pension_rate": rates.pension_rate.to_string(),
            "employment_rate_employee": rates.employment_rate_employee.to_string(),
            "long_term_care_rate": rates.long_term_care_rate.to_string()
        }),
        output: serde_json::json!({
            "employee_rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "{}/2 + {}/2 + {} + {}/2 = {}%",
            rates.health_rate,
            rates.pension_rate,
            rates.employment_rate_employee,
            rates.long_term_care_rate,
            rate.normalize()
        ),
    };

    EmployeeRateResult { rate, audit_step }
}
