//! Gross salary inversion.
//!
//! Take-home pay is gross pay less the employee contribution rate and a
//! flat tax approximation. This module solves that relation for gross:
//!
//! ```text
//! gross = net / (1 - employee_rate / 100 - tax_rate)
//! ```
//!
//! Category amounts are computed forward from `net / retained_fraction`
//! without materialising the quotient, so exact half-yen amounts stay exact.

use rust_decimal::Decimal;

use crate::calculation::round_to_unit;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of deriving gross salary from net salary.
#[derive(Debug, Clone)]
pub struct GrossSalaryResult {
    /// `1 - employee_rate / 100 - tax_rate`; always positive.
    pub retained_fraction: Decimal,
    /// Unrounded gross salary.
    pub gross_salary: Decimal,
    /// Gross salary rounded to a whole unit, as reported.
    pub rounded_gross_salary: Decimal,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives gross salary from take-home pay.
///
/// # Arguments
///
/// * `net_salary` - Monthly take-home pay
/// * `employee_rate` - Total employee contribution rate in percent
/// * `tax_rate` - Flat tax approximation as a fraction of gross
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `CalculationError` when the deductions add up to 100% or more
/// of gross pay, leaving nothing to divide by, or when the gross salary
/// is too large to represent.
///
/// # Examples
///
/// ```
/// use deduction_estimator::calculation::derive_gross_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = derive_gross_salary(
///     Decimal::from(300_000),
///     Decimal::from_str("14.64").unwrap(),
///     Decimal::from_str("0.2").unwrap(),
///     3,
/// )
/// .unwrap();
/// assert_eq!(result.rounded_gross_salary, Decimal::from(458_996));
/// ```
pub fn derive_gross_salary(
    net_salary: Decimal,
    employee_rate: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> EngineResult<GrossSalaryResult> {
    let retained_fraction = Decimal::ONE - employee_rate / Decimal::ONE_HUNDRED - tax_rate;

    if retained_fraction <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "deductions of {}% plus tax rate {} leave no take-home fraction",
                employee_rate, tax_rate
            ),
        });
    }

    let gross_salary = net_salary
        .checked_div(retained_fraction)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "gross salary for net {} overflows at take-home fraction {}",
                net_salary,
                retained_fraction.normalize()
            ),
        })?;
    let rounded_gross_salary = round_to_unit(gross_salary);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_salary_inversion".to_string(),
        rule_name: "Gross Salary Inversion".to_string(),
        input: serde_json::json!({
            "net_salary": net_salary.to_string(),
            "employee_rate": employee_rate.normalize().to_string(),
            "tax_rate": tax_rate.to_string()
        }),
        output: serde_json::json!({
            "retained_fraction": retained_fraction.normalize().to_string(),
            "gross_salary": rounded_gross_salary.to_string()
        }),
        reasoning: format!(
            "{} / (1 - {}/100 - {}) = {}",
            net_salary,
            employee_rate.normalize(),
            tax_rate,
            rounded_gross_salary
        ),
    };

    Ok(GrossSalaryResult {
        retained_fraction,
        gross_salary,
        rounded_gross_salary,
        audit_step,
    })
}
