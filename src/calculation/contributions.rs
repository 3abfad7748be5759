//! Per-category contribution amounts.
//!
//! Each employee and employer amount is `round(gross * rate / 100)`,
//! rounded on its own. Totals are sums of the rounded amounts.
//!
//! Gross is `net / retained_fraction`, so an amount is evaluated as
//! `net * rate / (retained_fraction * 100)` with a single division.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_to_unit;
use crate::error::{EngineError, EngineResult};
use crate::models::{AppliedRates, AuditStep, InsuranceCategory};

/// Rounded amounts for one side (employee or employer) of every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionAmounts {
    /// Health insurance amount.
    pub health: Decimal,
    /// Pension insurance amount.
    pub pension: Decimal,
    /// Employment insurance amount.
    pub employment: Decimal,
    /// Long-term-care insurance amount.
    pub long_term_care: Decimal,
}

impl ContributionAmounts {
    /// Returns the amount for one category.
    pub fn get(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Health => self.health,
            InsuranceCategory::Pension => self.pension,
            InsuranceCategory::Employment => self.employment,
            InsuranceCategory::LongTermCare => self.long_term_care,
        }
    }

    fn set(&mut self, category: InsuranceCategory, amount: Decimal) {
        match category {
            InsuranceCategory::Health => self.health = amount,
            InsuranceCategory::Pension => self.pension = amount,
            InsuranceCategory::Employment => self.employment = amount,
            InsuranceCategory::LongTermCare => self.long_term_care = amount,
        }
    }

    /// Sum of the already-rounded category amounts.
    pub fn total(&self) -> Decimal {
        self.health + self.pension + self.employment + self.long_term_care
    }
}

/// The result of computing every category on both sides.
#[derive(Debug, Clone)]
pub struct ContributionsResult {
    /// Employee-side amounts.
    pub employee: ContributionAmounts,
    /// Employer-side amounts.
    pub employer: ContributionAmounts,
    /// One audit step per category, followed by a totals step.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes employee and employer amounts for every category.
///
/// `net_salary` and `retained_fraction` are the inputs of the gross salary
/// inversion.
///
/// # Errors
///
/// Returns `CalculationError` when an amount overflows.
///
/// # Examples
///
/// ```
/// use deduction_estimator::calculation::calculate_contributions;
/// use deduction_estimator::models::AppliedRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = AppliedRates {
///     health_rate: Decimal::from_str("10").unwrap(),
///     pension_rate: Decimal::from_str("18").unwrap(),
///     employment_rate_employee: Decimal::from_str("0.5").unwrap(),
///     employment_rate_employer: Decimal::from_str("0.85").unwrap(),
///     long_term_care_rate: Decimal::ZERO,
/// };
///
/// let result = calculate_contributions(Decimal::from(200_000), Decimal::ONE, &rates, 1)?;
/// assert_eq!(result.employee.health, Decimal::from(10_000));
/// assert_eq!(result.employer.employment, Decimal::from(1_700));
/// # Ok::<(), deduction_estimator::error::EngineError>(())
/// ```
pub fn calculate_contributions(
    net_salary: Decimal,
    retained_fraction: Decimal,
    rates: &AppliedRates,
    first_step_number: u32,
) -> EngineResult<ContributionsResult> {
    let divisor = retained_fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| overflow(net_salary, retained_fraction))?;
    let mut employee = ContributionAmounts::default();
    let mut employer = ContributionAmounts::default();
    let mut audit_steps = Vec::with_capacity(InsuranceCategory::ALL.len() + 1);
    let mut step_number = first_step_number;

    for category in InsuranceCategory::ALL {
        let employee_rate = rates.employee_rate(category);
        let employer_rate = rates.employer_rate(category);
        let employee_amount = category_amount(net_salary, employee_rate, divisor)
            .ok_or_else(|| overflow(net_salary, employee_rate))?;
        let employer_amount = category_amount(net_salary, employer_rate, divisor)
            .ok_or_else(|| overflow(net_salary, employer_rate))?;

        employee.set(category, employee_amount);
        employer.set(category, employer_amount);

        audit_steps.push(AuditStep {
            step_number,
            rule_id: format!("{}_contribution", category_id(category)),
            rule_name: format!("{} Contribution", category_name(category)),
            input: serde_json::json!({
                "employee_rate": employee_rate.normalize().to_string(),
                "employer_rate": employer_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "employee_amount": employee_amount.to_string(),
                "employer_amount": employer_amount.to_string()
            }),
            reasoning: format!(
                "gross x {}% = {} (employee), gross x {}% = {} (employer)",
                employee_rate.normalize(),
                employee_amount,
                employer_rate.normalize(),
                employer_amount
            ),
        });
        step_number += 1;
    }

    let employee_total = employee.total();
    let employer_total = employer.total();
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "contribution_totals".to_string(),
        rule_name: "Contribution Totals".to_string(),
        input: serde_json::json!({
            "employee": [
                employee.health.to_string(),
                employee.pension.to_string(),
                employee.employment.to_string(),
                employee.long_term_care.to_string()
            ],
            "employer": [
                employer.health.to_string(),
                employer.pension.to_string(),
                employer.employment.to_string(),
                employer.long_term_care.to_string()
            ]
        }),
        output: serde_json::json!({
            "total_insurance": employee_total.to_string(),
            "total_company_insurance": employer_total.to_string()
        }),
        reasoning: format!(
            "Employee total {} and employer total {} are sums of rounded amounts",
            employee_total, employer_total
        ),
    });

    Ok(ContributionsResult {
        employee,
        employer,
        audit_steps,
    })
}

fn category_amount(net_salary: Decimal, rate: Decimal, divisor: Decimal) -> Option<Decimal> {
    net_salary
        .checked_mul(rate)?
        .checked_div(divisor)
        .map(round_to_unit)
}

fn overflow(net_salary: Decimal, factor: Decimal) -> EngineError {
    EngineError::CalculationError {
        message: format!(
            "contribution for net {} at {} overflows",
            net_salary,
            factor.normalize()
        ),
    }
}

fn category_id(category: InsuranceCategory) -> &'static str {
    match category {
        InsuranceCategory::Health => "health",
        InsuranceCategory::Pension => "pension",
        InsuranceCategory::Employment => "employment",
        InsuranceCategory::LongTermCare => "long_term_care",
    }
}

fn category_name(category: InsuranceCategory) -> &'static str {
    match category {
        InsuranceCategory::Health => "Health Insurance",
        InsuranceCategory::Pension => "Pension Insurance",
        InsuranceCategory::Employment => "Employment Insurance",
        InsuranceCategory::LongTermCare => "Long-Term-Care Insurance",
    }
}
