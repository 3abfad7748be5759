//! Calculation result models for the Deduction Estimator.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: the insurance categories, the applied rate set, and the
//! audit trace recorded while estimating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A social insurance contribution category.
///
/// # Example
///
/// ```
/// use deduction_estimator::models::InsuranceCategory;
///
/// assert_eq!(InsuranceCategory::Pension.label(), "厚生年金");
/// assert!(InsuranceCategory::Health.is_split_evenly());
/// assert!(!InsuranceCategory::Employment.is_split_evenly());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCategory {
    /// Health insurance, rate set per region.
    Health,
    /// Employees' pension insurance.
    Pension,
    /// Employment insurance, with fixed employee and employer rates.
    Employment,
    /// Long-term-care insurance, only from the threshold age.
    LongTermCare,
}

impl InsuranceCategory {
    /// Every category in display order.
    pub const ALL: [InsuranceCategory; 4] = [
        InsuranceCategory::Health,
        InsuranceCategory::Pension,
        InsuranceCategory::Employment,
        InsuranceCategory::LongTermCare,
    ];

    /// Display label for the category.
    pub fn label(self) -> &'static str {
        match self {
            InsuranceCategory::Health => "健康保険",
            InsuranceCategory::Pension => "厚生年金",
            InsuranceCategory::Employment => "雇用保険",
            InsuranceCategory::LongTermCare => "介護保険",
        }
    }

    /// Returns true if employee and employer each pay half the combined rate.
    pub fn is_split_evenly(self) -> bool {
        !matches!(self, InsuranceCategory::Employment)
    }
}

/// The rate set an estimate was computed with, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRates {
    /// Combined health insurance rate for the resolved region.
    pub health_rate: Decimal,
    /// Combined pension insurance rate.
    pub pension_rate: Decimal,
    /// Employment insurance rate borne by the employee.
    pub employment_rate_employee: Decimal,
    /// Employment insurance rate borne by the employer.
    pub employment_rate_employer: Decimal,
    /// Combined long-term-care rate; zero below the threshold age.
    pub long_term_care_rate: Decimal,
}

impl AppliedRates {
    /// Employee-side rate for one category.
    pub fn employee_rate(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Health => self.health_rate / Decimal::TWO,
            InsuranceCategory::Pension => self.pension_rate / Decimal::TWO,
            InsuranceCategory::Employment => self.employment_rate_employee,
            InsuranceCategory::LongTermCare => self.long_term_care_rate / Decimal::TWO,
        }
    }

    /// Employer-side rate for one category.
    pub fn employer_rate(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Employment => self.employment_rate_employer,
            other => self.employee_rate(other),
        }
    }

    /// Combined rate for one category; employment is the sum of both sides.
    pub fn combined_rate(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Health => self.health_rate,
            InsuranceCategory::Pension => self.pension_rate,
            InsuranceCategory::Employment => {
                self.employment_rate_employee + self.employment_rate_employer
            }
            InsuranceCategory::LongTermCare => self.long_term_care_rate,
        }
    }
}

/// The full deduction breakdown for one estimate.
///
/// All currency amounts are whole yen. Each category amount is rounded on
/// its own, and the totals are sums of those rounded amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Estimated gross monthly pay, rounded.
    pub gross_salary: Decimal,
    /// Employee share of health insurance.
    pub health_insurance: Decimal,
    /// Employee share of pension insurance.
    pub pension_insurance: Decimal,
    /// Employee share of employment insurance.
    pub employment_insurance: Decimal,
    /// Employee share of long-term-care insurance.
    pub long_term_care_insurance: Decimal,
    /// Sum of the four employee amounts.
    pub total_insurance: Decimal,
    /// Employer share of health insurance.
    pub company_health_insurance: Decimal,
    /// Employer share of pension insurance.
    pub company_pension_insurance: Decimal,
    /// Employer share of employment insurance.
    pub company_employment_insurance: Decimal,
    /// Employer share of long-term-care insurance.
    pub company_long_term_care_insurance: Decimal,
    /// Sum of the four employer amounts.
    pub total_company_insurance: Decimal,
    /// The rates the amounts were derived from.
    pub rates: AppliedRates,
    /// The take-home pay that was entered.
    pub net_salary: Decimal,
    /// Display name of the resolved region, or the fallback label.
    pub region_label: String,
    /// The age that was entered.
    pub age: i32,
}

impl CalculationResult {
    /// Employee amount for one category.
    pub fn employee_amount(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Health => self.health_insurance,
            InsuranceCategory::Pension => self.pension_insurance,
            InsuranceCategory::Employment => self.employment_insurance,
            InsuranceCategory::LongTermCare => self.long_term_care_insurance,
        }
    }

    /// Employer amount for one category.
    pub fn employer_amount(&self, category: InsuranceCategory) -> Decimal {
        match category {
            InsuranceCategory::Health => self.company_health_insurance,
            InsuranceCategory::Pension => self.company_pension_insurance,
            InsuranceCategory::Employment => self.company_employment_insurance,
            InsuranceCategory::LongTermCare => self.company_long_term_care_insurance,
        }
    }

    /// Employee and employer contributions together.
    pub fn total_contributions(&self) -> Decimal {
        self.total_insurance + self.total_company_insurance
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// deserve attention, such as an unrecognised region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
