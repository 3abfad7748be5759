//! Presentation-ready views of a calculation result.
//!
//! Everything here is derived from a [`CalculationResult`] without
//! recomputing any contribution, so the figures a view shows always agree
//! with the result it came from.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{AppliedRates, CalculationResult, InsuranceCategory};

/// Months used to annualise monthly figures.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The four headline figures: gross, both burdens, and take-home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFigures {
    /// Gross pay.
    pub gross_salary: Decimal,
    /// Employee contributions.
    pub total_insurance: Decimal,
    /// Employer contributions.
    pub total_company_insurance: Decimal,
    /// Take-home pay.
    pub net_salary: Decimal,
}

impl SummaryFigures {
    /// Monthly figures straight from the result.
    pub fn monthly(result: &CalculationResult) -> Self {
        Self {
            gross_salary: result.gross_salary,
            total_insurance: result.total_insurance,
            total_company_insurance: result.total_company_insurance,
            net_salary: result.net_salary,
        }
    }

    /// Monthly figures multiplied by twelve.
    pub fn annual(result: &CalculationResult) -> Self {
        let months = Decimal::from(MONTHS_PER_YEAR);
        Self {
            gross_salary: result.gross_salary * months,
            total_insurance: result.total_insurance * months,
            total_company_insurance: result.total_company_insurance * months,
            net_salary: result.net_salary * months,
        }
    }
}

/// One category's employee and employer amounts, for tables and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRow {
    /// The category.
    pub category: InsuranceCategory,
    /// Display label.
    pub label: String,
    /// Employee amount.
    pub employee_amount: Decimal,
    /// Employer amount.
    pub employer_amount: Decimal,
    /// Percent of the employee total, to one decimal place.
    pub share: Decimal,
}

/// One category's combined rate and how it splits between the parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSplit {
    /// The category.
    pub category: InsuranceCategory,
    /// Display label.
    pub label: String,
    /// Combined rate.
    pub combined_rate: Decimal,
    /// Employee share.
    pub employee_rate: Decimal,
    /// Employer share.
    pub employer_rate: Decimal,
}

/// Builds contribution rows in display order.
///
/// Long-term care is listed only when the employee pays something for it.
/// Shares are zero when the employee total is zero.
pub fn contribution_rows(result: &CalculationResult) -> Vec<ContributionRow> {
    InsuranceCategory::ALL
        .iter()
        .filter(|&&category| {
            category != InsuranceCategory::LongTermCare
                || result.long_term_care_insurance > Decimal::ZERO
        })
        .map(|&category| ContributionRow {
            category,
            label: category.label().to_string(),
            employee_amount: result.employee_amount(category),
            employer_amount: result.employer_amount(category),
            share: share_of(result.employee_amount(category), result.total_insurance),
        })
        .collect()
}

fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Builds the per-category rate splits.
///
/// Long-term care is listed only when its rate is above zero.
pub fn rate_splits(rates: &AppliedRates) -> Vec<RateSplit> {
    InsuranceCategory::ALL
        .iter()
        .filter(|&&category| {
            category != InsuranceCategory::LongTermCare
                || rates.long_term_care_rate > Decimal::ZERO
        })
        .map(|&category| RateSplit {
            category,
            label: category.label().to_string(),
            combined_rate: rates.combined_rate(category),
            employee_rate: rates.employee_rate(category),
            employer_rate: rates.employer_rate(category),
        })
        .collect()
}

/// Every derived view of one result.
///
/// # Example
///
/// ```no_run
/// use deduction_estimator::calculation::Estimator;
/// use deduction_estimator::config::ConfigLoader;
/// use deduction_estimator::models::EstimateInput;
/// use deduction_estimator::report::ResultSummary;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/jp2024")?;
/// let estimator = Estimator::new(loader.schedule().clone());
/// let result = estimator.estimate(&EstimateInput::new(Decimal::from(300_000), 30, "tokyo"))?;
///
/// let summary = ResultSummary::from_result(&result);
/// assert_eq!(summary.contributions.len(), 3);
/// # Ok::<(), deduction_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Monthly headline figures.
    pub monthly: SummaryFigures,
    /// Annualised headline figures.
    pub annual: SummaryFigures,
    /// Employee plus employer contributions.
    pub combined_contributions: Decimal,
    /// Per-category amounts.
    pub contributions: Vec<ContributionRow>,
    /// Per-category rate splits.
    pub rates: Vec<RateSplit>,
}

impl ResultSummary {
    /// Derives every view from a result.
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            monthly: SummaryFigures::monthly(result),
            annual: SummaryFigures::annual(result),
            combined_contributions: result.total_contributions(),
            contributions: contribution_rows(result),
            rates: rate_splits(&result.rates),
        }
    }
}
