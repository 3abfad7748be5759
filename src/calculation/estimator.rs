//! The deduction estimator.
//!
//! [`Estimator`] holds a read-only [`RateSchedule`] and turns an
//! [`EstimateInput`] into a [`CalculationResult`]. The steps run in a
//! fixed order: region rate lookup, employee rate, gross inversion, then
//! per-category contributions.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::calculation::{
    calculate_contributions, derive_gross_salary, employee_contribution_rate, resolve_region_rate,
};
use crate::config::RateSchedule;
use crate::error::EngineResult;
use crate::models::{AppliedRates, AuditTrace, CalculationResult, EstimateInput};

/// A result together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct TracedEstimate {
    /// The deduction breakdown.
    pub result: CalculationResult,
    /// Every decision made while estimating.
    pub audit_trace: AuditTrace,
}

/// Estimates social insurance deductions from take-home pay.
///
/// Cloning is cheap; the schedule is shared.
///
/// # Example
///
/// ```no_run
/// use deduction_estimator::calculation::Estimator;
/// use deduction_estimator::config::ConfigLoader;
/// use deduction_estimator::models::EstimateInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/jp2024")?;
/// let estimator = Estimator::new(loader.schedule().clone());
///
/// let result = estimator.estimate(&EstimateInput::new(Decimal::from(300_000), 30, "tokyo"))?;
/// assert_eq!(result.gross_salary, Decimal::from(458_996));
/// # Ok::<(), deduction_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Estimator {
    schedule: Arc<RateSchedule>,
}

impl Estimator {
    /// Creates an estimator over the given schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    /// Creates an estimator sharing an existing schedule.
    pub fn from_shared(schedule: Arc<RateSchedule>) -> Self {
        Self { schedule }
    }

    /// Returns the schedule this estimator reads from.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Estimates the deduction breakdown for one input.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteInput` if the salary or age is missing or zero,
    /// or the region code is empty. No calculation is attempted in that case.
    /// Returns `CalculationError` if the schedule leaves no take-home fraction
    /// or an amount overflows.
    pub fn estimate(&self, input: &EstimateInput) -> EngineResult<CalculationResult> {
        self.estimate_traced(input).map(|traced| traced.result)
    }

    /// Estimates the deduction breakdown and records an audit trace.
    pub fn estimate_traced(&self, input: &EstimateInput) -> EngineResult<TracedEstimate> {
        let input = input.validate()?;
        let start_time = Instant::now();
        let rates = self.schedule.rates();
        let mut steps = Vec::new();
        let mut warnings = Vec::new();
        let mut step_number: u32 = 1;

        let region = resolve_region_rate(
            self.schedule.regions(),
            rates,
            &input.region_code,
            step_number,
        );
        steps.push(region.audit_step);
        warnings.extend(region.warning);
        step_number += 1;

        let applied = AppliedRates {
            health_rate: region.health_rate,
            pension_rate: rates.pension_rate,
            employment_rate_employee: rates.employment_rate_employee,
            employment_rate_employer: rates.employment_rate_employer,
            long_term_care_rate: rates.long_term_care_rate_for(input.age),
        };

        let employee_rate = employee_contribution_rate(&applied, step_number);
        steps.push(employee_rate.audit_step);
        step_number += 1;

        let gross = derive_gross_salary(
            input.net_salary,
            employee_rate.rate,
            rates.tax_rate,
            step_number,
        )?;
        steps.push(gross.audit_step);
        step_number += 1;

        let contributions = calculate_contributions(
            input.net_salary,
            gross.retained_fraction,
            &applied,
            step_number,
        )?;
        steps.extend(contributions.audit_steps);

        let employee = contributions.employee;
        let employer = contributions.employer;

        let result = CalculationResult {
            gross_salary: gross.rounded_gross_salary,
            health_insurance: employee.health,
            pension_insurance: employee.pension,
            employment_insurance: employee.employment,
            long_term_care_insurance: employee.long_term_care,
            total_insurance: employee.total(),
            company_health_insurance: employer.health,
            company_pension_insurance: employer.pension,
            company_employment_insurance: employer.employment,
            company_long_term_care_insurance: employer.long_term_care,
            total_company_insurance: employer.total(),
            rates: applied,
            net_salary: input.net_salary,
            region_label: region.region_label,
            age: input.age,
        };

        let duration_us = start_time.elapsed().as_micros() as u64;
        debug!(
            region_code = %input.region_code,
            age = input.age,
            gross_salary = %result.gross_salary,
            total_insurance = %result.total_insurance,
            duration_us,
            "Estimate completed"
        );

        Ok(TracedEstimate {
            result,
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us,
            },
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::InsuranceCategory;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn estimator() -> Estimator {
        let config = ConfigLoader::load("./config/jp2024").expect("Failed to load config");
        Estimator::new(config.schedule().clone())
    }

    fn region_code() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("tokyo".to_string()),
            Just("osaka".to_string()),
            Just("saga".to_string()),
            Just("niigata".to_string()),
            "[a-z]{3,10}",
        ]
    }

    proptest! {
        /// Nobody under 40 pays long-term-care insurance.
        #[test]
        fn long_term_care_zero_under_threshold(
            net in 1i64..2_000_000,
            age in 1i32..40,
            region in region_code(),
        ) {
            let input = EstimateInput::new(Decimal::from(net), age, region);
            let result = estimator().estimate(&input).unwrap();
            prop_assert_eq!(result.long_term_care_insurance, Decimal::ZERO);
            prop_assert_eq!(result.company_long_term_care_insurance, Decimal::ZERO);
            prop_assert_eq!(result.rates.long_term_care_rate, Decimal::ZERO);
        }

        /// Evenly split categories charge the employer what the employee pays.
        #[test]
        fn even_split_categories_match(
            net in 1i64..2_000_000,
            age in 1i32..100,
            region in region_code(),
        ) {
            let input = EstimateInput::new(Decimal::from(net), age, region);
            let result = estimator().estimate(&input).unwrap();
            for category in InsuranceCategory::ALL.into_iter().filter(|c| c.is_split_evenly()) {
                prop_assert_eq!(result.employee_amount(category), result.employer_amount(category));
            }
            prop_assert!(result.company_employment_insurance >= result.employment_insurance);
        }

        /// Totals are the sums of the rounded category amounts.
        #[test]
        fn totals_sum_rounded_amounts(
            net in 1i64..2_000_000,
            age in 1i32..100,
            region in region_code(),
        ) {
            let input = EstimateInput::new(Decimal::from(net), age, region);
            let result = estimator().estimate(&input).unwrap();
            let employee: Decimal = InsuranceCategory::ALL
                .iter()
                .map(|c| result.employee_amount(*c))
                .sum();
            let employer: Decimal = InsuranceCategory::ALL
                .iter()
                .map(|c| result.employer_amount(*c))
                .sum();
            prop_assert_eq!(result.total_insurance, employee);
            prop_assert_eq!(result.total_company_insurance, employer);
            prop_assert_eq!(result.gross_salary.fract(), Decimal::ZERO);
        }

        /// Gross pay always covers net pay.
        #[test]
        fn gross_not_below_net(
            net in 1i64..2_000_000,
            age in 1i32..100,
            region in region_code(),
        ) {
            let input = EstimateInput::new(Decimal::from(net), age, region);
            let result = estimator().estimate(&input).unwrap();
            prop_assert!(result.gross_salary >= result.net_salary);
        }
    }
}
