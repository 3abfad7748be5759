//! Calculation logic for the Deduction Estimator.
//!
//! This module contains the steps that turn take-home pay into a deduction
//! breakdown: region health rate lookup, the employee contribution rate,
//! the gross salary inversion, per-category contribution amounts, and the
//! [`Estimator`] that runs them in order.

mod contributions;
mod employee_rate;
mod estimator;
mod gross_salary;
mod region_rate;
mod rounding;

pub use contributions::{ContributionAmounts, ContributionsResult, calculate_contributions};
pub use employee_rate::{EmployeeRateResult, employee_contribution_rate};
pub use estimator::{Estimator, TracedEstimate};
pub use gross_salary::{GrossSalaryResult, derive_gross_salary};
pub use region_rate::{REGION_FALLBACK_WARNING, RegionRateResult, resolve_region_rate};
pub use rounding::round_to_unit;
