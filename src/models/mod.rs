//! Core data models for the Deduction Estimator.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod input;

pub use calculation_result::{
    AppliedRates, AuditStep, AuditTrace, AuditWarning, CalculationResult, InsuranceCategory,
};
pub use input::{EstimateInput, ValidatedInput};
