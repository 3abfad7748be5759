//! Request types for the Deduction Estimator API.
//!
//! This module defines the JSON request structure for the `/estimate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EstimateInput;

/// Request body for the `/estimate` endpoint.
///
/// Every field is optional so that blank form submissions reach the
/// estimator and come back as an `INCOMPLETE_INPUT` error rather than a
/// JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
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

impl From<EstimateRequest> for EstimateInput {
    fn from(req: EstimateRequest) -> Self {
        EstimateInput {
            net_salary: req.net_salary,
            age: req.age,
            region_code: req.region_code,
        }
    }
}
