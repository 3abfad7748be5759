//! HTTP API module for the Deduction Estimator.
//!
//! This module provides the REST API endpoints for estimating deductions
//! and listing the supported regions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;
