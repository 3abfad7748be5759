//! Presentation helpers for the Deduction Estimator.
//!
//! This module turns a calculation result into the plain data a results
//! view renders: headline and annual figures, per-category rows, rate
//! splits, and yen/percent formatting.

mod format;
mod summary;

pub use format::{format_percent, format_yen};
pub use summary::{
    ContributionRow, MONTHS_PER_YEAR, RateSplit, ResultSummary, SummaryFigures,
    contribution_rows, rate_splits,
};
