//! Configuration loading and management for the Deduction Estimator.
//!
//! This module provides functionality to load a rate schedule from YAML
//! files: schedule metadata, per-region health rates, and the fixed
//! contribution constants.
//!
//! # Example
//!
//! ```no_run
//! use deduction_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/jp2024").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionRates, RateSchedule, RegionRate, RegionTable, RegionsConfig, ScheduleMetadata,
};
