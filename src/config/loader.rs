//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ContributionRates, RateSchedule, RegionRate, RegionTable, RegionsConfig, ScheduleMetadata,
};

/// Loads and provides access to a rate schedule.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query regions and contribution constants.
///
/// # Directory Structure
///
/// ```text
/// config/jp2024/
/// ├── schedule.yaml   # Schedule metadata
/// ├── regions.yaml    # Per-region combined health rates
/// └── rates.yaml      # Pension, employment, long-term-care and tax constants
/// ```
///
/// # Example
///
/// ```no_run
/// use deduction_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp2024").unwrap();
///
/// let region = loader.get_region("tokyo").unwrap();
/// println!("{}: {}%", region.label, region.health_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The region table contains a duplicate code
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let regions_config = Self::load_yaml::<RegionsConfig>(&path.join("regions.yaml"))?;
        let rates = Self::load_yaml::<ContributionRates>(&path.join("rates.yaml"))?;

        let regions = RegionTable::new(regions_config.regions)?;
        if regions.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: format!("{} lists no regions", path.join("regions.yaml").display()),
            });
        }

        tracing::debug!(
            schedule = %metadata.code,
            regions = regions.len(),
            "Loaded rate schedule"
        );

        Ok(Self {
            schedule: RateSchedule::new(metadata, regions, rates),
        })
    }

    /// Wraps an already-built schedule, e.g. a substitute table in tests.
    pub fn from_schedule(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }

    /// Gets a region by its code, if the schedule lists it.
    pub fn get_region(&self, code: &str) -> Option<&RegionRate> {
        self.schedule.regions().get(code)
    }

    /// Returns all regions in schedule order.
    pub fn regions(&self) -> &[RegionRate] {
        self.schedule.regions().entries()
    }

    /// Returns the contribution constants.
    pub fn rates(&self) -> &ContributionRates {
        self.schedule.rates()
    }
}
