//! Configuration types for deduction estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a rate schedule directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Metadata about the rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier for the schedule (e.g., "jp2024").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The currency all amounts are expressed in.
    pub currency: String,
    /// URL to the published rate source.
    pub source_url: String,
}

/// The combined health insurance rate published for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRate {
    /// Unique lookup code (e.g., "tokyo").
    pub code: String,
    /// Display name shown to users (e.g., "東京都").
    pub label: String,
    /// Combined health insurance rate in percent, before the employee/employer split.
    pub health_rate: Decimal,
}

/// Regions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// Region entries in display order.
    pub regions: Vec<RegionRate>,
}

/// Contribution constants applied on top of the regional health rate.
///
/// Rates are percentages except `tax_rate`, which is a fraction of gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Combined pension insurance rate.
    pub pension_rate: Decimal,
    /// Employment insurance rate borne by the employee.
    pub employment_rate_employee: Decimal,
    /// Employment insurance rate borne by the employer.
    pub employment_rate_employer: Decimal,
    /// Combined long-term-care insurance rate.
    pub long_term_care_rate: Decimal,
    /// Age from which long-term-care insurance applies.
    pub long_term_care_min_age: i32,
    /// Flat income and resident tax approximation.
    pub tax_rate: Decimal,
    /// Health rate used when a region code is not in the table.
    pub fallback_health_rate: Decimal,
    /// Label reported when a region code is not in the table.
    pub fallback_region_label: String,
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            pension_rate: Decimal::new(183, 1),
            employment_rate_employee: Decimal::new(5, 1),
            employment_rate_employer: Decimal::new(85, 2),
            long_term_care_rate: Decimal::new(164, 2),
            long_term_care_min_age: 40,
            tax_rate: Decimal::new(2, 1),
            fallback_health_rate: Decimal::new(1000, 2),
            fallback_region_label: "その他".to_string(),
        }
    }
}

impl ContributionRates {
    /// Returns the long-term-care rate that applies at the given age.
    ///
    /// Below the threshold the rate is exactly zero.
    pub fn long_term_care_rate_for(&self, age: i32) -> Decimal {
        if age >= self.long_term_care_min_age {
            self.long_term_care_rate
        } else {
            Decimal::ZERO
        }
    }
}

/// Read-only lookup from region code to its published rate.
///
/// Entries keep the order they were supplied in so listings match the
/// schedule file.
#[derive(Debug, Clone)]
pub struct RegionTable {
    entries: Vec<RegionRate>,
    index: HashMap<String, usize>,
}

impl RegionTable {
    /// Builds a table from its entries, rejecting duplicate codes.
    pub fn new(entries: Vec<RegionRate>) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.code.clone(), position).is_some() {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate region code: {}", entry.code),
                });
            }
        }
        Ok(Self { entries, index })
    }

    /// Looks up a region by exact code match.
    pub fn get(&self, code: &str) -> Option<&RegionRate> {
        self.index.get(code).map(|&position| &self.entries[position])
    }

    /// Returns all entries in schedule order.
    pub fn entries(&self) -> &[RegionRate] {
        &self.entries
    }

    /// Returns the number of regions in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no regions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The complete rate schedule loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    metadata: ScheduleMetadata,
    regions: RegionTable,
    rates: ContributionRates,
}

impl RateSchedule {
    /// Creates a new RateSchedule from its component parts.
    pub fn new(metadata: ScheduleMetadata, regions: RegionTable, rates: ContributionRates) -> Self {
        Self {
            metadata,
            regions,
            rates,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the region table.
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Returns the contribution constants.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }
}
