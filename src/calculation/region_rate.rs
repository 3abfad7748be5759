//! Region health rate lookup.
//!
//! Resolves the combined health insurance rate for a region code. Codes
//! the table does not list fall back to the schedule's default rate and
//! label; this is never an error.

use rust_decimal::Decimal;

use crate::config::{ContributionRates, RegionTable};
use crate::models::{AuditStep, AuditWarning};

/// Warning code emitted when a region code is not in the table.
pub const REGION_FALLBACK_WARNING: &str = "REGION_FALLBACK";

/// The result of a region rate lookup.
#[derive(Debug, Clone)]
pub struct RegionRateResult {
    /// The combined health insurance rate that applies.
    pub health_rate: Decimal,
    /// Display name of the region, or the fallback label.
    pub region_label: String,
    /// Warning raised when the fallback was used.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Resolves the health rate for `region_code` by exact match.
///
/// # Examples
///
/// ```
/// use deduction_estimator::calculation::resolve_region_rate;
/// use deduction_estimator::config::{ContributionRates, RegionRate, RegionTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RegionTable::new(vec![RegionRate {
///     code: "tokyo".to_string(),
///     label: "東京都".to_string(),
///     health_rate: Decimal::from_str("9.98").unwrap(),
/// }])
/// .unwrap();
/// let rates = ContributionRates::default();
///
/// let found = resolve_region_rate(&table, &rates, "tokyo", 1);
/// assert_eq!(found.health_rate, Decimal::from_str("9.98").unwrap());
///
/// let fallback = resolve_region_rate(&table, &rates, "atlantis", 1);
/// assert_eq!(fallback.health_rate, Decimal::from(10));
/// assert_eq!(fallback.region_label, "その他");
/// ```
pub fn resolve_region_rate(
    regions: &RegionTable,
    rates: &ContributionRates,
    region_code: &str,
    step_number: u32,
) -> RegionRateResult {
    match regions.get(region_code) {
        Some(region) => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "region_rate_lookup".to_string(),
                rule_name: "Region Health Rate Lookup".to_string(),
                input: serde_json::json!({ "region_code": region_code }),
                output: serde_json::json!({
                    "health_rate": region.health_rate.to_string(),
                    "region_label": region.label,
                    "source": "region_table"
                }),
                reasoning: format!(
                    "Region '{}' ({}) has combined health rate {}%",
                    region_code, region.label, region.health_rate
                ),
            };

            RegionRateResult {
                health_rate: region.health_rate,
                region_label: region.label.clone(),
                warning: None,
                audit_step,
            }
        }
        None => {
            let audit_step = AuditStep {
                step_number,
                rule_id: "region_rate_lookup".to_string(),
                rule_name: "Region Health Rate Lookup".to_string(),
                input: serde_json::json!({ "region_code": region_code }),
                output: serde_json::json!({
                    "health_rate": rates.fallback_health_rate.to_string(),
                    "region_label": rates.fallback_region_label,
                    "source": "fallback"
                }),
                reasoning: format!(
                    "Region '{}' is not listed; using fallback health rate {}%",
                    region_code, rates.fallback_health_rate
                ),
            };

            RegionRateResult {
                health_rate: rates.fallback_health_rate,
                region_label: rates.fallback_region_label.clone(),
                warning: Some(AuditWarning {
                    code: REGION_FALLBACK_WARNING.to_string(),
                    message: format!(
                        "Unknown region code '{}'; fallback health rate applied",
                        region_code
                    ),
                    severity: "low".to_string(),
                }),
                audit_step,
            }
        }
    }
}
