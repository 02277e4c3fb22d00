use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// Outcome class of a successful launch.
pub const SUCCESS: u8 = 1;
/// Outcome class of a failed launch.
pub const FAILURE: u8 = 0;

/// A single launch (one row of the source CSV).
///
/// Field names follow the CSV headers so the same struct deserializes from
/// both the CSV and the JSON-records layouts. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// 1 = success, 0 = failure.
    #[serde(rename = "class")]
    pub outcome_class: u8,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    #[cfg(test)]
    pub fn new(site: &str, payload_mass_kg: f64, outcome_class: u8, booster: &str) -> Self {
        Self {
            launch_site: site.to_string(),
            payload_mass_kg,
            outcome_class,
            booster_version_category: booster.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome_class == SUCCESS
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed indices.
///
/// Built once and never mutated; every chart input is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    /// Sorted distinct booster version categories.
    booster_categories: BTreeSet<String>,
    payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_version_category.clone());

            let p = rec.payload_mass_kg;
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
                None => (p, p),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds: bounds.unwrap_or((0.0, 0.0)),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// Observed `(min, max)` payload mass; `(0, 0)` when empty.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
