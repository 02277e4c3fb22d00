use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Selection inputs
// ---------------------------------------------------------------------------

/// Sentinel value the site dropdown emits for "every site".
pub const ALL_SITES: &str = "ALL";

/// Lower bound of the payload slider domain (kg).
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the payload slider domain (kg).
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
/// Slider step and tick spacing (kg).
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Which launch site(s) the charts are restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value: `"ALL"` or an exact site name.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }

    /// Label shown in the dropdown and chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Closed payload interval `[low, high]` in kg.
///
/// An inverted interval (`low > high`) is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Initial slider value: the dataset's observed payload bounds.
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        let (low, high) = dataset.payload_bounds();
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Pie chart: success / failure counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieData {
    pub failure_count: usize,
    pub success_count: usize,
    pub title: String,
}

impl PieData {
    pub fn total(&self) -> usize {
        self.failure_count + self.success_count
    }

    /// Fraction of successful launches, `None` when nothing matched.
    pub fn success_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(self.success_count as f64 / n as f64),
        }
    }
}

/// Count successes and failures for the selected site (or every site).
///
/// An unknown site yields zero counts.
pub fn compute_pie_data(dataset: &LaunchDataset, site: &SiteSelection) -> PieData {
    let (success_count, failure_count) = dataset
        .records()
        .iter()
        .filter(|rec| site.matches(rec))
        .fold((0, 0), |(ok, failed), rec| {
            if rec.is_success() {
                (ok + 1, failed)
            } else {
                (ok, failed + 1)
            }
        });

    let title = match site {
        SiteSelection::All => "Overall Success vs Failure Launches".to_string(),
        SiteSelection::Site(name) => format!("Launch Success vs Failure for {name}"),
    };

    PieData {
        failure_count,
        success_count,
        title,
    }
}

// ---------------------------------------------------------------------------
// Scatter chart: payload vs outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterData {
    /// Matching launches in dataset order.
    pub points: Vec<ScatterPoint>,
    pub title: String,
}

impl ScatterData {
    /// Points grouped by booster category, one series per category.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&ScatterPoint>> {
        let mut groups: BTreeMap<&str, Vec<&ScatterPoint>> = BTreeMap::new();
        for p in &self.points {
            groups
                .entry(p.booster_version_category.as_str())
                .or_default()
                .push(p);
        }
        groups
    }
}

/// Launches whose payload lies in `range` (inclusive), restricted to the
/// selected site.
pub fn compute_scatter_data(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterData {
    let points = dataset
        .records()
        .iter()
        .filter(|rec| range.contains(rec.payload_mass_kg) && site.matches(rec))
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome_class: rec.outcome_class,
            booster_version_category: rec.booster_version_category.clone(),
        })
        .collect();

    ScatterData {
        points,
        title: format!("Payload vs Success for {}", site.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC", 500.0, 1, "v1"),
            LaunchRecord::new("KSC", 6000.0, 0, "v2"),
            LaunchRecord::new("VAFB", 3000.0, 1, "v1"),
        ])
    }

    fn larger() -> LaunchDataset {
        let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
        let boosters = ["v1.0", "v1.1", "FT", "B4", "B5"];
        let records = (0..40)
            .map(|i| {
                LaunchRecord::new(
                    sites[i % sites.len()],
                    (i * 317 % 9700) as f64,
                    (i % 3 != 0) as u8,
                    boosters[i % boosters.len()],
                )
            })
            .collect();
        LaunchDataset::from_records(records)
    }

    fn triple(p: &ScatterPoint) -> (f64, u8, &str) {
        (p.payload_mass_kg, p.outcome_class, &p.booster_version_category)
    }

    #[test]
    fn pie_over_all_sites() {
        let pie = compute_pie_data(&example(), &SiteSelection::All);
        assert_eq!((pie.failure_count, pie.success_count), (1, 2));
        assert_eq!(pie.title, "Overall Success vs Failure Launches");
    }

    #[test]
    fn pie_for_single_site() {
        let pie = compute_pie_data(&example(), &SiteSelection::parse("KSC"));
        assert_eq!((pie.failure_count, pie.success_count), (1, 1));
        assert_eq!(pie.title, "Launch Success vs Failure for KSC");
    }

    #[test]
    fn pie_for_unknown_site_is_empty() {
        let pie = compute_pie_data(&example(), &SiteSelection::parse("Boca Chica"));
        assert_eq!(pie.total(), 0);
        assert_eq!(pie.success_rate(), None);
    }

    #[test]
    fn pie_counts_sum_to_subset_size() {
        let ds = larger();
        assert_eq!(compute_pie_data(&ds, &SiteSelection::All).total(), ds.len());
        for site in ds.sites() {
            let expected = ds
                .records()
                .iter()
                .filter(|r| &r.launch_site == site)
                .count();
            let pie = compute_pie_data(&ds, &SiteSelection::Site(site.clone()));
            assert_eq!(pie.total(), expected, "site {site}");
        }
    }

    #[test]
    fn scatter_filters_inclusive_range_in_order() {
        let scatter =
            compute_scatter_data(&example(), &SiteSelection::All, PayloadRange::new(0.0, 4000.0));
        let got: Vec<_> = scatter.points.iter().map(triple).collect();
        assert_eq!(got, [(500.0, 1, "v1"), (3000.0, 1, "v1")]);
        assert_eq!(scatter.title, "Payload vs Success for All Sites");

        let edges =
            compute_scatter_data(&example(), &SiteSelection::All, PayloadRange::new(500.0, 3000.0));
        assert_eq!(edges.points.len(), 2);
    }

    #[test]
    fn scatter_site_filter_uses_launch_site_field() {
        let scatter = compute_scatter_data(
            &example(),
            &SiteSelection::parse("KSC"),
            PayloadRange::new(0.0, 10_000.0),
        );
        let got: Vec<_> = scatter.points.iter().map(triple).collect();
        assert_eq!(got, [(500.0, 1, "v1"), (6000.0, 0, "v2")]);
        assert_eq!(scatter.title, "Payload vs Success for KSC");
    }

    #[test]
    fn inverted_range_is_empty() {
        let scatter =
            compute_scatter_data(&example(), &SiteSelection::All, PayloadRange::new(4000.0, 1000.0));
        assert!(scatter.points.is_empty());
    }

    #[test]
    fn scatter_points_stay_within_range() {
        let ds = larger();
        for (low, high) in [(0.0, 10_000.0), (1000.0, 5000.0), (2000.0, 2000.0), (0.0, 0.0)] {
            let range = PayloadRange::new(low, high);
            let scatter = compute_scatter_data(&ds, &SiteSelection::All, range);
            assert!(scatter
                .points
                .iter()
                .all(|p| low <= p.payload_mass_kg && p.payload_mass_kg <= high));
        }
    }

    #[test]
    fn site_scatter_is_subsequence_of_all_sites() {
        let ds = larger();
        let range = PayloadRange::new(1000.0, 8000.0);
        let all = compute_scatter_data(&ds, &SiteSelection::All, range);
        for site in ds.sites() {
            let sub = compute_scatter_data(&ds, &SiteSelection::Site(site.clone()), range);
            let mut rest = all.points.iter();
            assert!(
                sub.points.iter().all(|p| rest.any(|q| q == p)),
                "site {site} not a subsequence"
            );
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = larger();
        let site = SiteSelection::parse("KSC LC-39A");
        let range = PayloadRange::new(0.0, 6000.0);
        assert_eq!(compute_pie_data(&ds, &site), compute_pie_data(&ds, &site));
        assert_eq!(
            compute_scatter_data(&ds, &site, range),
            compute_scatter_data(&ds, &site, range)
        );
    }

    #[test]
    fn by_category_groups_points() {
        let scatter =
            compute_scatter_data(&example(), &SiteSelection::All, PayloadRange::new(0.0, 10_000.0));
        let groups = scatter.by_category();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ["v1", "v2"]);
        assert_eq!(groups["v1"].len(), 2);
        assert_eq!(groups["v1"][0].payload_mass_kg, 500.0);
    }

    #[test]
    fn parse_recognises_sentinel() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::parse("all"), SiteSelection::Site("all".into()));
        assert_eq!(SiteSelection::All.to_string(), "ALL");
    }

    #[test]
    fn range_from_dataset_bounds() {
        assert_eq!(PayloadRange::from_dataset(&example()), PayloadRange::new(500.0, 6000.0));
    }
}
