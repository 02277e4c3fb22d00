use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use serde::Serialize;

use crate::data::filter::{
    compute_pie_data, compute_scatter_data, PayloadRange, PieData, ScatterData, SiteSelection,
    ALL_SITES,
};
use crate::data::model::LaunchDataset;

/// File read when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

#[derive(Parser, Debug)]
#[command(author, version, about = "SpaceX launch records dashboard", long_about = None)]
pub struct Cli {
    /// Launch records file (.csv or .json)
    #[arg(default_value = DEFAULT_DATA_FILE, value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Print the chart inputs as JSON instead of opening a window
    #[arg(long, action = ArgAction::SetTrue)]
    pub summary: bool,

    /// Launch site for --summary (`ALL` for every site)
    #[arg(long, default_value = ALL_SITES)]
    pub site: String,

    /// Lower payload bound in kg for --summary (defaults to the dataset minimum)
    #[arg(long)]
    pub payload_min: Option<f64>,

    /// Upper payload bound in kg for --summary (defaults to the dataset maximum)
    #[arg(long)]
    pub payload_max: Option<f64>,
}

impl Cli {
    /// Selection described by the flags, falling back to the dataset bounds.
    pub fn selection(&self, dataset: &LaunchDataset) -> (SiteSelection, PayloadRange) {
        let bounds = PayloadRange::from_dataset(dataset);
        let range = PayloadRange::new(
            self.payload_min.unwrap_or(bounds.low),
            self.payload_max.unwrap_or(bounds.high),
        );
        (SiteSelection::parse(&self.site), range)
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub site: String,
    pub payload_range: PayloadRange,
    pub pie: PieData,
    pub scatter: ScatterData,
}

impl Summary {
    pub fn compute(dataset: &LaunchDataset, site: &SiteSelection, range: PayloadRange) -> Self {
        Summary {
            site: site.to_string(),
            payload_range: range,
            pie: compute_pie_data(dataset, site),
            scatter: compute_scatter_data(dataset, site, range),
        }
    }
}
