use crate::color::ColorMap;
use crate::data::filter::{
    compute_pie_data, compute_scatter_data, PayloadRange, PieData, ScatterData, SiteSelection,
};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Site dropdown value.
    pub selected_site: SiteSelection,

    /// Search text typed into the site dropdown.
    pub site_query: String,

    /// Payload slider value.
    pub payload_range: PayloadRange,

    /// Pie chart input for the current selection.
    pub pie: Option<PieData>,

    /// Scatter chart input for the current selection.
    pub scatter: Option<ScatterData>,

    /// Booster category colours for the scatter series.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected_site: SiteSelection::All,
            site_query: String::new(),
            payload_range: PayloadRange::new(0.0, 0.0),
            pie: None,
            scatter: None,
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn with_dataset(dataset: LaunchDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset and reset the selection.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.selected_site = SiteSelection::All;
        self.site_query.clear();
        self.payload_range = PayloadRange::from_dataset(&dataset);
        self.color_map = Some(ColorMap::new(dataset.booster_categories()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Dropdown change: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        self.selected_site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Slider change: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = self
            .dataset
            .as_ref()
            .map(|ds| compute_pie_data(ds, &self.selected_site));
    }

    fn refresh_scatter(&mut self) {
        self.scatter = self
            .dataset
            .as_ref()
            .map(|ds| compute_scatter_data(ds, &self.selected_site, self.payload_range));
    }
}
