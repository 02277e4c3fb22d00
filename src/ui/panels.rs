use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{
    PayloadRange, SiteSelection, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();

    let sites = match &state.dataset {
        Some(ds) if ds.is_empty() => {
            ui.label("Dataset contains no launches.");
            return;
        }
        Some(ds) => ds.sites().to_vec(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Site dropdown ----
    let mut picked: Option<SiteSelection> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selected_site.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_query)
                    .hint_text(SITE_PLACEHOLDER)
                    .desired_width(f32::INFINITY),
            );
            if "all sites".contains(&state.site_query.trim().to_lowercase())
                && ui
                    .selectable_label(state.selected_site == SiteSelection::All, "All Sites")
                    .clicked()
            {
                picked = Some(SiteSelection::All);
            }
            for site in matching_sites(&sites, &state.site_query) {
                let selection = SiteSelection::Site(site.clone());
                if ui
                    .selectable_label(state.selected_site == selection, site)
                    .clicked()
                {
                    picked = Some(selection);
                }
            }
        });
    if let Some(site) = picked {
        log::debug!("site selected: {site}");
        state.site_query.clear();
        state.set_site(site);
    }

    ui.add_space(12.0);

    // ---- Payload range ----
    // Sliders snap to the step grid when drawn, so they edit copies and only
    // write back on user input; the unsnapped dataset bounds survive.
    ui.strong("Payload range (Kg):");
    let mut range: PayloadRange = state.payload_range;
    let mut low = range.low;
    let mut high = range.high;
    let low_resp = ui.add(
        egui::Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    );
    let high_resp = ui.add(
        egui::Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    );
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in slider_marks() {
            ui.small(mark);
        }
    });

    let mut edited = false;
    if user_edited(&low_resp) {
        range.low = low;
        edited = true;
    }
    if user_edited(&high_resp) {
        range.high = high;
        edited = true;
    }
    if edited {
        log::debug!("payload range: [{}, {}]", range.low, range.high);
        state.set_payload_range(range);
    }
    if range.low > range.high {
        ui.label(RichText::new("min is above max: no launches match").color(Color32::YELLOW));
    }

    ui.separator();

    // ---- Selection summary ----
    if let Some(pie) = &state.pie {
        ui.label(format!("{} launches at {}", pie.total(), state.selected_site.label()));
        if let Some(rate) = pie.success_rate() {
            ui.label(format!("Success rate: {:.1}%", rate * 100.0));
        }
    }
    if let Some(scatter) = &state.scatter {
        ui.label(format!("{} launches in payload range", scatter.points.len()));
    }
}

/// Search hint shown in the site dropdown.
const SITE_PLACEHOLDER: &str = "Select a Launch Site here";

/// Sites whose name contains `query`, ignoring case.
fn matching_sites<'a>(sites: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    sites
        .iter()
        .filter(|site| site.to_lowercase().contains(&query))
        .collect()
}

/// Whether a slider change came from the pointer or keyboard rather than
/// from the widget snapping its initial value.
fn user_edited(response: &egui::Response) -> bool {
    response.changed()
        && (response.dragged()
            || response.is_pointer_button_down_on()
            || response.has_focus()
            || response.lost_focus())
}

/// Tick labels under the payload sliders.
fn slider_marks() -> Vec<String> {
    let steps = ((PAYLOAD_SLIDER_MAX - PAYLOAD_SLIDER_MIN) / PAYLOAD_SLIDER_STEP).round() as usize;
    (0..=steps)
        .map(|i| format!("{}", PAYLOAD_SLIDER_MIN + i as f64 * PAYLOAD_SLIDER_STEP))
        .collect()
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded from {} sites",
                ds.len(),
                ds.sites().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} with sites {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.sites()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
