use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Shape, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::{ColorMap, FAILURE_COLOR, SUCCESS_COLOR};
use crate::data::filter::{PieData, ScatterData, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: pie above scatter
// ---------------------------------------------------------------------------

pub fn charts(ui: &mut Ui, state: &AppState) {
    let (Some(pie), Some(scatter)) = (&state.pie, &state.scatter) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch records file  (File → Open…)");
        });
        return;
    };

    let pie_height = (ui.available_height() * 0.4).max(160.0);
    ui.vertical(|ui: &mut Ui| {
        pie_chart(ui, pie, pie_height);
        ui.separator();
        scatter_plot(ui, scatter, state.color_map.as_ref());
    });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Slices in display order: failure first, then success.
fn slices(pie: &PieData) -> [(&'static str, usize, Color32); 2] {
    [
        ("Failure", pie.failure_count, FAILURE_COLOR),
        ("Success", pie.success_count, SUCCESS_COLOR),
    ]
}

/// Angular extent `(start, sweep)` of each slice, clockwise from 12 o'clock.
fn slice_angles(pie: &PieData) -> [(f32, f32); 2] {
    let total = pie.total().max(1) as f32;
    let mut start = -FRAC_PI_2;
    slices(pie).map(|(_, count, _)| {
        let sweep = count as f32 / total * TAU;
        let extent = (start, sweep);
        start += sweep;
        extent
    })
}

/// Split a wedge into convex pieces no wider than 45°.
fn wedge(center: Pos2, radius: f32, start: f32, sweep: f32, fill: Color32) -> Vec<Shape> {
    let pieces = (sweep / FRAC_PI_4).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;
    (0..pieces)
        .map(|i| {
            let a0 = start + i as f32 * step;
            let mut points = vec![center];
            for k in 0..=8 {
                let a = a0 + step * k as f32 / 8.0;
                points.push(center + radius * egui::vec2(a.cos(), a.sin()));
            }
            Shape::convex_polygon(points, fill, Stroke::NONE)
        })
        .collect()
}

fn pie_chart(ui: &mut Ui, pie: &PieData, height: f32) {
    ui.heading(&pie.title);

    let (response, painter) =
        ui.allocate_painter(egui::vec2(ui.available_width(), height), egui::Sense::hover());
    let rect = response.rect;
    let radius = (rect.height().min(rect.width()) * 0.45).max(1.0);
    let center = rect.left_center() + egui::vec2(radius + 16.0, 0.0);
    let text_color = ui.visuals().text_color();

    if pie.total() == 0 {
        painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::GRAY));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "No launches",
            FontId::proportional(14.0),
            text_color,
        );
        return;
    }

    for ((_, count, color), (start, sweep)) in slices(pie).into_iter().zip(slice_angles(pie)) {
        if count == 0 {
            continue;
        }
        for shape in wedge(center, radius, start, sweep, color) {
            painter.add(shape);
        }
        let mid = start + sweep / 2.0;
        painter.text(
            center + radius * 0.6 * egui::vec2(mid.cos(), mid.sin()),
            Align2::CENTER_CENTER,
            format!("{:.1}%", sweep / TAU * 100.0),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }

    // Legend to the right of the pie.
    let mut y = center.y - 12.0;
    let legend_x = center.x + radius + 24.0;
    for (name, count, color) in slices(pie) {
        painter.rect_filled(
            egui::Rect::from_min_size(egui::pos2(legend_x, y - 6.0), egui::vec2(12.0, 12.0)),
            2.0,
            color,
        );
        painter.text(
            egui::pos2(legend_x + 18.0, y),
            Align2::LEFT_CENTER,
            format!("{name}: {count}"),
            FontId::proportional(14.0),
            text_color,
        );
        y += 24.0;
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, scatter: &ScatterData, color_map: Option<&ColorMap>) {
    ui.heading(&scatter.title);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Success (1) / Failure (0)")
        .include_x(PAYLOAD_SLIDER_MIN)
        .include_x(PAYLOAD_SLIDER_MAX)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\npayload: {:.0} kg\nclass: {:.0}", value.x, value.y)
            }
        })
        .show(ui, |plot_ui| {
            for (category, points) in scatter.by_category() {
                let color = color_map
                    .map(|cm| cm.color_for(category))
                    .unwrap_or(Color32::LIGHT_BLUE);
                let coords: Vec<[f64; 2]> = points
                    .iter()
                    .map(|p| [p.payload_mass_kg, f64::from(p.outcome_class)])
                    .collect();

                plot_ui.points(
                    Points::new(PlotPoints::from(coords))
                        .name(category)
                        .color(color)
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}
