use std::f64::consts::{FRAC_PI_2, PI};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::generate_palette;
use crate::data::filter::SiteSelection;
use crate::data::loader::{COL_CLASS, COL_PAYLOAD_MASS};
use crate::state::AppState;

/// Smallest marker drawn, so zero-payload launches stay visible.
const MIN_MARKER_RADIUS: f64 = 2.0;

/// Largest arc drawn as one polygon; egui fills polygons as convex shapes.
const MAX_WEDGE_PIECE: f64 = FRAC_PI_2;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Split a unit-circle wedge into convex pieces.
///
/// Angles are in radians, counter-clockwise from the positive x axis; the
/// wedge runs clockwise from `start` for `sweep`.
fn wedge_pieces(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    let n_pieces = (sweep / MAX_WEDGE_PIECE).ceil().max(1.0) as usize;
    let piece_sweep = sweep / n_pieces as f64;

    (0..n_pieces)
        .map(|p| {
            let a0 = start - p as f64 * piece_sweep;
            let steps = ((piece_sweep / (PI / 90.0)).ceil() as usize).max(2);
            std::iter::once([0.0, 0.0])
                .chain((0..=steps).map(|i| {
                    let a = a0 - piece_sweep * i as f64 / steps as f64;
                    [a.cos(), a.sin()]
                }))
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Proportion chart
// ---------------------------------------------------------------------------

/// Shown instead of a pie whose segments add up to nothing.
fn empty_pie_message(site: &SiteSelection) -> String {
    match site {
        SiteSelection::AllSites => "No successful launches to show".to_string(),
        SiteSelection::Site(site) => format!("No launches from {site}"),
    }
}

/// Render the success pie, starting at twelve o'clock and going clockwise.
pub fn proportion_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = state.proportions();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(chart.title.as_str());
    });

    let fractions = chart.fractions();
    if fractions.is_empty() {
        ui.allocate_ui([ui.available_width(), height].into(), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(empty_pie_message(&state.selection().site));
            });
        });
        return;
    }

    let colors = generate_palette(chart.segments.len());

    Plot::new(state.layout().proportion_chart_id)
        .height(height)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.1)
        .include_y(1.1)
        .label_formatter(|name, _| name.to_owned())
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for ((segment, &fraction), color) in
                chart.segments.iter().zip(&fractions).zip(colors.iter().copied())
            {
                let sweep = fraction * 2.0 * PI;
                for piece in wedge_pieces(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(piece))
                            .fill_color(color)
                            .stroke(Stroke::NONE)
                            .name(&segment.label),
                    );
                }

                if fraction > 0.0 {
                    let mid = start - sweep / 2.0;
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", fraction * 100.0))
                            .color(Color32::WHITE)
                            .strong(),
                    ));
                }
                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation chart
// ---------------------------------------------------------------------------

/// Render payload mass against outcome, one colour per booster version.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = state.correlation();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(chart.title.as_str());
        if chart.is_empty() {
            ui.weak("No launches in this payload range");
        }
    });

    Plot::new(state.layout().scatter_chart_id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_x(0.0)
        .include_y(-0.5)
        .include_y(1.5)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!(
                    "{name}\n{COL_PAYLOAD_MASS}: {:.0}\n{COL_CLASS}: {:.0}",
                    value.x, value.y
                )
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let color = state.booster_colors.color_for(&series.booster_version);
                // One item per point: egui_plot gives a whole item a single radius.
                for p in &series.points {
                    plot_ui.points(
                        Points::new(vec![[p.payload_mass_kg, f64::from(p.class)]])
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(p.radius.max(MIN_MARKER_RADIUS) as f32)
                            .color(color)
                            .name(&series.booster_version),
                    );
                }
            }
        });
}
