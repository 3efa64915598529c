use eframe::egui::{self, pos2, vec2, Color32, RichText, Sense, Slider, SliderClamping, TextStyle, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::layout::RangeSliderSpec;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the two dashboard controls
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    site_selector(ui, state);
    ui.add_space(12.0);
    payload_slider(ui, state);
}

/// Searchable launch-site dropdown.
fn site_selector(ui: &mut Ui, state: &mut AppState) {
    let spec = state.layout().site_selector.clone();
    let current = state.selection().site.clone();
    let mut picked: Option<SiteSelection> = None;

    ui.strong("Launch Site");
    egui::ComboBox::from_id_salt(spec.id)
        .selected_text(current.value())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if spec.searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut state.site_search)
                        .hint_text(spec.placeholder),
                );
                ui.separator();
            }

            let needle = state.site_search.to_lowercase();
            for option in spec
                .options
                .iter()
                .filter(|o| o.to_lowercase().contains(&needle))
            {
                if ui
                    .selectable_label(current.value() == option.as_str(), option.as_str())
                    .clicked()
                {
                    picked = Some(SiteSelection::from_value(option));
                }
            }
        });

    if let Some(site) = picked {
        state.set_site(site);
    }
}

/// Room kept right of each slider rail for its value and "min"/"max" text.
const SLIDER_TEXT_ROOM: f32 = 90.0;
const TICK_LEN: f32 = 4.0;
/// Minimum horizontal space between two mark labels.
const MARK_GAP: f32 = 4.0;

/// Payload range as two stepped sliders with the fixed marks underneath.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let spec = state.layout().payload_slider.clone();
    let range = state.selection().payload_range;
    let (mut low, mut high) = (range.low(), range.high());

    let rail_width = (ui.available_width() - SLIDER_TEXT_ROOM).max(100.0);
    ui.spacing_mut().slider_width = rail_width;

    // Only user edits snap to the step; the seeded bounds are shown as they are.
    ui.strong(spec.label);
    let low_changed = ui
        .add(
            Slider::new(&mut low, spec.min..=spec.max)
                .step_by(spec.step)
                .clamping(SliderClamping::Edits)
                .suffix(" kg")
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, spec.min..=spec.max)
                .step_by(spec.step)
                .clamping(SliderClamping::Edits)
                .suffix(" kg")
                .text("max"),
        )
        .changed();

    // Dragging one handle past the other pushes it along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }

    slider_marks(ui, &spec, rail_width);

    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }
}

/// Horizontal position of `value` on a rail starting at `left`.
fn mark_x(value: f64, min: f64, max: f64, left: f32, width: f32) -> f32 {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    left + t as f32 * width
}

/// Left edge of each label centred on its tick, or `None` where it would
/// overlap the previous shown label. Labels are kept inside `[left, right]`.
fn place_labels(centres_and_widths: &[(f32, f32)], left: f32, right: f32) -> Vec<Option<f32>> {
    let mut last_right = f32::NEG_INFINITY;
    centres_and_widths
        .iter()
        .map(|&(centre, width)| {
            let x = (centre - width / 2.0).max(left).min(right - width);
            if x >= last_right + MARK_GAP {
                last_right = x + width;
                Some(x)
            } else {
                None
            }
        })
        .collect()
}

/// Tick for every mark under the slider rail, labelled where there is room.
fn slider_marks(ui: &mut Ui, spec: &RangeSliderSpec, rail_width: f32) {
    let font = TextStyle::Small.resolve(ui.style());
    let text_color = ui.visuals().weak_text_color();
    let tick_stroke = ui.visuals().widgets.noninteractive.fg_stroke;
    let row_height = ui.text_style_height(&TextStyle::Small) + TICK_LEN + 2.0;
    // The slider handle never travels into the outer half-handle of the rail.
    let inset = ui.spacing().interact_size.y / 2.5;

    let (rect, _) = ui.allocate_exact_size(vec2(rail_width, row_height), Sense::hover());
    let painter = ui.painter();

    let ticks: Vec<f32> = spec
        .marks
        .iter()
        .map(|(value, _)| {
            mark_x(*value, spec.min, spec.max, rect.left() + inset, rect.width() - 2.0 * inset)
        })
        .collect();
    let galleys: Vec<_> = spec
        .marks
        .iter()
        .map(|(_, label)| painter.layout_no_wrap(label.clone(), font.clone(), text_color))
        .collect();
    let sizes: Vec<(f32, f32)> = ticks
        .iter()
        .zip(&galleys)
        .map(|(&x, g)| (x, g.size().x))
        .collect();

    for (x, (galley, label_left)) in ticks
        .iter()
        .zip(galleys.into_iter().zip(place_labels(&sizes, rect.left(), rect.right())))
    {
        painter.line_segment(
            [pos2(*x, rect.top()), pos2(*x, rect.top() + TICK_LEN)],
            tick_stroke,
        );
        if let Some(left) = label_left {
            painter.galley(pos2(left, rect.top() + TICK_LEN + 1.0), galley, text_color);
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar and title
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });
        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset filters").clicked() {
                state.reset_selection();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded from {}, {} shown in payload range",
            state.table().len(),
            state.source,
            state.correlation().point_count()
        ));
    });
}

/// Dashboard heading, centred and styled as the layout says.
pub fn title(ui: &mut Ui, state: &AppState) {
    let layout = state.layout();
    let [r, g, b] = layout.title_rgb;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(layout.title)
                .size(layout.title_size)
                .color(Color32::from_rgb(r, g, b)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::example_table;

    fn run_frames(state: &mut AppState, frames: usize) {
        let ctx = egui::Context::default();
        for _ in 0..frames {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::SidePanel::left("filter_panel").show(ctx, |ui| {
                    side_panel(ui, state);
                });
            });
        }
    }

    #[test]
    fn drawing_the_panel_keeps_the_seeded_range() {
        let mut state = AppState::new(example_table(), "test");
        let seeded = state.selection().clone();

        run_frames(&mut state, 3);

        assert_eq!(state.selection(), &seeded);
        assert_eq!(
            state.selection().payload_range,
            PayloadRange::new(500.0, 2500.0)
        );
        assert_eq!(state.correlation().point_count(), 1);
    }

    #[test]
    fn reset_range_survives_redraw() {
        let mut state = AppState::new(example_table(), "test");
        state.set_payload_range(PayloadRange::new(0.0, 1000.0));
        state.reset_selection();

        run_frames(&mut state, 2);

        assert_eq!(
            state.selection().payload_range,
            PayloadRange::new(500.0, 2500.0)
        );
    }

    #[test]
    fn marks_span_the_rail() {
        assert_eq!(mark_x(0.0, 0.0, 10000.0, 10.0, 200.0), 10.0);
        assert_eq!(mark_x(5000.0, 0.0, 10000.0, 10.0, 200.0), 110.0);
        assert_eq!(mark_x(10000.0, 0.0, 10000.0, 10.0, 200.0), 210.0);
        assert_eq!(mark_x(12000.0, 0.0, 10000.0, 10.0, 200.0), 210.0);
    }

    #[test]
    fn crowded_labels_are_skipped_and_kept_in_bounds() {
        // Three 30-wide labels, the middle one too close to the first.
        let placed = place_labels(&[(0.0, 30.0), (20.0, 30.0), (100.0, 30.0)], 0.0, 110.0);
        assert_eq!(placed, vec![Some(0.0), None, Some(80.0)]);
    }
}
