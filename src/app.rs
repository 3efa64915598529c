use eframe::egui::{self, ScrollArea};

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Vertical room left for the chart titles and the separator.
const CHART_CHROME: f32 = 70.0;
const MIN_CHART_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title(ui, &self.state);
        });

        // ---- Left side panel: site and payload controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: both charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height =
                ((ui.available_height() - CHART_CHROME) / 2.0).max(MIN_CHART_HEIGHT);
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::proportion_plot(ui, &self.state, chart_height);
                    ui.separator();
                    plot::scatter_plot(ui, &self.state, chart_height);
                });
        });
    }
}
