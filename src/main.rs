mod app;
mod charts;
mod cli;
mod color;
mod data;
mod layout;
mod state;
mod ui;

use anyhow::Context;
use app::LaunchDashApp;
use clap::Parser;
use eframe::egui;

use cli::Cli;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = match data::loader::load_file(&cli.data) {
        Ok(table) => {
            log::info!(
                "Loaded {} launches from {} (sites: {:?})",
                table.len(),
                cli.data.display(),
                table.sites()
            );
            if table.is_empty() {
                log::warn!("{} holds no launches, both charts will be empty", cli.data.display());
            }
            table
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", cli.data.display());
            return Err(e.context(format!("loading {}", cli.data.display())));
        }
    };

    let state = AppState::new(table, cli.data.display().to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
