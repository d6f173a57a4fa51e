mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Context;
use app::GeothermalDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env(std::env::args())?;

    // A log that cannot be loaded is fatal: there is no empty dashboard mode.
    let table = data::loader::load_file(&config.csv_path, &config.loader)
        .with_context(|| format!("loading {}", config.csv_path.display()))?;

    let state = AppState::new(
        table,
        config.csv_path.clone(),
        config.loader,
        config.initial_bounds,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Geothermal Drilling Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(GeothermalDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the dashboard window")
}
