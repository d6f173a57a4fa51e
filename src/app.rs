use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Channel;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GeothermalDashboardApp {
    pub state: AppState,
}

impl GeothermalDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GeothermalDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plots and table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading("🌋 Geothermal Drilling Dashboard");
                    let filtered = &self.state.filtered;
                    if filtered.is_empty() {
                        ui.label("No rows match the current filters.");
                    }
                    ui.separator();

                    plot::temperature_plot(ui, filtered);
                    plot::channel_plot(ui, "Rate of Penetration", Channel::Rop, filtered);
                    plot::channel_plot(ui, "Weight on Bit", Channel::Wob, filtered);
                    plot::channel_plot(ui, "Surface Torque", Channel::SurfaceTorque, filtered);
                    plot::channel_plot(
                        ui,
                        "Temperature Gain (ΔT)",
                        Channel::TemperatureGain,
                        filtered,
                    );

                    ui.separator();
                    table::filtered_table(ui, filtered);
                });
        });
    }
}
