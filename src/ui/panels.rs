use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Channel, FilterBounds};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – range sliders
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for channel in FilterBounds::FILTERED {
                changed |= range_sliders(ui, channel, &state.observed, &mut state.bounds);
                ui.add_space(6.0);
            }

            ui.separator();
            if ui.button("Reset filters").clicked() {
                state.reset_bounds();
            }

            let b = &state.bounds;
            if b.min_depth > b.max_depth || b.min_rop > b.max_rop || b.min_wob > b.max_wob {
                ui.label(RichText::new("A minimum is above its maximum.").color(Color32::YELLOW));
            }
        });

    if changed {
        state.refilter();
    }
}

/// Min and max sliders for one channel, limited to its observed range.
/// Returns whether either value changed.
fn range_sliders(
    ui: &mut Ui,
    channel: Channel,
    observed: &FilterBounds,
    bounds: &mut FilterBounds,
) -> bool {
    let (Some((lo, hi)), Some((min, max))) = (observed.interval(channel), bounds.interval_mut(channel))
    else {
        return false;
    };
    let label = channel.label();
    let unit = channel.unit();

    ui.strong(format!("{label} ({unit})"));
    let min_changed = ui
        .add(
            egui::Slider::new(min, lo..=hi)
                .clamping(egui::SliderClamping::Edits)
                .text(format!("Min {label}")),
        )
        .changed();
    let max_changed = ui
        .add(
            egui::Slider::new(max, lo..=hi)
                .clamping(egui::SliderClamping::Edits)
                .text(format!("Max {label}")),
        )
        .changed();
    min_changed || max_changed
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

        ui.label(format!(
            "{}: {} rows × {} columns loaded, {} within filters",
            state
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            state.table.len(),
            state.table.columns().len(),
            state.filtered.len()
        ));

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
        .set_title("Open drilling log")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
