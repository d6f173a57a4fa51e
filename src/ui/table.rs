use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Channel, FilteredTable};

/// Render the filtered rows that have no missing value in any displayed
/// column.
pub fn filtered_table(ui: &mut Ui, filtered: &FilteredTable) {
    let rows = filtered.complete_rows();
    ui.heading("Filtered Data Table");
    ui.label(format!("{} complete rows", rows.len()));

    ui.push_id("filtered_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .max_scroll_height(400.0)
            .columns(Column::auto().at_least(90.0), Channel::TABLE.len())
            .header(22.0, |mut header| {
                for channel in Channel::TABLE {
                    header.col(|ui| {
                        ui.strong(channel.to_string());
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let values = rows[row.index()];
                    for value in values {
                        row.col(|ui| {
                            ui.label(format!("{value:.2}"));
                        });
                    }
                });
            });
    });
}

