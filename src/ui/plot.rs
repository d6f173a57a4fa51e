use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::channel_color;
use crate::data::model::{Channel, FilteredTable};

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Depth plots (central panel)
// ---------------------------------------------------------------------------

/// Temp Out and Temp In overlaid against depth.
pub fn temperature_plot(ui: &mut Ui, filtered: &FilteredTable) {
    ui.heading("Temperature vs Depth");
    depth_plot(
        ui,
        "temperature_plot",
        "Temperature (°F)",
        &[Channel::TempOut, Channel::TempIn],
        filtered,
    );
}

/// A single channel against depth, titled with `title`.
pub fn channel_plot(ui: &mut Ui, title: &str, channel: Channel, filtered: &FilteredTable) {
    ui.heading(title);
    let x_label = format!("{} ({})", channel.label(), channel.unit());
    depth_plot(ui, title, &x_label, &[channel], filtered);
}

/// Plot each channel on the x axis against depth on the y axis, depth
/// increasing downwards.
fn depth_plot(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    channels: &[Channel],
    filtered: &FilteredTable,
) {
    let mut plot = Plot::new(id)
        .height(PLOT_HEIGHT)
        .x_axis_label(x_label)
        .y_axis_label(Channel::Depth.to_string())
        .y_axis_formatter(|mark, _range| format!("{:.0}", depth_from_plot(mark.value)))
        .label_formatter(|name, point| {
            let depth = depth_from_plot(point.y);
            if name.is_empty() {
                format!("x = {:.2}\ndepth = {depth:.1} ft", point.x)
            } else {
                format!("{name}\n{:.2} @ {depth:.1} ft", point.x)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);
    if channels.len() > 1 {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for &channel in channels {
            let points: PlotPoints = filtered
                .depth_profile(channel)
                .into_iter()
                .map(to_plot_point)
                .collect();

            let line = Line::new(points)
                .name(channel.label())
                .color(channel_color(channel))
                .width(1.5);

            plot_ui.line(line);
        }
    });
}

/// egui_plot has no inverted axis, so depth is plotted negated and the axis
/// labels undo the negation.
fn to_plot_point([value, depth]: [f64; 2]) -> [f64; 2] {
    [value, -depth]
}

fn depth_from_plot(y: f64) -> f64 {
    -y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_points_plot_lower() {
        let shallow = to_plot_point([150.0, 100.0]);
        let deep = to_plot_point([150.0, 2500.0]);
        assert!(deep[1] < shallow[1]);
        assert_eq!(depth_from_plot(deep[1]), 2500.0);
    }
}
