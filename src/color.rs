use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Channel;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Convert an HSL hue (degrees) at fixed saturation/lightness to `Color32`.
pub fn hue_color(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Line colour of each channel, stable across redraws.
pub fn channel_color(channel: Channel) -> Color32 {
    match channel {
        // Depth is the shared axis, never a series.
        Channel::Depth => Color32::GRAY,
        Channel::TempOut => hue_color(210.0),
        Channel::TempIn => hue_color(28.0),
        Channel::Rop => hue_color(120.0),
        Channel::Wob => hue_color(285.0),
        Channel::SurfaceTorque => hue_color(0.0),
        Channel::TemperatureGain => hue_color(38.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plotted_channels_have_distinct_colors() {
        let plotted = [
            Channel::TempOut,
            Channel::TempIn,
            Channel::Rop,
            Channel::Wob,
            Channel::SurfaceTorque,
        ];
        for (i, a) in plotted.iter().enumerate() {
            for b in &plotted[i + 1..] {
                assert_ne!(channel_color(*a), channel_color(*b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn red_hue_is_red() {
        let c = hue_color(0.0);
        assert!(c.r() > c.g() && c.r() > c.b());
    }
}
