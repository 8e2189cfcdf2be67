use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Fixed colour assignment for the three plot series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesColors {
    /// Full node cloud.
    pub nodes: Color32,
    /// Pitch-axis subset overlay.
    pub pitch: Color32,
    /// Station-representative overlay.
    pub stations: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let palette = generate_palette(3);
        SeriesColors {
            pitch: palette[0],
            stations: palette[1],
            nodes: palette[2],
        }
    }
}
