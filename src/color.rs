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
// Trace colours for the response plots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceColors {
    pub magnitude: Color32,
    pub phase: Color32,
    pub cutoff: Color32,
}

impl Default for TraceColors {
    fn default() -> Self {
        // Start the wheel at blue rather than red for the main trace.
        let mut colors = generate_palette(3);
        colors.rotate_left(2);
        TraceColors {
            magnitude: colors[0],
            phase: colors[1],
            cutoff: colors[2],
        }
    }
}
