use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::risk::RiskCategory;

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
// Badge colours
// ---------------------------------------------------------------------------

/// Badge fill for a risk category.
pub fn category_color(category: RiskCategory) -> Color32 {
    match category {
        RiskCategory::Low => Color32::from_rgb(46, 160, 67),
        RiskCategory::Medium => Color32::from_rgb(219, 145, 23),
        RiskCategory::High => Color32::from_rgb(207, 34, 46),
    }
}

/// Background used behind highlighted ingredient text; deeper overlaps are
/// drawn more opaque.
pub fn highlight_color(depth: u16) -> Color32 {
    let alpha = (70 + 60 * u32::from(depth.min(3))).min(255) as u8;
    Color32::from_rgba_unmultiplied(255, 221, 87, alpha)
}

// ---------------------------------------------------------------------------
// Hall colours: hall name → Color32
// ---------------------------------------------------------------------------

/// Maps hall names to distinct colours for the overview chart.
#[derive(Debug, Clone, Default)]
pub struct HallColors {
    mapping: BTreeMap<String, Color32>,
}

impl HallColors {
    /// Assign colours in the order the names are given.
    pub fn new(hall_names: &[String]) -> Self {
        let palette = generate_palette(hall_names.len());
        let mapping = hall_names.iter().cloned().zip(palette).collect();
        HallColors { mapping }
    }

    /// Look up the colour for a hall; unknown halls are grey.
    pub fn color_for(&self, hall: &str) -> Color32 {
        self.mapping.get(hall).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        assert_ne!(p[0], p[1]);
    }

    #[test]
    fn hall_colors_fall_back_to_grey() {
        let colors = HallColors::new(&["D2".to_string(), "Owens".to_string()]);
        assert_ne!(colors.color_for("D2"), colors.color_for("Owens"));
        assert_eq!(colors.color_for("Turner"), Color32::GRAY);
    }

    #[test]
    fn categories_have_distinct_badges() {
        let colors: Vec<Color32> = RiskCategory::ALL.iter().map(|&c| category_color(c)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
