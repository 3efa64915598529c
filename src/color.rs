use std::collections::{BTreeMap, BTreeSet};

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
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps the labels of a categorical column (booster versions) to distinct
/// colours. Built once from the whole table so a label keeps its colour
/// whatever the current filter shows.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(labels: &BTreeSet<String>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels.iter().cloned().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let colours = generate_palette(5);
        assert_eq!(colours.len(), 5);
        let unique: BTreeSet<[u8; 4]> = colours.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn labels_keep_their_colour() {
        let labels: BTreeSet<String> = ["F9 v1.0", "F9 v1.1", "F9 FT"]
            .into_iter()
            .map(String::from)
            .collect();
        let map = ColorMap::new(&labels);

        assert_eq!(map.color_for("F9 FT"), map.color_for("F9 FT"));
        assert_ne!(map.color_for("F9 FT"), map.color_for("F9 v1.0"));
        assert_eq!(map.color_for("Starship"), Color32::GRAY);
    }
}
