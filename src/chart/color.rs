use palette::{Hsl, IntoColor, Srgb};

use super::model::SeriesColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// The first hue is a blue so a single-series chart looks like the usual
/// default plot colour.
pub fn generate_palette(n: usize) -> Vec<SeriesColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (215.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            SeriesColor::new(
                to_channel(rgb.red),
                to_channel(rgb.green),
                to_channel(rgb.blue),
            )
        })
        .collect()
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn colours_are_distinct() {
        for n in 1..=12 {
            let colours = generate_palette(n);
            assert_eq!(colours.len(), n);
            let unique: HashSet<_> = colours.iter().collect();
            assert_eq!(unique.len(), n, "palette of {n} has duplicates");
        }
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(generate_palette(6), generate_palette(6));
    }
}
