//! Static swatch table offered by the color picker.

use super::Rgb;

/// A named picker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    /// Color drawn on the picker button
    pub display: Rgb,
    /// Color actually fed to the colorizer
    pub color: Rgb,
}

/// Every swatch the picker offers, in picker order.
pub static SWATCHES: [Swatch; 10] = [
    Swatch { name: "Red", display: Rgb::from_u32(0xFF6B6B), color: Rgb::from_u32(0xFF0000) },
    Swatch { name: "Blue", display: Rgb::from_u32(0x4ECDC4), color: Rgb::from_u32(0x0000FF) },
    Swatch { name: "Green", display: Rgb::from_u32(0x45B7D1), color: Rgb::from_u32(0x00FF00) },
    Swatch { name: "Yellow", display: Rgb::from_u32(0xF9CA24), color: Rgb::from_u32(0xFFFF00) },
    Swatch { name: "Purple", display: Rgb::from_u32(0x6C5CE7), color: Rgb::from_u32(0x800080) },
    Swatch { name: "Orange", display: Rgb::from_u32(0xFD79A8), color: Rgb::from_u32(0xFFA500) },
    Swatch { name: "Pink", display: Rgb::from_u32(0xFDCB6E), color: Rgb::from_u32(0xFFC0CB) },
    Swatch { name: "Cyan", display: Rgb::from_u32(0x00CEC9), color: Rgb::from_u32(0x00FFFF) },
    Swatch { name: "Brown", display: Rgb::from_u32(0xA0522D), color: Rgb::from_u32(0x8B4513) },
    Swatch { name: "Gold", display: Rgb::from_u32(0xFFD700), color: Rgb::from_u32(0xFFD700) },
];

/// Names of the swatches selected when the picker first opens.
pub const DEFAULT_SELECTION: [&str; 3] = ["Red", "Blue", "Green"];

/// Look up a swatch by name, ignoring case.
pub fn swatch_by_name(name: &str) -> Option<&'static Swatch> {
    SWATCHES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Look up the swatch that feeds `color` to the colorizer.
pub fn swatch_by_color(color: Rgb) -> Option<&'static Swatch> {
    SWATCHES.iter().find(|s| s.color == color)
}

/// Colors of [`DEFAULT_SELECTION`], in order.
pub fn default_colors() -> Vec<Rgb> {
    DEFAULT_SELECTION
        .iter()
        .filter_map(|name| swatch_by_name(name))
        .map(|s| s.color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        let brown = swatch_by_name("brown").unwrap();
        assert_eq!(brown.color.to_hex(), "#8B4513");
        assert_eq!(brown.display.to_hex(), "#A0522D");
        assert!(swatch_by_name("Magenta").is_none());
    }

    #[test]
    fn test_lookup_by_color() {
        let swatch = swatch_by_color(Rgb::new(0x80, 0x00, 0x80)).unwrap();
        assert_eq!(swatch.name, "Purple");
        // Display colors are not colorizer inputs
        assert!(swatch_by_color(Rgb::from_u32(0xFF6B6B)).is_none());
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(
            default_colors(),
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), Rgb::new(0, 255, 0)]
        );
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in SWATCHES.iter().enumerate() {
            for b in &SWATCHES[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.color, b.color);
            }
        }
    }
}
