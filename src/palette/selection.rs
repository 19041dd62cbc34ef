//! Picker selection: the ordered set of colors a user has toggled on.

use super::{default_colors, Palette, Rgb};

/// Ordered set of selected colors. Unlike [`Palette`], a selection never
/// holds the same color twice, since picking a selected color removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSelection {
    colors: Vec<Rgb>,
}

impl PaletteSelection {
    /// An empty selection.
    pub fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    /// Remove `color` if selected, otherwise append it.
    /// Returns whether the color is selected afterwards.
    pub fn toggle(&mut self, color: Rgb) -> bool {
        if let Some(pos) = self.colors.iter().position(|&c| c == color) {
            self.colors.remove(pos);
            false
        } else {
            self.colors.push(color);
            true
        }
    }

    /// Replace the selection, dropping repeated colors but keeping the
    /// first occurrence's position.
    pub fn set(&mut self, colors: impl IntoIterator<Item = Rgb>) {
        self.colors.clear();
        for color in colors {
            if !self.colors.contains(&color) {
                self.colors.push(color);
            }
        }
    }

    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn to_palette(&self) -> Palette {
        Palette::new(self.colors.clone())
    }
}

impl Default for PaletteSelection {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}
