//! Palette sources: colors, packed palettes, the swatch table and the
//! picker selection.

mod color;
mod list;
mod selection;
mod swatch;

pub use color::*;
pub use list::*;
pub use selection::*;
pub use swatch::*;
