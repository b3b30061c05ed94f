//! The active color pool.
//!
//! Every create/reset draws a fresh pool of [`PALETTE_SIZE`] random colors;
//! cell colors (and paint's click-to-randomize picks) come from this pool
//! until the next reset.

use super::color::PackedColor;

/// Pool size, matching the default board side.
pub const PALETTE_SIZE: usize = 50;

pub struct Palette {
    colors: Vec<PackedColor>,
}

impl Palette {
    pub fn from_colors(colors: Vec<PackedColor>) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> PackedColor {
        self.colors[idx]
    }

    pub fn contains(&self, color: PackedColor) -> bool {
        self.colors.contains(&color)
    }

    pub fn colors(&self) -> &[PackedColor] {
        &self.colors
    }
}
