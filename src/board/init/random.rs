use crate::domain::color::PackedColor;
use crate::domain::palette::{Palette, PALETTE_SIZE};

/// Random number generator (xorshift32). State must be nonzero.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// One color built from six uniform hex digits, packed as 0x00RRGGBB.
pub(super) fn random_color(state: &mut u32) -> PackedColor {
    let mut color = 0u32;
    for _ in 0..6 {
        color = (color << 4) | (xorshift32(state) & 0xF);
    }
    color
}

/// Fresh pool of PALETTE_SIZE random colors.
pub(super) fn generate_palette(state: &mut u32) -> Palette {
    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    for _ in 0..PALETTE_SIZE {
        colors.push(random_color(state));
    }
    Palette::from_colors(colors)
}

/// Uniform pick from the pool.
pub(super) fn pick(palette: &Palette, state: &mut u32) -> PackedColor {
    let idx = (xorshift32(state) as usize) % palette.len();
    palette.get(idx)
}
