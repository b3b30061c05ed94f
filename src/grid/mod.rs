//! Grid - Structure of Arrays for the color planes
//!
//! Instead of: Vec<Vec<Cell>>      // Bad: nested allocations, poor cache
//! We have:    colors[], snapshot[], active[]  // Good: linear memory
//!
//! `colors` is the live state, `snapshot` the state as of the last completed
//! create/shift (the read basis for the next shift), `active` a purely
//! presentational marker toggled by paint.

use crate::domain::color::PackedColor;

mod indexing;
mod accessors;

/// SoA grid - one square board, all planes row-major
pub struct Grid {
    size: u32,
    len: usize,

    pub colors: Vec<PackedColor>,
    pub snapshot: Vec<PackedColor>,
    pub active: Vec<u8>, // 0 = normal, 1 = marked by paint
}

impl Grid {
    /// Allocate an all-black size×size board. Callers populate the colors
    /// and publish the first snapshot before the grid becomes visible.
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            len,
            colors: vec![0; len],
            snapshot: vec![0; len],
            active: vec![0; len],
        }
    }

    /// Replace the snapshot with a copy of the live colors.
    ///
    /// Runs after create/reset and after every completed shift - never
    /// mid-shift, so a shift always reads fully pre-shift state.
    pub fn publish_snapshot(&mut self) {
        self.snapshot.copy_from_slice(&self.colors);
    }
}
