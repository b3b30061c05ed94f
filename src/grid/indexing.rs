use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    #[inline]
    pub fn len(&self) -> usize { self.len }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.size + col) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx as u32) / self.size;
        let col = (idx as u32) % self.size;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size
    }
}
