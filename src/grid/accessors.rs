use super::*;

impl Grid {
    // === Color access ===
    #[inline]
    pub fn color(&self, row: u32, col: u32) -> PackedColor {
        self.colors[self.index(row, col)]
    }

    #[inline]
    pub fn set_color(&mut self, row: u32, col: u32, c: PackedColor) {
        let idx = self.index(row, col);
        self.colors[idx] = c;
    }

    // === Snapshot access ===
    #[inline]
    pub fn snapshot_color(&self, row: u32, col: u32) -> PackedColor {
        self.snapshot[self.index(row, col)]
    }

    // === Active marker ===
    #[inline]
    pub fn is_active(&self, row: u32, col: u32) -> bool {
        self.active[self.index(row, col)] != 0
    }

    #[inline]
    pub fn toggle_active(&mut self, row: u32, col: u32) {
        let idx = self.index(row, col);
        self.active[idx] ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let grid = Grid::new(4);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(2, 3), 11);
        assert_eq!(grid.coords(11), (2, 3));
    }

    #[test]
    fn publish_snapshot_copies_live_colors() {
        let mut grid = Grid::new(2);
        grid.set_color(0, 1, 0xABCDEF);
        assert_eq!(grid.snapshot_color(0, 1), 0);

        grid.publish_snapshot();
        assert_eq!(grid.snapshot_color(0, 1), 0xABCDEF);

        // Later live edits do not leak into the published snapshot.
        grid.set_color(0, 1, 0x123456);
        assert_eq!(grid.snapshot_color(0, 1), 0xABCDEF);
    }

    #[test]
    fn active_marker_toggles() {
        let mut grid = Grid::new(2);
        assert!(!grid.is_active(1, 1));
        grid.toggle_active(1, 1);
        assert!(grid.is_active(1, 1));
        grid.toggle_active(1, 1);
        assert!(!grid.is_active(1, 1));
    }
}
