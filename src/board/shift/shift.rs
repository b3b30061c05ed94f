use crate::domain::direction::Direction;

use super::BoardCore;

/// Scroll the color field one step toward `direction`, toroidally.
///
/// Every cell takes the snapshot color of its neighbor one step opposite the
/// direction, wrapping at the edges, so the whole pattern appears to flow in
/// the named direction and re-enter on the far side. All N² cells read the
/// pre-shift snapshot; the write-back cannot feed itself.
pub(super) fn shift(board: &mut BoardCore, direction: Direction) {
    let size = board.grid.size();
    let last = size - 1;

    for row in 0..size {
        for col in 0..size {
            let (src_row, src_col) = match direction {
                Direction::Right => (row, if col == 0 { last } else { col - 1 }),
                Direction::Left => (row, if col == last { 0 } else { col + 1 }),
                Direction::Up => (if row == last { 0 } else { row + 1 }, col),
                Direction::Down => (if row == 0 { last } else { row - 1 }, col),
            };
            let color = board.grid.snapshot_color(src_row, src_col);
            board.grid.set_color(row, col, color);
        }
    }

    board.grid.publish_snapshot();
    board.shift_count += 1;
    board.last_shift = Some(direction);
}
