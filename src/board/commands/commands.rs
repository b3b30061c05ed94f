use crate::domain::color::PackedColor;
use crate::error::EngineError;
use crate::grid::Grid;

use super::{random, BoardCore};

pub(super) fn create(board: &mut BoardCore, size: u32) -> Result<(), EngineError> {
    if size == 0 {
        return Err(EngineError::InvalidSize(size));
    }
    populate(board, size);
    Ok(())
}

pub(super) fn reset(board: &mut BoardCore, hard: bool) {
    // Only restore the default side length on a hard reset.
    let size = if hard { board.default_size } else { board.grid.size() };
    populate(board, size);
}

/// Rebuild the board at `size`: fresh palette, every cell a uniform random
/// pool color, snapshot published. `size` must already be validated.
pub(super) fn populate(board: &mut BoardCore, size: u32) {
    board.palette = random::generate_palette(&mut board.rng_state);

    let mut grid = Grid::new(size);
    for idx in 0..grid.len() {
        grid.colors[idx] = random::pick(&board.palette, &mut board.rng_state);
    }
    grid.publish_snapshot();

    board.render.frame_buffer = vec![0; grid.len()];
    board.grid = grid;
    board.shift_count = 0;
    board.last_shift = None;
}

pub(super) fn paint(
    board: &mut BoardCore,
    row: u32,
    col: u32,
    color: PackedColor,
) -> Result<(), EngineError> {
    if !board.grid.in_bounds(row, col) {
        return Err(EngineError::OutOfBounds {
            row,
            col,
            size: board.grid.size(),
        });
    }

    // Painting a cell with its own color randomizes it instead.
    if board.grid.color(row, col) == color {
        let next = random::pick(&board.palette, &mut board.rng_state);
        board.grid.set_color(row, col, next);
    } else {
        board.grid.set_color(row, col, color);
    }

    board.grid.toggle_active(row, col);

    // The snapshot is deliberately left stale: the next shift computes from
    // pre-paint colors, so a paint never propagates through a shift.
    Ok(())
}
