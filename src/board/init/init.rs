use crate::domain::palette::Palette;
use crate::error::EngineError;
use crate::grid::Grid;

use super::{BoardCore, RenderBuffers, DEFAULT_SEED, DEFAULT_SIZE};

pub(super) fn create_board_core(size: u32, seed: u32) -> Result<BoardCore, EngineError> {
    if size == 0 {
        return Err(EngineError::InvalidSize(size));
    }

    let mut board = BoardCore {
        grid: Grid::new(size),
        palette: Palette::from_colors(Vec::new()),
        default_size: DEFAULT_SIZE,
        shift_count: 0,
        last_shift: None,
        rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
        render: RenderBuffers {
            frame_buffer: Vec::new(),
        },
    };

    // Paints the grid, fills the palette and publishes the first snapshot.
    super::commands::populate(&mut board, size);

    Ok(board)
}
