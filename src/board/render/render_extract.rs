use serde::Serialize;

use crate::domain::color;

use super::BoardCore;

/// One exported cell. Coordinates are derived from position, so
/// `rows[r][c].row == r && rows[r][c].column == c` holds by construction.
#[derive(Serialize)]
struct CellState {
    row: u32,
    column: u32,
    color: String,
    active: bool,
}

/// Repack the live color plane into ABGR pixels for a Canvas ImageData copy.
/// Returns the transfer buffer pointer.
pub(super) fn render_frame(board: &mut BoardCore) -> *const u32 {
    for (dst, src) in board
        .render
        .frame_buffer
        .iter_mut()
        .zip(board.grid.colors.iter())
    {
        *dst = color::to_abgr(*src);
    }
    board.render.frame_buffer.as_ptr()
}

/// Full grid state as JSON rows of cells, the frontend's redraw input.
pub(super) fn cells_json(board: &BoardCore) -> String {
    let size = board.grid.size();
    let mut rows = Vec::with_capacity(size as usize);

    for row in 0..size {
        let mut cells = Vec::with_capacity(size as usize);
        for col in 0..size {
            cells.push(CellState {
                row,
                column: col,
                color: color::to_hex(board.grid.color(row, col)),
                active: board.grid.is_active(row, col),
            });
        }
        rows.push(cells);
    }

    serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
}

/// Active palette as a JSON array of "#RRGGBB" strings (frontend color key).
pub(super) fn palette_json(board: &BoardCore) -> String {
    let hex: Vec<String> = board
        .palette
        .colors()
        .iter()
        .map(|&c| color::to_hex(c))
        .collect();

    serde_json::to_string(&hex).unwrap_or_else(|_| "[]".to_string())
}
