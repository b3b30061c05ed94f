use mosaic_engine::board::BoardCore;
use mosaic_engine::domain::direction::Direction;
use mosaic_engine::domain::palette::PALETTE_SIZE;

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

#[test]
fn cells_json_smoke_exports_full_grid_state() {
    let board = BoardCore::with_seed(6, 42).expect("6 is a valid size");

    let rows: serde_json::Value =
        serde_json::from_str(&board.cells_json()).expect("cells_json should parse");
    let rows = rows.as_array().expect("top level is an array of rows");
    assert_eq!(rows.len(), 6);

    for (r, row) in rows.iter().enumerate() {
        let cells = row.as_array().expect("each row is an array of cells");
        assert_eq!(cells.len(), 6);

        for (c, cell) in cells.iter().enumerate() {
            assert_eq!(cell["row"].as_u64(), Some(r as u64));
            assert_eq!(cell["column"].as_u64(), Some(c as u64));
            assert_eq!(cell["active"].as_bool(), Some(false));

            let color = cell["color"].as_str().expect("color is a string");
            assert!(is_hex_color(color), "bad color literal {color}");
            assert_eq!(board.color_hex(r as u32, c as u32).as_deref(), Some(color));
        }
    }
}

#[test]
fn palette_json_smoke_exports_hex_pool() {
    let board = BoardCore::with_seed(4, 42).expect("4 is a valid size");

    let pool: Vec<String> =
        serde_json::from_str(&board.palette_json()).expect("palette_json should parse");

    assert_eq!(pool.len(), PALETTE_SIZE);
    assert!(pool.iter().all(|c| is_hex_color(c)));
}

#[test]
fn public_surface_shift_moves_edge_colors_across() {
    let mut board = BoardCore::with_seed(5, 99).expect("5 is a valid size");

    let wrapped: Vec<Option<String>> = (0..5).map(|r| board.color_hex(r, 4)).collect();

    board.shift(Direction::Right);

    for (r, expected) in wrapped.into_iter().enumerate() {
        assert_eq!(board.color_hex(r as u32, 0), expected);
    }
    assert_eq!(board.shift_count(), 1);
    assert_eq!(board.last_shift(), Some(Direction::Right));

    // Snapshot republished: it now mirrors the shifted live state.
    for r in 0..5 {
        for c in 0..5 {
            assert_eq!(board.snapshot_hex(r, c), board.color_hex(r, c));
        }
    }
}

#[test]
fn out_of_range_reads_are_none() {
    let board = BoardCore::with_seed(3, 7).expect("3 is a valid size");

    assert!(board.color_hex(2, 2).is_some());
    assert_eq!(board.color_hex(3, 0), None);
    assert_eq!(board.snapshot_hex(0, 3), None);
}
