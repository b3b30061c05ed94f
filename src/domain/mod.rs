//! Domain vocabulary: packed colors, the random palette and directions.

pub mod color;
pub mod direction;
pub mod palette;
