//! Shift directions and their u8 codes on the JS boundary.

pub const DIR_UP: u8 = 0;
pub const DIR_DOWN: u8 = 1;
pub const DIR_LEFT: u8 = 2;
pub const DIR_RIGHT: u8 = 3;

/// The four cardinal shift directions. Closed enumeration: anything else
/// arriving over the boundary is a no-op upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            DIR_UP => Some(Direction::Up),
            DIR_DOWN => Some(Direction::Down),
            DIR_LEFT => Some(Direction::Left),
            DIR_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Direction::Up => DIR_UP,
            Direction::Down => DIR_DOWN,
            Direction::Left => DIR_LEFT,
            Direction::Right => DIR_RIGHT,
        }
    }
}
