use thiserror::Error;

/// Recoverable engine errors, surfaced to the frontend as messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid board size {0}: must be at least 1")]
    InvalidSize(u32),

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u32, col: u32, size: u32 },
}
