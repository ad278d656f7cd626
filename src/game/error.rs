use thiserror::Error;

use super::state::Position;

/// Broken engine invariants and rejected configuration.
///
/// Game over is not an error; it is reported through the fail flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("no free cell left for food")]
    GridFull,
    #[error("start position {0} lies outside the grid")]
    StartOutOfBounds(Position),
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}
