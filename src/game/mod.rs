//! Core simulation for grid snake
//!
//! Pure pieces (grid, movement, food placement, collision) are composed by
//! [`GameEngine`], which owns the only mutable state. Nothing here performs
//! I/O or rendering.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod movement;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use collision::{detect_collision, is_terminal};
pub use config::GameConfig;
pub use engine::{GameEngine, Step, TickOutcome};
pub use error::GameError;
pub use food::place_food;
pub use grid::{GRID_SIZE, all_cells};
pub use movement::move_snake;
pub use state::{CellId, CollisionType, GameState, Phase, Position, Snake, Snapshot};
