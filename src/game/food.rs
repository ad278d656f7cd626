use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GameError;
use super::grid;
use super::state::{CellId, Position, Snake};

/// Pick a free cell uniformly at random.
///
/// Fails with [`GameError::GridFull`] when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Result<Position, GameError> {
    let occupied: HashSet<CellId> = snake.segments().iter().map(Position::id).collect();
    let candidates: Vec<Position> = grid::all_cells()
        .iter()
        .copied()
        .filter(|cell| !occupied.contains(&cell.id()))
        .collect();

    candidates.choose(rng).copied().ok_or(GameError::GridFull)
}
