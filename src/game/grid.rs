//! The fixed playing field.

use std::sync::OnceLock;

use super::state::Position;

/// Number of rows and columns on the grid
pub const GRID_SIZE: i32 = 16;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

static CELLS: OnceLock<Vec<Position>> = OnceLock::new();

/// Every grid cell in row-major order, built on first use and shared afterwards
pub fn all_cells() -> &'static [Position] {
    CELLS.get_or_init(|| {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
            .collect()
    })
}

/// Check if a position is within the grid bounds
pub fn contains(pos: Position) -> bool {
    (0..GRID_SIZE).contains(&pos.row) && (0..GRID_SIZE).contains(&pos.col)
}
