use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::GameError;

/// A cell coordinate. Values outside the grid are legal until the terminal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// Canonical identity of a position, used for set membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(i64);

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    /// Two positions share an id exactly when they are equal.
    pub fn id(&self) -> CellId {
        CellId(((self.row as i64) << 32) | (self.col as u32 as i64))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// The snake, head at index 0 and tail last. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>) -> Result<Self, GameError> {
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Segments behind the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake always has a head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Snake {
    /// Append a segment behind the current tail
    pub(super) fn push_tail(&mut self, pos: Position) {
        self.body.push(pos);
    }
}

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head landed on its own body
    SelfCollision,
}

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Failed,
}

/// Mutable session state owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction used by the next tick; `None` until the first input
    pub direction: Option<Direction>,
    pub food: Option<Position>,
    pub score: u32,
    pub steps: u32,
    pub failed: bool,
}

impl GameState {
    /// Fresh run: one segment at `start`, idle, no food yet
    pub fn new(start: Position) -> Self {
        Self {
            snake: Snake::new(start),
            direction: None,
            food: None,
            score: 0,
            steps: 0,
            failed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.failed {
            Phase::Failed
        } else {
            Phase::Running
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().to_vec(),
            food: self.food,
            score: self.score,
            steps: self.steps,
            failed: self.failed,
        }
    }
}

/// Read-only copy of the state for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub steps: u32,
    pub failed: bool,
}

impl Snapshot {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}
