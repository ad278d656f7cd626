use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use super::{
    action::Direction,
    collision::detect_collision,
    config::GameConfig,
    error::GameError,
    food::place_food,
    movement::move_snake,
    state::{CollisionType, GameState, Phase, Position, Snapshot},
};

/// What the movement part of a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The run has failed; nothing moves until reset
    Frozen,
    /// No direction has been chosen yet
    Idle,
    /// The snake advanced one cell
    Moved {
        ate_food: bool,
        collision: Option<CollisionType>,
    },
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Food placed at the start of this tick, if the board had none
    pub food_placed: Option<Position>,
    pub step: Step,
}

impl TickOutcome {
    /// True if this tick ended the run
    pub fn ended_run(&self) -> bool {
        matches!(
            self.step,
            Step::Moved {
                collision: Some(_),
                ..
            }
        )
    }
}

/// Owns the session state and drives it one tick at a time
///
/// All mutation goes through `&mut self`, so input and timer handlers can
/// never interleave.
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an explicit random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(config.start);
        Self { config, rng, state }
    }

    /// Set the direction for the next tick. Ignored once the run has failed.
    ///
    /// Reversals are not filtered; turning back onto the neck is reported as
    /// a self-collision by the following tick.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.failed {
            return false;
        }
        self.state.direction = Some(direction);
        true
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        let mut food_placed = None;
        if self.state.food.is_none() {
            let food = place_food(&self.state.snake, &mut self.rng)?;
            debug!(%food, "placed food");
            self.state.food = Some(food);
            food_placed = Some(food);
        }

        if self.state.failed {
            return Ok(TickOutcome {
                food_placed,
                step: Step::Frozen,
            });
        }

        let Some(direction) = self.state.direction else {
            return Ok(TickOutcome {
                food_placed,
                step: Step::Idle,
            });
        };

        // Eating is decided against the head before it moves.
        let ate_food = self.state.food == Some(self.state.snake.head());
        self.state.snake = move_snake(&self.state.snake, direction, ate_food);
        self.state.steps += 1;

        if ate_food {
            self.state.score += 1;
            self.state.food = None;
            debug!(score = self.state.score, length = self.state.snake.len(), "ate food");
        }

        let collision = detect_collision(&self.state.snake);
        if let Some(kind) = collision {
            self.state.failed = true;
            debug!(
                ?kind,
                head = %self.state.snake.head(),
                score = self.state.score,
                "run failed"
            );
        }

        Ok(TickOutcome {
            food_placed,
            step: Step::Moved {
                ate_food,
                collision,
            },
        })
    }

    /// Start a new run and return the score of the one being discarded
    pub fn reset(&mut self) -> u32 {
        let final_score = self.state.score;
        self.state = GameState::new(self.config.start);
        debug!(final_score, "reset");
        final_score
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the session state wholesale to set up a scenario
    #[cfg(test)]
    pub(crate) fn load_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_failed(&self) -> bool {
        self.state.failed
    }
}
