use super::action::Direction;
use super::state::Snake;

/// Advance the snake one cell.
///
/// The head moves in `direction` and every other segment takes the place of
/// the one ahead of it. With `grow` the pre-move tail is kept as an extra
/// segment. No bounds checking happens here.
pub fn move_snake(snake: &Snake, direction: Direction, grow: bool) -> Snake {
    let old = snake.segments();
    let mut moved = Snake::new(snake.head().moved_in_direction(direction));
    for &segment in &old[..old.len() - 1] {
        moved.push_tail(segment);
    }

    if grow {
        moved.push_tail(snake.tail());
    }

    moved
}
