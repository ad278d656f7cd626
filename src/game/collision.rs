use super::grid;
use super::state::{CollisionType, Snake};

/// Inspect an already-moved snake for the reason its run should end
pub fn detect_collision(snake: &Snake) -> Option<CollisionType> {
    let head = snake.head();

    if !grid::contains(head) {
        return Some(CollisionType::Wall);
    }

    let head_id = head.id();
    if snake.body_segments().iter().any(|segment| segment.id() == head_id) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True when the head is off the grid or on its own body
pub fn is_terminal(snake: &Snake) -> bool {
    detect_collision(snake).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Position;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(r, c)| Position::new(r, c)).collect()).unwrap()
    }

    #[test]
    fn test_in_bounds_distinct_is_alive() {
        assert!(!is_terminal(&snake(&[(7, 7)])));
        assert!(!is_terminal(&snake(&[(0, 0), (0, 1), (1, 1)])));
        assert!(!is_terminal(&snake(&[(15, 15), (15, 14), (14, 14), (14, 15)])));
    }

    #[test]
    fn test_wall_collision() {
        for head in [(-1, 5), (16, 5), (5, -1), (5, 16)] {
            let s = snake(&[head]);
            assert_eq!(detect_collision(&s), Some(CollisionType::Wall), "{head:?}");
        }
    }

    #[test]
    fn test_self_overlap_is_terminal_without_moving() {
        let s = snake(&[(5, 5), (5, 6), (5, 5)]);
        assert!(is_terminal(&s));
        assert_eq!(detect_collision(&s), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_body_overlap_behind_head_is_ignored() {
        // Only the head is checked against the rest of the body.
        let s = snake(&[(5, 5), (5, 6), (5, 7), (5, 6)]);
        assert!(!is_terminal(&s));
    }

    #[test]
    fn test_wall_reported_before_self() {
        let s = snake(&[(-1, 0), (-1, 0)]);
        assert_eq!(detect_collision(&s), Some(CollisionType::Wall));
    }
}
