use super::direction::Direction;
use super::grid::Bounds;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are cell coordinates relative to the top-left corner of the
/// playing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first.  All cells are distinct
    /// while the snake is alive.
    pub(super) cells: VecDeque<Position>,

    /// The direction in which the snake is travelling.  `None` until the
    /// player makes their first move of a life.
    pub(super) direction: Option<Direction>,
}

impl Snake {
    /// Create a snake in its spawn layout: the head at the center of `bounds`
    /// with [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] cells
    /// extending to the west of it, not yet moving.
    pub(super) fn spawn(bounds: Bounds) -> Snake {
        let head = bounds.center();
        let cells = (0..consts::INITIAL_SNAKE_LENGTH as u16)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Snake {
            cells,
            direction: None,
        }
    }

    pub(super) fn head(&self) -> Position {
        *self.cells.front().expect("snake should never be empty")
    }

    pub(super) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub(super) fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction.unwrap_or(Direction::East) {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Change the snake's direction of travel.  A turn into the exact reverse
    /// of the current direction is dropped, as it would drive the head
    /// straight into the neck.  Returns whether the turn was accepted.
    pub(super) fn steer(&mut self, direction: Direction) -> bool {
        if self
            .direction
            .is_some_and(|current| current.reverse() == direction)
        {
            return false;
        }
        self.direction = Some(direction);
        true
    }

    /// Commit a move to `head`, already validated by the caller.  If `grow`
    /// is true the tail is kept, lengthening the snake by one cell.
    pub(super) fn advance(&mut self, head: Position, grow: bool) {
        self.cells.push_front(head);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::square(20);

    #[test]
    fn spawn_layout() {
        let snake = Snake::spawn(BOUNDS);
        assert_eq!(
            snake.cells().iter().copied().collect::<Vec<_>>(),
            vec![
                Position::new(10, 10),
                Position::new(9, 10),
                Position::new(8, 10),
            ]
        );
        assert_eq!(snake.head(), Position::new(10, 10));
        assert_eq!(snake.direction(), None);
    }

    #[test]
    fn first_steer_always_accepted() {
        let mut snake = Snake::spawn(BOUNDS);
        assert!(snake.steer(Direction::West));
        assert_eq!(snake.direction(), Some(Direction::West));
    }

    #[test]
    fn steer_reverse_dropped() {
        let mut snake = Snake::spawn(BOUNDS);
        assert!(snake.steer(Direction::East));
        assert!(!snake.steer(Direction::West));
        assert_eq!(snake.direction(), Some(Direction::East));
    }

    #[test]
    fn steer_turn_accepted() {
        let mut snake = Snake::spawn(BOUNDS);
        assert!(snake.steer(Direction::East));
        assert!(snake.steer(Direction::North));
        assert_eq!(snake.direction(), Some(Direction::North));
    }

    #[test]
    fn advance_without_growth() {
        let mut snake = Snake::spawn(BOUNDS);
        snake.advance(Position::new(11, 10), false);
        assert_eq!(
            snake.cells().iter().copied().collect::<Vec<_>>(),
            vec![
                Position::new(11, 10),
                Position::new(10, 10),
                Position::new(9, 10),
            ]
        );
    }

    #[test]
    fn advance_with_growth() {
        let mut snake = Snake::spawn(BOUNDS);
        snake.advance(Position::new(11, 10), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(11, 10));
        assert!(snake.contains(Position::new(8, 10)));
    }
}
