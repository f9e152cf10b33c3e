use super::grid::Bounds;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step leaves `bounds` (i.e. the snake hit a wall).  Positions are
    /// never clamped to the edge.
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let Position { x, y } = pos;
        let stepped = match self {
            Direction::North => Position::new(x, y.checked_sub(1)?),
            Direction::East => Position::new(x.checked_add(1)?, y),
            Direction::South => Position::new(x, y.checked_add(1)?),
            Direction::West => Position::new(x.checked_sub(1)?, y),
        };
        bounds.contains(stepped).then_some(stepped)
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BOUNDS: Bounds = Bounds::square(20);

    #[rstest]
    #[case(Direction::North, Position::new(5, 7), Some(Position::new(5, 6)))]
    #[case(Direction::South, Position::new(5, 7), Some(Position::new(5, 8)))]
    #[case(Direction::East, Position::new(5, 7), Some(Position::new(6, 7)))]
    #[case(Direction::West, Position::new(5, 7), Some(Position::new(4, 7)))]
    #[case(Direction::North, Position::new(5, 0), None)]
    #[case(Direction::South, Position::new(5, 19), None)]
    #[case(Direction::East, Position::new(19, 7), None)]
    #[case(Direction::West, Position::new(0, 7), None)]
    fn advance(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        assert_eq!(d.advance(pos, BOUNDS), r);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::East, Direction::West)]
    #[case(Direction::South, Direction::North)]
    #[case(Direction::West, Direction::East)]
    fn reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
