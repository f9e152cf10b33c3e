use ratatui::layout::{Position, Positions, Rect, Size};

/// The fixed square coordinate space the game is played on.  Cell coordinates
/// run from `(0, 0)` in the top-left corner to `(side - 1, side - 1)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Bounds {
    pub(super) width: u16,
    pub(super) height: u16,
}

impl Bounds {
    pub(super) const fn square(side: u16) -> Bounds {
        Bounds {
            width: side,
            height: side,
        }
    }

    pub(super) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell at which the snake's head is placed on spawn
    pub(super) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), true)]
    #[case(Position::new(19, 19), true)]
    #[case(Position::new(10, 0), true)]
    #[case(Position::new(20, 10), false)]
    #[case(Position::new(10, 20), false)]
    #[case(Position::new(20, 20), false)]
    fn contains(#[case] pos: Position, #[case] inside: bool) {
        assert_eq!(Bounds::square(20).contains(pos), inside);
    }

    #[test]
    fn center() {
        assert_eq!(Bounds::square(20).center(), Position::new(10, 10));
    }

    #[test]
    fn positions_count() {
        assert_eq!(Bounds::square(20).positions().count(), 400);
    }
}
