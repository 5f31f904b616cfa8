use super::direction::Direction;
use crate::consts;

/// A position on the game board.
///
/// Coordinates are signed so that a candidate head position one step past an
/// edge is representable; whether a cell is actually on the board is
/// [`Board::contains`]'s call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i16,
    pub(crate) y: i16,
}

impl Cell {
    pub(crate) const fn new(x: i16, y: i16) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away in the given direction
    pub(crate) fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// The square board the game is played on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    size: i16,
}

impl Board {
    pub(crate) const fn new(size: i16) -> Board {
        Board { size }
    }

    pub(crate) fn size(self) -> i16 {
        self.size
    }

    /// Is the cell within the board's bounds?
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(consts::BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(19, 19), true)]
    #[case(Cell::new(10, 0), true)]
    #[case(Cell::new(-1, 10), false)]
    #[case(Cell::new(20, 10), false)]
    #[case(Cell::new(10, -1), false)]
    #[case(Cell::new(10, 20), false)]
    #[case(Cell::new(-1, -1), false)]
    fn test_contains(#[case] cell: Cell, #[case] contained: bool) {
        assert_eq!(Board::default().contains(cell), contained);
    }

    #[rstest]
    #[case(Direction::North, Cell::new(2, 6))]
    #[case(Direction::South, Cell::new(2, 8))]
    #[case(Direction::East, Cell::new(3, 7))]
    #[case(Direction::West, Cell::new(1, 7))]
    fn test_step(#[case] direction: Direction, #[case] stepped: Cell) {
        assert_eq!(Cell::new(2, 7).step(direction), stepped);
    }

    #[test]
    fn step_past_the_edge_leaves_the_board() {
        let board = Board::default();
        assert!(!board.contains(Cell::new(0, 3).step(Direction::West)));
        assert!(!board.contains(Cell::new(19, 3).step(Direction::East)));
        assert!(!board.contains(Cell::new(3, 0).step(Direction::North)));
        assert!(!board.contains(Cell::new(3, 19).step(Direction::South)));
    }
}
