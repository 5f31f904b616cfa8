use super::direction::Direction;
use super::grid::Cell;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// The body is an ordered sequence of distinct cells, head at the front.  It
/// always has at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells of the snake's body, head first
    pub(super) cells: VecDeque<Cell>,

    /// The direction the snake moved in on the last tick (or starts out
    /// moving in)
    pub(super) heading: Direction,

    /// A turn accepted since the last tick, to take effect on the next one
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create a one-cell snake at `head` moving in `heading`
    pub(super) fn new(head: Cell, heading: Direction) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            heading,
            pending: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Cell {
        *self.cells.front().expect("snake body is never empty")
    }

    /// Return the positions of all of the snake's cells, head first
    pub(super) fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    /// Is the cell currently occupied by any part of the snake?
    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Ask the snake to turn.  The turn is ignored if `direction` lies along
    /// the axis the snake last moved along; otherwise it replaces any turn
    /// already requested since the last tick.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction.axis() != self.heading.axis() {
            self.pending = Some(direction);
        }
    }

    /// Apply any pending turn and return the heading the next step will use
    pub(super) fn commit_heading(&mut self) -> Direction {
        if let Some(direction) = self.pending.take() {
            self.heading = direction;
        }
        self.heading
    }

    /// Move the head to `head`, keeping the tail in place if `grow` is true
    /// and dragging it forward otherwise.  With a one-cell snake and no
    /// growth, this simply relocates the snake.
    pub(super) fn advance(&mut self, head: Cell, grow: bool) {
        self.cells.push_front(head);
        if !grow {
            let _ = self.cells.pop_back();
        }
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_cell_advance_relocates() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::South);
        snake.advance(Cell::new(10, 11), false);
        assert_eq!(snake.cells(), &VecDeque::from([Cell::new(10, 11)]));
    }

    #[test]
    fn growing_advance_keeps_tail() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::South);
        snake.advance(Cell::new(10, 11), true);
        assert_eq!(
            snake.cells(),
            &VecDeque::from([Cell::new(10, 11), Cell::new(10, 10)])
        );
        assert_eq!(snake.head(), Cell::new(10, 11));
    }

    #[test]
    fn turn_onto_same_axis_is_ignored() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::East);
        snake.turn(Direction::West);
        assert_eq!(snake.pending, None);
        snake.turn(Direction::East);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.commit_heading(), Direction::East);
    }

    #[test]
    fn turn_onto_other_axis_takes_effect_on_commit() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::East);
        snake.turn(Direction::North);
        assert_eq!(snake.heading, Direction::East);
        assert_eq!(snake.commit_heading(), Direction::North);
        assert_eq!(snake.heading, Direction::North);
    }

    #[test]
    fn last_valid_turn_wins() {
        let mut snake = Snake::new(Cell::new(10, 10), Direction::East);
        snake.turn(Direction::North);
        snake.turn(Direction::South);
        // Filtering is against the heading in effect, not the pending turn:
        snake.turn(Direction::West);
        assert_eq!(snake.commit_heading(), Direction::South);
    }

    #[test]
    fn contains_covers_the_whole_body() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::East);
        snake.advance(Cell::new(6, 5), true);
        snake.advance(Cell::new(7, 5), true);
        assert!(snake.contains(Cell::new(5, 5)));
        assert!(snake.contains(Cell::new(6, 5)));
        assert!(snake.contains(Cell::new(7, 5)));
        assert!(!snake.contains(Cell::new(8, 5)));
    }
}
