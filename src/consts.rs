//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Direction};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width & height of the (square) game board, in cells
pub(crate) const BOARD_SIZE: i16 = 20;

/// Cell on which the snake's head starts
pub(crate) const INITIAL_HEAD: Cell = Cell::new(10, 10);

/// Direction in which the snake starts out moving
pub(crate) const INITIAL_HEADING: Direction = Direction::South;

/// Cell on which the food starts
pub(crate) const INITIAL_FOOD: Cell = Cell::new(5, 5);

/// Tick interval at score zero, in milliseconds
pub(crate) const BASE_TICK_MS: u64 = 250;

/// How much the tick interval shrinks per point scored, in milliseconds
pub(crate) const TICK_STEP_MS: u64 = 5;

/// Smallest tick interval the speed curve may reach, in milliseconds
pub(crate) const TICK_FLOOR_MS: u64 = 50;

/// Key under which the high score is stored in the scores file
pub(crate) const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "New High Score!" notice on the game-over line
pub(crate) const NEW_BEST_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
