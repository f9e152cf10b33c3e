//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Width & height of the playing field, in cells
pub(crate) const TILE_COUNT: u16 = 20;

/// Snake length at spawn, in cells
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Number of lives at the start of a game
pub(crate) const STARTING_LIVES: u32 = 3;

/// Points awarded for eating one piece of food
pub(crate) const FOOD_SCORE: u32 = 10;

/// Maximum number of entries kept on the leaderboard
pub(crate) const LEADERBOARD_CAPACITY: usize = 10;

/// Player name used when none has been saved
pub(crate) const DEFAULT_USERNAME: &str = "Player";

/// Maximum length of a player name, in characters
pub(crate) const MAX_USERNAME_LEN: usize = 16;

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

/// Glyph for the snake's head on the tick it collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Glyph for a remaining life
pub(crate) const HEART_SYMBOL: char = '♥';

/// Glyph for a lost life
pub(crate) const LOST_HEART_SYMBOL: char = '♡';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new()
    .fg(Color::LightMagenta)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightBlue);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for remaining lives in the status bar
pub(crate) const HEART_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the currently-selected item on the start screen
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for warnings shown on the start screen
pub(crate) const WARNING_STYLE: Style = Style::new().fg(Color::LightRed);
