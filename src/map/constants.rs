use crate::config::{MAP_SIZE, MAP_UPPER_LEFT};
use crate::screen::ScreenRect;

/// Map area on screen, below the scoreboard
pub const MAP_WINDOW: ScreenRect = ScreenRect::new(
    MAP_UPPER_LEFT.x,
    MAP_UPPER_LEFT.y,
    MAP_SIZE.x as i32,
    MAP_SIZE.y as i32,
);

// Z-positions for each layer
pub const MAP_Z: f32 = 0.0;
pub const PLAYER_Z: f32 = 1.0;
