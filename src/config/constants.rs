use bevy::math::{IVec2, UVec2, Vec2};
use std::time::Duration;

/// Original NES screen resolution
pub const NES_WINDOW_SIZE: UVec2 = UVec2::new(256, 240);

/// Original Zelda tile size
pub const NES_TILE_SIZE: UVec2 = UVec2::new(16, 16);

/// Total game window size, in tiles
pub const WINDOW_SIZE_IN_TILES: UVec2 = UVec2::new(16, 15);

/// Size, in pixels, of each tile in the game
pub const TILE_SIZE: UVec2 = UVec2::new(48, 48);

/// Integer factor between NES pixels and game pixels
pub const NES_SCALE_FACTOR: i32 = 3;

/// Amount (x, y) each tile is scaled by when loaded
pub const TILE_SCALING: Vec2 = Vec2::new(
    TILE_SIZE.x as f32 / NES_TILE_SIZE.x as f32,
    TILE_SIZE.y as f32 / NES_TILE_SIZE.y as f32,
);

/// Total window size, in pixels (768x720)
pub const WINDOW_SIZE: UVec2 = UVec2::new(
    TILE_SIZE.x * WINDOW_SIZE_IN_TILES.x,
    TILE_SIZE.y * WINDOW_SIZE_IN_TILES.y,
);

pub const WINDOW_TITLE: &str = "The Legend of Zelda";

/// Upper left corner of the map area, leaving four rows for the scoreboard
pub const MAP_UPPER_LEFT: IVec2 = IVec2::new(0, TILE_SIZE.y as i32 * 4);

/// Size of one overworld region on the NES (16x11 tiles)
pub const NES_MAP_REGION_SIZE: UVec2 = UVec2::new(256, 176);

/// Width of the frame drawn around every region in the overworld sheet
pub const NES_MAP_REGION_FRAME: IVec2 = IVec2::new(1, 1);

/// Size of the map area on screen (768x528)
pub const MAP_SIZE: UVec2 = UVec2::new(
    NES_MAP_REGION_SIZE.x * NES_SCALE_FACTOR as u32,
    NES_MAP_REGION_SIZE.y * NES_SCALE_FACTOR as u32,
);

/// Region the player starts in
pub const START_REGION: IVec2 = IVec2::new(7, 7);

// Player movement, in screen pixels per move tick
pub const PLAYER_STEP_PIXELS: i32 = 4 * NES_SCALE_FACTOR;
pub const PLAYER_MOVE_LEFT_VELOCITY: IVec2 = IVec2::new(-PLAYER_STEP_PIXELS, 0);
pub const PLAYER_MOVE_RIGHT_VELOCITY: IVec2 = IVec2::new(PLAYER_STEP_PIXELS, 0);
pub const PLAYER_MOVE_UP_VELOCITY: IVec2 = IVec2::new(0, -PLAYER_STEP_PIXELS);
pub const PLAYER_MOVE_DOWN_VELOCITY: IVec2 = IVec2::new(0, PLAYER_STEP_PIXELS);
pub const PLAYER_STOPPED_VELOCITY: IVec2 = IVec2::ZERO;

/// Interval between player move ticks
pub const PLAYER_MOVE_INTERVAL: Duration = Duration::from_millis(80);

/// Number of save slots shown on the menus
pub const SAVE_SLOT_COUNT: usize = 3;

// Asset file names, relative to the asset directory
pub const OVERWORLD_SHEET: &str = "NES-TheLegendofZelda-Overworld.png";
pub const PLAYER_SHEET: &str = "NES-TheLegendofZelda-Link.png";
pub const INTRO_SHEET: &str = "NES-TheLegendofZelda-IntroAndFileSelect.png";
