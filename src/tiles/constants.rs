//! Where everything lives in the sprite sheets.

use super::types::{SpriteRegion, TileGridSpec};
use crate::config::{
    NES_MAP_REGION_FRAME, NES_MAP_REGION_SIZE, NES_WINDOW_SIZE, TILE_SCALING, WINDOW_SIZE,
};
use bevy::math::{IVec2, UVec2};

/// Overworld regions, each surrounded by a 1px frame
pub const OVERWORLD_REGIONS: TileGridSpec = TileGridSpec::new(NES_MAP_REGION_SIZE)
    .with_border(NES_MAP_REGION_FRAME)
    .with_scaling(TILE_SCALING);

/// The four full-screen title frames the background undulates through
pub const TITLE_BACKGROUND: TileGridSpec = TileGridSpec::new(NES_WINDOW_SIZE)
    .with_border(IVec2::new(3, 3))
    .with_offset(IVec2::new(0, 1))
    .with_final_size(WINDOW_SIZE);

/// Waterfall background at [0][0] and the waves at [0][1]
pub const WATERFALL: TileGridSpec = TileGridSpec::new(UVec2::new(32, 59))
    .with_border(IVec2::new(6, 0))
    .with_offset(IVec2::new(340, 513))
    .with_scaling(TILE_SCALING);

/// Spray frames at the top of the waterfall, one per row
pub const WATERFALL_SPRAY: TileGridSpec = TileGridSpec::new(UVec2::new(34, 10))
    .with_offset(IVec2::new(422, 521))
    .with_scaling(TILE_SCALING)
    .with_colorkey(UVec2::ZERO);

pub const WATERFALL_SPRAY_FRAMES: usize = 5;

/// Intro story and treasure list, as one tall image
pub const INTRO_TEXT: TileGridSpec = TileGridSpec::new(UVec2::new(252, 960))
    .with_offset(IVec2::new(523, 14))
    .with_scaling(TILE_SCALING)
    .with_colorkey(UVec2::ZERO);

/// Background shared by the file select, registration and elimination menus
pub const MENU_BACKGROUND: TileGridSpec = TileGridSpec::new(NES_WINDOW_SIZE)
    .with_offset(IVec2::new(3, 504))
    .with_final_size(WINDOW_SIZE);

/// Red heart at [0][0] and pink heart at [0][1]
pub const HEARTS: TileGridSpec = TileGridSpec::new(UVec2::new(8, 8))
    .with_border(IVec2::new(1, 1))
    .with_offset(IVec2::new(269, 733))
    .with_scaling(TILE_SCALING)
    .with_colorkey(UVec2::ZERO);

pub const PINK_HEART: (usize, usize) = (0, 1);

// Player step frames, two per facing direction. The sheet only has
// right-facing frames; left-facing ones are flipped copies.
pub const PLAYER_DOWN_FRAMES: [SpriteRegion; 2] =
    [SpriteRegion::new(1, 11, 15, 16), SpriteRegion::new(18, 11, 15, 16)];
pub const PLAYER_UP_FRAMES: [SpriteRegion; 2] =
    [SpriteRegion::new(69, 11, 14, 16), SpriteRegion::new(86, 11, 14, 16)];
pub const PLAYER_RIGHT_FRAMES: [SpriteRegion; 2] =
    [SpriteRegion::new(35, 11, 16, 16), SpriteRegion::new(52, 12, 15, 15)];
