use super::{Direction, FrameSizes, Player, Step};
use crate::config::{GameConfig, PLAYER_SHEET, TILE_SCALING};
use crate::map::{MAP_WINDOW, PLAYER_Z};
use crate::screen::{blit, to_bevy_image};
use crate::state::AppState;
use crate::tiles::{
    extract_sprite, load_sheet, SpriteRegion, TileError, PLAYER_DOWN_FRAMES, PLAYER_RIGHT_FRAMES,
    PLAYER_UP_FRAMES,
};
use bevy::prelude::*;
use image::RgbaImage;

/// Decoded step frames indexed by `[Direction::index()][Step::index()]`
pub type PlayerFrames = [[RgbaImage; 2]; 4];

/// Marker for the player's sprite entity
#[derive(Component)]
pub struct PlayerSprite;

/// Uploaded step frames for every facing direction
#[derive(Resource)]
pub struct PlayerSprites {
    frames: [[Handle<Image>; 2]; 4],
}

impl PlayerSprites {
    pub fn frame(&self, direction: Direction, step: Step) -> &Handle<Image> {
        &self.frames[direction.index()][step.index()]
    }
}

/// Cut the player's step frames out of the sheet.
///
/// The sheet only has right-facing frames, so the left-facing ones are
/// mirrored copies.
pub fn load_player_frames(sheet: &RgbaImage) -> Result<PlayerFrames, TileError> {
    Ok([
        frame_pair(sheet, PLAYER_UP_FRAMES, false)?,
        frame_pair(sheet, PLAYER_DOWN_FRAMES, false)?,
        frame_pair(sheet, PLAYER_RIGHT_FRAMES, true)?,
        frame_pair(sheet, PLAYER_RIGHT_FRAMES, false)?,
    ])
}

fn frame_pair(
    sheet: &RgbaImage,
    regions: [SpriteRegion; 2],
    flip: bool,
) -> Result<[RgbaImage; 2], TileError> {
    let colorkey = Some(UVec2::ZERO);
    Ok([
        extract_sprite(sheet, regions[0], TILE_SCALING, colorkey, flip)?,
        extract_sprite(sheet, regions[1], TILE_SCALING, colorkey, flip)?,
    ])
}

pub fn frame_sizes(frames: &PlayerFrames) -> FrameSizes {
    std::array::from_fn(|direction| {
        std::array::from_fn(|step| {
            let frame = &frames[direction][step];
            UVec2::new(frame.width(), frame.height())
        })
    })
}

/// Loads the player sheet and places the player in the middle of the map
pub fn setup_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let frames = match load_sheet(config.asset_path(PLAYER_SHEET))
        .and_then(|sheet| load_player_frames(&sheet))
    {
        Ok(frames) => frames,
        Err(e) => {
            error!("Failed to load player frames: {}", e);
            next_state.set(AppState::FileSelect);
            return;
        }
    };

    let player = Player::new(frame_sizes(&frames), MAP_WINDOW);
    let sprites = PlayerSprites {
        frames: frames.map(|pair| pair.map(|frame| images.add(to_bevy_image(&frame)))),
    };

    let (direction, step) = player.current_frame();
    let rect = player.rect();
    blit(
        &mut commands,
        sprites.frame(direction, step).clone(),
        rect.top_left(),
        rect.size(),
        PLAYER_Z,
    )
    .insert(PlayerSprite);

    info!("Player spawned at {:?}", rect.top_left());
    commands.insert_resource(player);
    commands.insert_resource(sprites);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const SHEET_BACKGROUND: Rgba<u8> = Rgba([116, 116, 116, 255]);
    const TUNIC: Rgba<u8> = Rgba([128, 208, 16, 255]);

    fn sheet() -> RgbaImage {
        let mut sheet = RgbaImage::from_pixel(120, 30, SHEET_BACKGROUND);
        // Bottom-right pixel of the first right-facing frame
        sheet.put_pixel(35 + 15, 11 + 15, TUNIC);
        sheet
    }

    #[test]
    fn test_frame_sizes_are_scaled() {
        let frames = load_player_frames(&sheet()).unwrap();
        let sizes = frame_sizes(&frames);
        assert_eq!(sizes[Direction::Up.index()][0], UVec2::new(42, 48));
        assert_eq!(sizes[Direction::Down.index()][1], UVec2::new(45, 48));
        assert_eq!(sizes[Direction::Right.index()][0], UVec2::new(48, 48));
        assert_eq!(sizes[Direction::Right.index()][1], UVec2::new(45, 45));
        assert_eq!(
            sizes[Direction::Left.index()],
            sizes[Direction::Right.index()]
        );
    }

    #[test]
    fn test_left_frames_are_mirrored() {
        let frames = load_player_frames(&sheet()).unwrap();
        let right = &frames[Direction::Right.index()][0];
        let left = &frames[Direction::Left.index()][0];
        assert_eq!(*right.get_pixel(47, 47), TUNIC);
        assert_eq!(*left.get_pixel(0, 47), TUNIC);
    }

    #[test]
    fn test_sheet_background_is_transparent() {
        let frames = load_player_frames(&sheet()).unwrap();
        for pair in &frames {
            for frame in pair {
                assert_eq!(frame.get_pixel(0, 0)[3], 0);
            }
        }
    }

    #[test]
    fn test_frames_outside_sheet() {
        let small = RgbaImage::new(40, 20);
        assert!(matches!(
            load_player_frames(&small),
            Err(TileError::TileOutOfBounds { .. })
        ));
    }
}
