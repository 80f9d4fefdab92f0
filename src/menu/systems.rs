use super::cursor::MenuCursor;
use super::screens::{confirm, menu_command, MenuCommand, MenuEntry, MenuKind, MenuOutcome};
use crate::config::{GameConfig, INTRO_SHEET, WINDOW_SIZE};
use crate::map::RegionIndex;
use crate::save::load_slots;
use crate::screen::{blit, screen_transform, to_bevy_image};
use crate::state::AppState;
use crate::tiles::{extract_tile, load_sheet, TileError, HEARTS, MENU_BACKGROUND, PINK_HEART};
use bevy::prelude::*;
use image::RgbaImage;

const BACKGROUND_Z: f32 = 0.0;
const HEART_Z: f32 = 1.0;

/// Images shared by the three menus, decoded on first use
#[derive(Resource, Clone)]
pub struct MenuAssets {
    background: Handle<Image>,
    pink_heart: Handle<Image>,
    heart_size: UVec2,
}

/// The menu currently showing and its cursor
#[derive(Resource)]
pub struct ActiveMenu {
    pub kind: MenuKind,
    pub cursor: MenuCursor<MenuEntry>,
}

/// Marker for everything a menu spawns
#[derive(Component)]
pub struct MenuScreen;

/// The pink heart pointing at the current item
#[derive(Component)]
pub struct MenuHeart;

/// Cut the menu background and the pink heart out of the intro sheet
pub fn load_menu_images(sheet: &RgbaImage) -> Result<(RgbaImage, RgbaImage), TileError> {
    let background = extract_tile(sheet, &MENU_BACKGROUND, 0, 0)?;
    let (row, col) = PINK_HEART;
    let pink_heart = extract_tile(sheet, &HEARTS, col as u32, row as u32)?;
    Ok((background, pink_heart))
}

fn menu_assets(
    existing: Option<Res<MenuAssets>>,
    commands: &mut Commands,
    config: &GameConfig,
    images: &mut Assets<Image>,
) -> Result<MenuAssets, TileError> {
    if let Some(assets) = existing {
        return Ok(assets.clone());
    }

    let sheet = load_sheet(config.asset_path(INTRO_SHEET))?;
    let (background, pink_heart) = load_menu_images(&sheet)?;
    let assets = MenuAssets {
        background: images.add(to_bevy_image(&background)),
        pink_heart: images.add(to_bevy_image(&pink_heart)),
        heart_size: UVec2::new(pink_heart.width(), pink_heart.height()),
    };
    commands.insert_resource(assets.clone());
    info!("Loaded menu images");
    Ok(assets)
}

fn spawn_menu(
    kind: MenuKind,
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<MenuAssets>>,
    mut images: ResMut<Assets<Image>>,
    mut exit: MessageWriter<AppExit>,
) {
    let assets = match menu_assets(existing, &mut commands, &config, &mut images) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load menu images: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let slots = load_slots(&config.save_directory);
    let mut cursor = kind.build(&slots);
    let marker = match cursor.reset() {
        Ok(item) => item.payload.marker,
        Err(e) => {
            error!("{:?} menu is unusable: {}", kind, e);
            exit.write(AppExit::error());
            return;
        }
    };

    blit(
        &mut commands,
        assets.background.clone(),
        IVec2::ZERO,
        WINDOW_SIZE,
        BACKGROUND_Z,
    )
    .insert(MenuScreen);
    blit(
        &mut commands,
        assets.pink_heart.clone(),
        marker,
        assets.heart_size,
        HEART_Z,
    )
    .insert((MenuScreen, MenuHeart));

    commands.insert_resource(ActiveMenu { kind, cursor });
    info!("Showing the {:?} menu", kind);
}

pub fn setup_file_select(
    commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<MenuAssets>>,
    images: ResMut<Assets<Image>>,
    exit: MessageWriter<AppExit>,
) {
    spawn_menu(MenuKind::FileSelect, commands, config, existing, images, exit);
}

pub fn setup_registration(
    commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<MenuAssets>>,
    images: ResMut<Assets<Image>>,
    exit: MessageWriter<AppExit>,
) {
    spawn_menu(MenuKind::Registration, commands, config, existing, images, exit);
}

pub fn setup_elimination(
    commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<MenuAssets>>,
    images: ResMut<Assets<Image>>,
    exit: MessageWriter<AppExit>,
) {
    spawn_menu(MenuKind::Elimination, commands, config, existing, images, exit);
}

/// Moves the heart and acts on confirm and back
pub fn navigate_menu(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut menu: ResMut<ActiveMenu>,
    assets: Res<MenuAssets>,
    config: Res<GameConfig>,
    mut hearts: Query<&mut Transform, With<MenuHeart>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for key in keyboard.get_just_pressed() {
        let Some(command) = menu_command(*key) else {
            continue;
        };
        match command {
            MenuCommand::Move(direction) => {
                let marker = match menu.cursor.advance(direction) {
                    Ok(item) => item.payload.marker,
                    Err(e) => {
                        warn!("Cursor can't move: {}", e);
                        continue;
                    }
                };
                for mut transform in &mut hearts {
                    *transform = screen_transform(marker, assets.heart_size, HEART_Z);
                }
            }
            MenuCommand::Back => {
                match menu.kind.back() {
                    Some(state) => next_state.set(state),
                    None => {
                        info!("Quitting from the {:?} menu", menu.kind);
                        exit.write(AppExit::Success);
                    }
                }
                return;
            }
            MenuCommand::Confirm => {
                let Ok(item) = menu.cursor.current() else {
                    continue;
                };
                let action = item.payload.action;
                let start_region = RegionIndex::from(config.start_region);
                match confirm(menu.kind, action, &config.save_directory, start_region) {
                    Ok(MenuOutcome::Stay) => {}
                    Ok(MenuOutcome::Goto(state)) => {
                        next_state.set(state);
                        return;
                    }
                    Ok(MenuOutcome::Play(active)) => {
                        info!(
                            "Playing slot {} ({}) from region {}",
                            active.slot, active.save.name, active.save.region
                        );
                        commands.insert_resource(active);
                        next_state.set(AppState::Overworld);
                        return;
                    }
                    Err(e) => error!("{:?} on the {:?} menu failed: {}", action, menu.kind, e),
                }
            }
        }
    }
}

pub fn remove_menu(mut commands: Commands) {
    commands.remove_resource::<ActiveMenu>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_load_menu_images() {
        // Just big enough to hold the menu background and the hearts
        let mut sheet = RgbaImage::from_pixel(290, 745, Rgba([0, 0, 0, 255]));
        // Pink heart body, sitting in the second 8x8 heart cell
        sheet.put_pixel(269 + 9 + 1 + 3, 733 + 1 + 3, Rgba([252, 116, 180, 255]));

        let (background, heart) = load_menu_images(&sheet).unwrap();
        assert_eq!(background.dimensions(), (WINDOW_SIZE.x, WINDOW_SIZE.y));
        assert_eq!(heart.dimensions(), (24, 24));
        assert_eq!(heart.get_pixel(0, 0)[3], 0);
        assert_eq!(*heart.get_pixel(9, 9), Rgba([252, 116, 180, 255]));
    }
}
