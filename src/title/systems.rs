use super::sequence::{
    alpha_value, intro_text_location, sequence_time, waterfall_frame, TitlePhase, SPRAY_LOCATION,
    TITLE_FRAME_TIME, WATERFALL_LOCATION,
};
use crate::config::scale::coordinates;
use crate::config::{GameConfig, INTRO_SHEET, WINDOW_SIZE};
use crate::screen::{blit, screen_transform, to_bevy_image};
use crate::state::AppState;
use crate::tiles::{
    apply_colorkey, extract_tile, load_sheet, TileError, INTRO_TEXT, TITLE_BACKGROUND, WATERFALL,
    WATERFALL_SPRAY, WATERFALL_SPRAY_FRAMES,
};
use bevy::prelude::*;
use image::RgbaImage;

// Z-positions for each layer of the title
const BACKGROUND_Z: f32 = 0.0;
const SPRAY_Z: f32 = 1.0;
const WATERFALL_Z: f32 = 2.0;
const WAVES_Z: f32 = 3.0;
const FADE_Z: f32 = 4.0;
const INTRO_TEXT_Z: f32 = 5.0;

/// Decoded title images, before upload
pub struct TitleImages {
    /// Indexed `[row][col]`
    pub backgrounds: [[RgbaImage; 2]; 2],
    pub waterfall: RgbaImage,
    pub waves: RgbaImage,
    pub spray: [RgbaImage; WATERFALL_SPRAY_FRAMES],
    pub intro_text: RgbaImage,
}

/// Cut every title image out of the intro sheet
pub fn load_title_images(sheet: &RgbaImage) -> Result<TitleImages, TileError> {
    let background = |row: u32, col: u32| extract_tile(sheet, &TITLE_BACKGROUND, col, row);

    // The waves share a grid with the waterfall but need their background
    // keyed out
    let mut waves = extract_tile(sheet, &WATERFALL, 1, 0)?;
    apply_colorkey(&mut waves, UVec2::ZERO)?;

    Ok(TitleImages {
        backgrounds: [
            [background(0, 0)?, background(0, 1)?],
            [background(1, 0)?, background(1, 1)?],
        ],
        waterfall: extract_tile(sheet, &WATERFALL, 0, 0)?,
        waves,
        spray: [
            extract_tile(sheet, &WATERFALL_SPRAY, 0, 0)?,
            extract_tile(sheet, &WATERFALL_SPRAY, 0, 1)?,
            extract_tile(sheet, &WATERFALL_SPRAY, 0, 2)?,
            extract_tile(sheet, &WATERFALL_SPRAY, 0, 3)?,
            extract_tile(sheet, &WATERFALL_SPRAY, 0, 4)?,
        ],
        intro_text: extract_tile(sheet, &INTRO_TEXT, 0, 0)?,
    })
}

#[derive(Resource)]
pub struct TitleAssets {
    backgrounds: [[Handle<Image>; 2]; 2],
    spray: [Handle<Image>; WATERFALL_SPRAY_FRAMES],
    waves_size: UVec2,
    intro_text_size: UVec2,
}

/// Time since the sequence started and the current waterfall frame
#[derive(Resource)]
pub struct TitleClock {
    elapsed_secs: f64,
    frame: usize,
    frame_timer: Timer,
}

impl Default for TitleClock {
    fn default() -> Self {
        Self {
            elapsed_secs: 0.0,
            frame: 0,
            frame_timer: Timer::new(TITLE_FRAME_TIME, TimerMode::Repeating),
        }
    }
}

/// Marker for everything the title spawns
#[derive(Component)]
pub struct TitleScreen;

#[derive(Component)]
pub struct TitleBackground;

#[derive(Component)]
pub struct WaterfallSpray;

#[derive(Component)]
pub struct WaterfallWaves;

/// Layers only shown during the waterfall shot
#[derive(Component)]
pub struct WaterfallLayer;

#[derive(Component)]
pub struct FadeOverlay;

#[derive(Component)]
pub struct IntroText;

pub fn setup_title(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut images: ResMut<Assets<Image>>,
    mut exit: MessageWriter<AppExit>,
) {
    let decoded = match load_sheet(config.asset_path(INTRO_SHEET))
        .and_then(|sheet| load_title_images(&sheet))
    {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("Failed to load title images: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let size_of = |image: &RgbaImage| UVec2::new(image.width(), image.height());
    let frame = waterfall_frame(0);

    let assets = TitleAssets {
        backgrounds: decoded
            .backgrounds
            .each_ref()
            .map(|row| row.each_ref().map(|tile| images.add(to_bevy_image(tile)))),
        spray: decoded
            .spray
            .each_ref()
            .map(|tile| images.add(to_bevy_image(tile))),
        waves_size: size_of(&decoded.waves),
        intro_text_size: size_of(&decoded.intro_text),
    };

    let (row, col) = frame.background;
    blit(
        &mut commands,
        assets.backgrounds[row as usize][col as usize].clone(),
        IVec2::ZERO,
        WINDOW_SIZE,
        BACKGROUND_Z,
    )
    .insert((TitleScreen, WaterfallLayer, TitleBackground));
    blit(
        &mut commands,
        assets.spray[frame.spray].clone(),
        coordinates(SPRAY_LOCATION),
        size_of(&decoded.spray[0]),
        SPRAY_Z,
    )
    .insert((TitleScreen, WaterfallLayer, WaterfallSpray));
    blit(
        &mut commands,
        images.add(to_bevy_image(&decoded.waterfall)),
        coordinates(WATERFALL_LOCATION),
        size_of(&decoded.waterfall),
        WATERFALL_Z,
    )
    .insert((TitleScreen, WaterfallLayer));
    blit(
        &mut commands,
        images.add(to_bevy_image(&decoded.waves)),
        frame.waves,
        assets.waves_size,
        WAVES_Z,
    )
    .insert((TitleScreen, WaterfallLayer, WaterfallWaves));
    blit(
        &mut commands,
        images.add(to_bevy_image(&decoded.intro_text)),
        intro_text_location(0.0),
        assets.intro_text_size,
        INTRO_TEXT_Z,
    )
    .insert((TitleScreen, IntroText));

    commands.spawn((
        TitleScreen,
        FadeOverlay,
        Sprite::from_color(Color::BLACK.with_alpha(0.0), WINDOW_SIZE.as_vec2()),
        screen_transform(IVec2::ZERO, WINDOW_SIZE, FADE_Z),
    ));

    commands.insert_resource(assets);
    commands.init_resource::<TitleClock>();
    info!("Title sequence started");
}

/// Steps the waterfall, the fade and the scrolling text
pub fn animate_title(
    time: Res<Time>,
    mut clock: ResMut<TitleClock>,
    assets: Res<TitleAssets>,
    mut backgrounds: Query<&mut Sprite, (With<TitleBackground>, Without<WaterfallSpray>)>,
    mut spray: Query<&mut Sprite, (With<WaterfallSpray>, Without<TitleBackground>)>,
    mut waves: Query<&mut Transform, (With<WaterfallWaves>, Without<IntroText>)>,
    mut layers: Query<&mut Visibility, With<WaterfallLayer>>,
    mut fade: Query<
        &mut Sprite,
        (
            With<FadeOverlay>,
            Without<TitleBackground>,
            Without<WaterfallSpray>,
        ),
    >,
    mut intro_text: Query<&mut Transform, (With<IntroText>, Without<WaterfallWaves>)>,
) {
    let total = clock.elapsed_secs + time.delta_secs_f64();
    let elapsed = sequence_time(total);
    if elapsed < total {
        debug!("Restarting the title sequence");
        clock.frame = 0;
        clock.frame_timer.reset();
    }
    clock.elapsed_secs = elapsed;

    let phase = TitlePhase::at(elapsed);
    let visibility = if phase.shows_waterfall() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut layer in &mut layers {
        layer.set_if_neq(visibility);
    }

    if phase.shows_waterfall() {
        clock.frame_timer.tick(time.delta());
        let finished = clock.frame_timer.times_finished_this_tick() as usize;
        if finished > 0 {
            clock.frame += finished;
            let frame = waterfall_frame(clock.frame);
            let (row, col) = frame.background;
            for mut sprite in &mut backgrounds {
                sprite.image = assets.backgrounds[row as usize][col as usize].clone();
            }
            for mut sprite in &mut spray {
                sprite.image = assets.spray[frame.spray].clone();
            }
            for mut transform in &mut waves {
                *transform = screen_transform(frame.waves, assets.waves_size, WAVES_Z);
            }
        }
    }

    let alpha = alpha_value(elapsed) as f32 / 255.0;
    for mut sprite in &mut fade {
        sprite.color = Color::BLACK.with_alpha(alpha);
    }

    let location = intro_text_location(elapsed);
    for mut transform in &mut intro_text {
        *transform = screen_transform(location, assets.intro_text_size, INTRO_TEXT_Z);
    }
}

/// Any key moves on to file select, Escape quits
pub fn title_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Quitting from the title screen");
        exit.write(AppExit::Success);
    } else if keyboard.get_just_pressed().next().is_some() {
        next_state.set(AppState::FileSelect);
    }
}

pub fn remove_title(mut commands: Commands) {
    commands.remove_resource::<TitleAssets>();
    commands.remove_resource::<TitleClock>();
}
