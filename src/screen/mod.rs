//! The single rendering surface.
//!
//! All screen code works in top-left-origin pixel coordinates like the
//! NES. This module is the only place that knows bevy's world is
//! centered and y-up.

mod rect;

pub use rect::ScreenRect;

use crate::config::{WINDOW_SIZE, WINDOW_TITLE};
use bevy::asset::RenderAssetUsages;
use bevy::ecs::system::EntityCommands;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::WindowResolution;
use image::RgbaImage;

/// Plugin owning the camera and the background fill
pub struct ScreenPlugin;

impl Plugin for ScreenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClearColor>()
            .add_systems(Startup, setup_screen);
    }
}

/// Window settings for the fixed-size game window
pub fn window_plugin() -> WindowPlugin {
    WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            resolution: WindowResolution::new(WINDOW_SIZE.x, WINDOW_SIZE.y),
            resizable: false,
            ..default()
        }),
        ..default()
    }
}

fn setup_screen(mut commands: Commands, mut clear_color: ResMut<ClearColor>) {
    fill(&mut clear_color, Color::BLACK);
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));
    info!("Screen ready at {}x{}", WINDOW_SIZE.x, WINDOW_SIZE.y);
}

/// Fill the whole surface with a solid color
pub fn fill(clear_color: &mut ClearColor, color: Color) {
    clear_color.0 = color;
}

/// Transform placing something of `size` with its upper left corner at
/// `top_left` on screen
pub fn screen_transform(top_left: IVec2, size: UVec2, z: f32) -> Transform {
    Transform::from_translation(screen_to_world(top_left, size).extend(z))
}

/// Center of a screen rectangle in bevy world coordinates
pub fn screen_to_world(top_left: IVec2, size: UVec2) -> Vec2 {
    let half_window = WINDOW_SIZE.as_vec2() / 2.0;
    let half_size = size.as_vec2() / 2.0;
    Vec2::new(
        top_left.x as f32 + half_size.x - half_window.x,
        half_window.y - (top_left.y as f32 + half_size.y),
    )
}

/// Draw `image` with its upper left corner at `top_left`
pub fn blit<'a>(
    commands: &'a mut Commands,
    image: Handle<Image>,
    top_left: IVec2,
    size: UVec2,
    z: f32,
) -> EntityCommands<'a> {
    commands.spawn((
        Sprite {
            image,
            custom_size: Some(size.as_vec2()),
            ..default()
        },
        screen_transform(top_left, size, z),
    ))
}

/// Upload a decoded tile into a bevy image
pub fn to_bevy_image(tile: &RgbaImage) -> Image {
    Image::new(
        Extent3d {
            width: tile.width(),
            height: tile.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        tile.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_maps_to_origin() {
        let center = screen_to_world(IVec2::ZERO, WINDOW_SIZE);
        assert_eq!(center, Vec2::ZERO);
    }

    #[test]
    fn test_top_left_pixel_is_up_and_left() {
        let center = screen_to_world(IVec2::ZERO, UVec2::new(2, 2));
        assert_eq!(center, Vec2::new(-383.0, 359.0));
    }

    #[test]
    fn test_to_bevy_image_keeps_size() {
        let tile = RgbaImage::new(8, 4);
        let image = to_bevy_image(&tile);
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 4);
    }
}
