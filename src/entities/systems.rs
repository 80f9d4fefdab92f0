use super::{Player, PlayerSprite, PlayerSprites};
use crate::map::PLAYER_Z;
use crate::screen::screen_transform;
use bevy::prelude::*;

/// Shows the player's current frame at the player's rectangle
pub fn sync_player_sprite(
    player: Res<Player>,
    sprites: Res<PlayerSprites>,
    mut query: Query<(&mut Sprite, &mut Transform), With<PlayerSprite>>,
) {
    if !player.is_changed() {
        return;
    }

    let (direction, step) = player.current_frame();
    let rect = player.rect();
    for (mut sprite, mut transform) in &mut query {
        sprite.image = sprites.frame(direction, step).clone();
        sprite.custom_size = Some(rect.size().as_vec2());
        *transform = screen_transform(rect.top_left(), rect.size(), PLAYER_Z);
    }
}

pub fn remove_player(mut commands: Commands) {
    commands.remove_resource::<Player>();
    commands.remove_resource::<PlayerSprites>();
}
