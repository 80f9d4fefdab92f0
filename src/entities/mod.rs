pub mod player;
pub mod spawning;
pub mod systems;
pub mod types;

pub use player::*;
pub use spawning::*;
pub use systems::*;
pub use types::*;

use crate::state::{despawn_screen, AppState};
use bevy::prelude::*;

/// Plugin spawning and drawing the player on the overworld
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Overworld), setup_player)
            .add_systems(
                Update,
                sync_player_sprite.run_if(
                    in_state(AppState::Overworld)
                        .and(resource_exists::<Player>)
                        .and(resource_exists::<PlayerSprites>),
                ),
            )
            .add_systems(
                OnExit(AppState::Overworld),
                (despawn_screen::<PlayerSprite>, remove_player),
            );
    }
}
