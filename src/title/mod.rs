pub mod sequence;
pub mod systems;

pub use sequence::*;
pub use systems::*;

use crate::state::{despawn_screen, AppState};
use bevy::prelude::*;

/// Plugin for the animated title screen
pub struct TitlePlugin;

impl Plugin for TitlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Title), setup_title)
            .add_systems(
                Update,
                (
                    animate_title.run_if(
                        resource_exists::<TitleClock>.and(resource_exists::<TitleAssets>),
                    ),
                    title_input,
                )
                    .run_if(in_state(AppState::Title)),
            )
            .add_systems(
                OnExit(AppState::Title),
                (despawn_screen::<TitleScreen>, remove_title),
            );
    }
}
