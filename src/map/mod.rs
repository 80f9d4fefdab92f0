mod constants;
mod overworld;
mod systems;
mod types;

pub use constants::*;
pub use overworld::{Background, MapError, Overworld};
pub use systems::*;
pub use types::RegionIndex;

#[cfg(test)]
pub(crate) use overworld::tests::small_overworld;

use crate::state::{despawn_screen, AppState};
use bevy::prelude::*;

/// Plugin for the overworld map
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Overworld), setup_overworld)
            .add_systems(
                Update,
                update_map_display
                    .run_if(in_state(AppState::Overworld).and(resource_exists::<Overworld>)),
            )
            .add_systems(
                OnExit(AppState::Overworld),
                (despawn_screen::<MapDisplay>, remove_overworld),
            );
    }
}
