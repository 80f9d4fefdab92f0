pub mod cursor;
pub mod screens;
pub mod systems;

pub use cursor::{MenuCursor, MenuError, MenuItem};
pub use screens::*;
pub use systems::*;

use crate::state::{despawn_screen, AppState};
use bevy::prelude::*;

/// Plugin for the file select, registration and elimination menus
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::FileSelect), setup_file_select)
            .add_systems(OnEnter(AppState::Registration), setup_registration)
            .add_systems(OnEnter(AppState::Elimination), setup_elimination)
            .add_systems(
                Update,
                navigate_menu
                    .run_if(resource_exists::<ActiveMenu>.and(resource_exists::<MenuAssets>)),
            );

        for state in [
            AppState::FileSelect,
            AppState::Registration,
            AppState::Elimination,
        ] {
            app.add_systems(OnExit(state), (despawn_screen::<MenuScreen>, remove_menu));
        }
    }
}
