use bevy::prelude::*;

/// Which screen is showing
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Title,
    FileSelect,
    Registration,
    Elimination,
    Overworld,
}

/// Despawn every entity tagged with the screen marker `T`
pub fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
