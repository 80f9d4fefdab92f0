use super::{Overworld, RegionIndex, MAP_WINDOW, MAP_Z};
use crate::config::{GameConfig, OVERWORLD_SHEET};
use crate::save::ActiveSlot;
use crate::screen::{blit, to_bevy_image};
use crate::state::AppState;
use bevy::prelude::*;

/// Sprite showing the current map region
#[derive(Component)]
pub struct MapDisplay {
    /// Region whose image the sprite currently holds
    pub shown: RegionIndex,
}

/// Loads the overworld at the active save's region and draws it
pub fn setup_overworld(
    mut commands: Commands,
    config: Res<GameConfig>,
    active_slot: Option<Res<ActiveSlot>>,
    mut images: ResMut<Assets<Image>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let start = active_slot
        .map(|active| active.save.region)
        .unwrap_or_else(|| RegionIndex::from(config.start_region));

    let overworld = match Overworld::load(config.asset_path(OVERWORLD_SHEET), start) {
        Ok(overworld) => overworld,
        Err(e) => {
            error!("Failed to load the overworld: {}", e);
            next_state.set(AppState::FileSelect);
            return;
        }
    };

    let image = images.add(to_bevy_image(overworld.current_region()));
    blit(
        &mut commands,
        image,
        MAP_WINDOW.top_left(),
        MAP_WINDOW.size(),
        MAP_Z,
    )
    .insert(MapDisplay {
        shown: overworld.index(),
    });

    commands.insert_resource(overworld);
}

/// Re-uploads the region image after the map switched regions
pub fn update_map_display(
    overworld: Res<Overworld>,
    mut images: ResMut<Assets<Image>>,
    mut query: Query<(&mut MapDisplay, &mut Sprite)>,
) {
    if !overworld.is_changed() {
        return;
    }

    for (mut map_display, mut sprite) in &mut query {
        if map_display.shown == overworld.index() {
            continue;
        }
        sprite.image = images.add(to_bevy_image(overworld.current_region()));
        map_display.shown = overworld.index();
        debug!("Map now showing region {}", map_display.shown);
    }
}

pub fn remove_overworld(mut commands: Commands) {
    commands.remove_resource::<Overworld>();
}
