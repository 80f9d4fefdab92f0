pub mod constants;
pub mod scale;

pub use constants::*;

use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration shared by every screen
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Directory holding the sprite sheets
    pub asset_directory: PathBuf,
    /// Directory where the save slot files live
    pub save_directory: PathBuf,
    /// Interval between player move ticks
    pub move_interval: Duration,
    /// Region used when a save has no region recorded
    pub start_region: IVec2,
}

impl GameConfig {
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_directory.join(file_name)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_directory: PathBuf::from("assets"),
            save_directory: PathBuf::from("saves"),
            move_interval: PLAYER_MOVE_INTERVAL,
            start_region: START_REGION,
        }
    }
}
