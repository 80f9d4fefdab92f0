//! Per-slot save games.

pub mod serialization;

pub use serialization::{delete_save_game, load_save_game, save_exists, save_game, SaveError};

use crate::config::SAVE_SLOT_COUNT;
use crate::map::RegionIndex;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Hearts a freshly registered player starts with
pub const STARTING_HEARTS: u8 = 3;

/// Progress stored in one save slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub name: String,
    pub region: RegionIndex,
    pub hearts: u8,
    pub deaths: u32,
}

impl SaveGame {
    pub fn new(name: impl Into<String>, region: RegionIndex) -> Self {
        Self {
            name: name.into(),
            region,
            hearts: STARTING_HEARTS,
            deaths: 0,
        }
    }
}

/// The slot being played, set when a file is picked on the file select
/// screen
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActiveSlot {
    pub slot: usize,
    pub save: SaveGame,
}

/// Path of the save file for `slot`
pub fn slot_path(save_directory: &Path, slot: usize) -> PathBuf {
    save_directory.join(format!("game{}.sav", slot))
}

/// Load one slot. A missing or unreadable file just means the slot is empty.
pub fn load_slot(save_directory: &Path, slot: usize) -> Option<SaveGame> {
    let path = slot_path(save_directory, slot);
    if !save_exists(&path) {
        debug!("No save in slot {}", slot);
        return None;
    }
    match load_save_game(&path) {
        Ok(save) => Some(save),
        Err(e) => {
            warn!("Treating slot {} as empty, failed to load {}: {}", slot, path.display(), e);
            None
        }
    }
}

/// Load every slot shown on the menus
pub fn load_slots(save_directory: &Path) -> [Option<SaveGame>; SAVE_SLOT_COUNT] {
    std::array::from_fn(|slot| load_slot(save_directory, slot))
}

/// Write `save` into `slot`
pub fn store_slot(save_directory: &Path, slot: usize, save: &SaveGame) -> Result<(), SaveError> {
    save_game(save, slot_path(save_directory, slot))?;
    info!("Saved {:?} to slot {}", save.name, slot);
    Ok(())
}

/// Remove the save in `slot`. Removing an empty slot is not an error.
pub fn erase_slot(save_directory: &Path, slot: usize) -> Result<(), SaveError> {
    match delete_save_game(slot_path(save_directory, slot)) {
        Ok(()) => {
            info!("Erased slot {}", slot);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_slot_path() {
        assert_eq!(
            slot_path(Path::new("saves"), 2),
            PathBuf::from("saves").join("game2.sav")
        );
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let dir = tempdir().unwrap();
        assert_eq!(load_slot(dir.path(), 0), None);
    }

    #[test]
    fn test_unreadable_slot_is_empty() {
        let dir = tempdir().unwrap();
        fs::write(slot_path(dir.path(), 1), b"garbage").unwrap();
        assert_eq!(load_slot(dir.path(), 1), None);
    }

    #[test]
    fn test_store_and_load_slots() {
        let dir = tempdir().unwrap();
        let save = SaveGame::new("LINK", RegionIndex::new(7, 7));
        store_slot(dir.path(), 1, &save).unwrap();

        let slots = load_slots(dir.path());
        assert_eq!(slots[0], None);
        assert_eq!(slots[1], Some(save));
        assert_eq!(slots[2], None);
    }

    #[test]
    fn test_erase_slot() {
        let dir = tempdir().unwrap();
        store_slot(dir.path(), 0, &SaveGame::new("LINK", RegionIndex::new(0, 0))).unwrap();

        erase_slot(dir.path(), 0).unwrap();
        assert_eq!(load_slot(dir.path(), 0), None);

        // Already empty
        erase_slot(dir.path(), 0).unwrap();
    }
}
