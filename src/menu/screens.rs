//! The file select, registration and elimination menus.

use super::cursor::{MenuCursor, MenuItem};
use crate::config::scale::coordinates;
use crate::config::SAVE_SLOT_COUNT;
use crate::map::RegionIndex;
use crate::save::{erase_slot, load_slot, store_slot, ActiveSlot, SaveError, SaveGame};
use crate::state::AppState;
use bevy::input::keyboard::KeyCode;
use bevy::math::IVec2;
use std::path::Path;

/// Name given to files created on the registration screen
pub const DEFAULT_PLAYER_NAME: &str = "LINK";

/// Where the heart sits next to each slot, top to bottom, in NES pixels
pub const SLOT_MARKERS: [IVec2; SAVE_SLOT_COUNT] = [
    IVec2::new(39, 93),
    IVec2::new(39, 117),
    IVec2::new(39, 141),
];
pub const REGISTER_MARKER: IVec2 = IVec2::new(39, 168);
pub const ELIMINATION_MARKER: IVec2 = IVec2::new(39, 184);

const SLOT_LABELS: [&str; SAVE_SLOT_COUNT] = ["file1", "file2", "file3"];

/// Which of the three menus is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    FileSelect,
    Registration,
    Elimination,
}

impl MenuKind {
    pub fn state(self) -> AppState {
        match self {
            MenuKind::FileSelect => AppState::FileSelect,
            MenuKind::Registration => AppState::Registration,
            MenuKind::Elimination => AppState::Elimination,
        }
    }

    /// Where Escape leads. `None` quits the game.
    pub fn back(self) -> Option<AppState> {
        match self {
            MenuKind::FileSelect => None,
            MenuKind::Registration | MenuKind::Elimination => Some(AppState::FileSelect),
        }
    }

    /// Build the menu for the given save slots
    pub fn build(self, slots: &[Option<SaveGame>; SAVE_SLOT_COUNT]) -> MenuCursor<MenuEntry> {
        match self {
            MenuKind::FileSelect => file_select_menu(slots),
            MenuKind::Registration => registration_menu(slots),
            MenuKind::Elimination => elimination_menu(slots),
        }
    }
}

/// What confirming an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Slot(usize),
    Register,
    Eliminate,
    End,
}

/// Payload of every menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: MenuAction,
    /// Top-left corner of the heart when this item is current
    pub marker: IVec2,
}

fn slot_items(
    slots: &[Option<SaveGame>; SAVE_SLOT_COUNT],
    selectable: impl Fn(&Option<SaveGame>) -> bool,
) -> Vec<MenuItem<MenuEntry>> {
    slots
        .iter()
        .enumerate()
        .map(|(slot, save)| {
            MenuItem::new(
                SLOT_LABELS[slot],
                selectable(save),
                MenuEntry {
                    action: MenuAction::Slot(slot),
                    marker: coordinates(SLOT_MARKERS[slot]),
                },
            )
        })
        .collect()
}

/// Saved files, then register and elimination
pub fn file_select_menu(slots: &[Option<SaveGame>; SAVE_SLOT_COUNT]) -> MenuCursor<MenuEntry> {
    let saved = slots.iter().filter(|save| save.is_some()).count();
    let mut items = slot_items(slots, Option::is_some);
    items.push(MenuItem::new(
        "register",
        saved < SAVE_SLOT_COUNT,
        MenuEntry {
            action: MenuAction::Register,
            marker: coordinates(REGISTER_MARKER),
        },
    ));
    items.push(MenuItem::new(
        "elimination",
        saved > 0,
        MenuEntry {
            action: MenuAction::Eliminate,
            marker: coordinates(ELIMINATION_MARKER),
        },
    ));
    MenuCursor::new(items)
}

/// Empty slots can be registered
pub fn registration_menu(slots: &[Option<SaveGame>; SAVE_SLOT_COUNT]) -> MenuCursor<MenuEntry> {
    let mut items = slot_items(slots, Option::is_none);
    items.push(MenuItem::new(
        "register end",
        true,
        MenuEntry {
            action: MenuAction::End,
            marker: coordinates(REGISTER_MARKER),
        },
    ));
    MenuCursor::new(items)
}

/// Saved slots can be erased
pub fn elimination_menu(slots: &[Option<SaveGame>; SAVE_SLOT_COUNT]) -> MenuCursor<MenuEntry> {
    let mut items = slot_items(slots, Option::is_some);
    items.push(MenuItem::new(
        "elimination end",
        true,
        MenuEntry {
            action: MenuAction::End,
            marker: coordinates(REGISTER_MARKER),
        },
    ));
    MenuCursor::new(items)
}

/// A menu key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Move(i32),
    Confirm,
    Back,
}

pub fn menu_command(key: KeyCode) -> Option<MenuCommand> {
    match key {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(MenuCommand::Move(-1)),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(MenuCommand::Move(1)),
        KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(MenuCommand::Confirm),
        KeyCode::Escape => Some(MenuCommand::Back),
        _ => None,
    }
}

/// Where confirming an item leads
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    Stay,
    Goto(AppState),
    Play(ActiveSlot),
}

/// Carry out `action` on the `kind` menu. Registering and erasing write to
/// the save directory right away.
pub fn confirm(
    kind: MenuKind,
    action: MenuAction,
    save_directory: &Path,
    start_region: RegionIndex,
) -> Result<MenuOutcome, SaveError> {
    let outcome = match (kind, action) {
        (MenuKind::FileSelect, MenuAction::Slot(slot)) => match load_slot(save_directory, slot) {
            Some(save) => MenuOutcome::Play(ActiveSlot { slot, save }),
            None => MenuOutcome::Stay,
        },
        (MenuKind::FileSelect, MenuAction::Register) => MenuOutcome::Goto(AppState::Registration),
        (MenuKind::FileSelect, MenuAction::Eliminate) => MenuOutcome::Goto(AppState::Elimination),
        (MenuKind::Registration, MenuAction::Slot(slot)) => {
            store_slot(
                save_directory,
                slot,
                &SaveGame::new(DEFAULT_PLAYER_NAME, start_region),
            )?;
            MenuOutcome::Goto(AppState::FileSelect)
        }
        (MenuKind::Elimination, MenuAction::Slot(slot)) => {
            erase_slot(save_directory, slot)?;
            MenuOutcome::Goto(AppState::FileSelect)
        }
        (_, MenuAction::End) => MenuOutcome::Goto(AppState::FileSelect),
        _ => MenuOutcome::Stay,
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::load_slots;
    use tempfile::tempdir;

    const START: RegionIndex = RegionIndex::new(7, 7);

    fn saved(region: RegionIndex) -> Option<SaveGame> {
        Some(SaveGame::new(DEFAULT_PLAYER_NAME, region))
    }

    fn selectable(cursor: &MenuCursor<MenuEntry>) -> Vec<&'static str> {
        cursor
            .items()
            .iter()
            .filter(|item| item.selectable)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn test_file_select_with_no_saves() {
        let mut cursor = file_select_menu(&[None, None, None]);
        assert_eq!(selectable(&cursor), vec!["register"]);
        assert_eq!(cursor.reset().unwrap().payload.action, MenuAction::Register);
    }

    #[test]
    fn test_file_select_with_some_saves() {
        let cursor = file_select_menu(&[None, saved(START), None]);
        assert_eq!(selectable(&cursor), vec!["file2", "register", "elimination"]);
    }

    #[test]
    fn test_file_select_full() {
        let cursor = file_select_menu(&[saved(START), saved(START), saved(START)]);
        assert_eq!(
            selectable(&cursor),
            vec!["file1", "file2", "file3", "elimination"]
        );
    }

    #[test]
    fn test_registration_offers_empty_slots() {
        let cursor = registration_menu(&[saved(START), None, None]);
        assert_eq!(selectable(&cursor), vec!["file2", "file3", "register end"]);
    }

    #[test]
    fn test_elimination_offers_saved_slots() {
        let cursor = elimination_menu(&[saved(START), None, saved(START)]);
        assert_eq!(selectable(&cursor), vec!["file1", "file3", "elimination end"]);
    }

    #[test]
    fn test_markers() {
        let cursor = file_select_menu(&[None, None, None]);
        let markers: Vec<IVec2> = cursor.items().iter().map(|item| item.payload.marker).collect();
        assert_eq!(
            markers,
            vec![
                IVec2::new(117, 279),
                IVec2::new(117, 351),
                IVec2::new(117, 423),
                IVec2::new(117, 504),
                IVec2::new(117, 552),
            ]
        );
    }

    #[test]
    fn test_menu_command() {
        assert_eq!(menu_command(KeyCode::KeyW), Some(MenuCommand::Move(-1)));
        assert_eq!(menu_command(KeyCode::ArrowDown), Some(MenuCommand::Move(1)));
        assert_eq!(menu_command(KeyCode::Space), Some(MenuCommand::Confirm));
        assert_eq!(menu_command(KeyCode::Escape), Some(MenuCommand::Back));
        assert_eq!(menu_command(KeyCode::KeyX), None);
    }

    #[test]
    fn test_back() {
        assert_eq!(MenuKind::FileSelect.back(), None);
        assert_eq!(MenuKind::Elimination.back(), Some(AppState::FileSelect));
    }

    #[test]
    fn test_register_then_play_then_eliminate() {
        let dir = tempdir().unwrap();

        let outcome = confirm(MenuKind::Registration, MenuAction::Slot(1), dir.path(), START);
        assert_eq!(outcome.unwrap(), MenuOutcome::Goto(AppState::FileSelect));
        let slots = load_slots(dir.path());
        assert_eq!(slots[1], saved(START));

        let outcome = confirm(MenuKind::FileSelect, MenuAction::Slot(1), dir.path(), START);
        match outcome.unwrap() {
            MenuOutcome::Play(active) => {
                assert_eq!(active.slot, 1);
                assert_eq!(active.save.region, START);
            }
            other => panic!("expected to play, got {:?}", other),
        }

        let outcome = confirm(MenuKind::Elimination, MenuAction::Slot(1), dir.path(), START);
        assert_eq!(outcome.unwrap(), MenuOutcome::Goto(AppState::FileSelect));
        assert_eq!(load_slots(dir.path())[1], None);
    }

    #[test]
    fn test_play_empty_slot_stays() {
        let dir = tempdir().unwrap();
        let outcome = confirm(MenuKind::FileSelect, MenuAction::Slot(0), dir.path(), START);
        assert_eq!(outcome.unwrap(), MenuOutcome::Stay);
    }

    #[test]
    fn test_navigation_between_menus() {
        let dir = tempdir().unwrap();
        let path = dir.path();
        assert_eq!(
            confirm(MenuKind::FileSelect, MenuAction::Register, path, START).unwrap(),
            MenuOutcome::Goto(AppState::Registration)
        );
        assert_eq!(
            confirm(MenuKind::FileSelect, MenuAction::Eliminate, path, START).unwrap(),
            MenuOutcome::Goto(AppState::Elimination)
        );
        assert_eq!(
            confirm(MenuKind::Registration, MenuAction::End, path, START).unwrap(),
            MenuOutcome::Goto(AppState::FileSelect)
        );
    }
}
