//! Turns keyboard input and the move timer into game events and hands
//! each one to the player or the map.

mod systems;

pub use systems::*;

use crate::entities::{Direction, Player, TickOutcome};
use crate::map::{MapError, Overworld};
use crate::state::AppState;
use bevy::input::keyboard::KeyCode;
use bevy::input::ButtonState;
use bevy::prelude::*;
use std::collections::VecDeque;

/// Something the overworld reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Quit,
    KeyDown(Direction),
    KeyUp,
    /// The move timer fired
    Tick,
}

/// Whether the game keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Events waiting to be dispatched, in arrival order
#[derive(Resource, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Fixed-interval timer driving player movement
#[derive(Resource, Deref, DerefMut)]
pub struct MoveTimer(pub Timer);

/// Translate a key press or release. Keys the overworld doesn't use give
/// `None`.
pub fn from_key(key: KeyCode, state: ButtonState) -> Option<GameEvent> {
    let direction = match key {
        KeyCode::ArrowLeft => Direction::Left,
        KeyCode::ArrowRight => Direction::Right,
        KeyCode::ArrowUp => Direction::Up,
        KeyCode::ArrowDown => Direction::Down,
        KeyCode::Escape if state == ButtonState::Pressed => return Some(GameEvent::Quit),
        _ => return None,
    };
    Some(match state {
        ButtonState::Pressed => GameEvent::KeyDown(direction),
        ButtonState::Released => GameEvent::KeyUp,
    })
}

/// Route one event to its handler
pub fn dispatch(
    event: GameEvent,
    player: &mut Player,
    overworld: &mut Overworld,
) -> Result<Flow, MapError> {
    match event {
        GameEvent::Quit => return Ok(Flow::Quit),
        GameEvent::KeyDown(direction) => player.key_down(direction),
        GameEvent::KeyUp => player.key_up(),
        GameEvent::Tick => {
            if let TickOutcome::LeftRegion(direction) = player.tick(&*overworld) {
                overworld.switch(direction)?;
                player.switch_maps(direction);
            }
        }
    }
    Ok(Flow::Continue)
}

/// Plugin running the overworld event loop
pub struct EventsPlugin;

impl Plugin for EventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Overworld), setup_event_loop)
            .add_systems(
                Update,
                (queue_keyboard_events, queue_move_ticks, process_events)
                    .chain()
                    .before(crate::entities::sync_player_sprite)
                    .before(crate::map::update_map_display)
                    .run_if(
                        in_state(AppState::Overworld)
                            .and(resource_exists::<Player>)
                            .and(resource_exists::<Overworld>),
                    ),
            )
            .add_systems(OnExit(AppState::Overworld), teardown_event_loop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{small_overworld, RegionIndex};
    use crate::screen::ScreenRect;
    use bevy::math::UVec2;

    fn small_player() -> Player {
        let window = ScreenRect::new(10, 20, 8, 6);
        Player::new([[UVec2::new(2, 2); 2]; 4], window)
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            from_key(KeyCode::ArrowLeft, ButtonState::Pressed),
            Some(GameEvent::KeyDown(Direction::Left))
        );
        assert_eq!(
            from_key(KeyCode::ArrowDown, ButtonState::Released),
            Some(GameEvent::KeyUp)
        );
        assert_eq!(
            from_key(KeyCode::Escape, ButtonState::Pressed),
            Some(GameEvent::Quit)
        );
        assert_eq!(from_key(KeyCode::Escape, ButtonState::Released), None);
        assert_eq!(from_key(KeyCode::KeyQ, ButtonState::Pressed), None);
    }

    #[test]
    fn test_queue_keeps_arrival_order() {
        let mut queue = EventQueue::default();
        queue.push(GameEvent::KeyDown(Direction::Up));
        queue.push(GameEvent::Tick);
        queue.push(GameEvent::KeyUp);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(GameEvent::KeyDown(Direction::Up)));
        assert_eq!(queue.pop(), Some(GameEvent::Tick));
        assert_eq!(queue.pop(), Some(GameEvent::KeyUp));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_key_events_reach_player() {
        let mut player = small_player();
        let mut overworld = small_overworld(RegionIndex::new(1, 0));

        let flow = dispatch(GameEvent::KeyDown(Direction::Up), &mut player, &mut overworld);
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert!(player.is_moving());
        assert_eq!(player.facing(), Direction::Up);

        dispatch(GameEvent::KeyUp, &mut player, &mut overworld).unwrap();
        assert!(!player.is_moving());
    }

    #[test]
    fn test_quit() {
        let mut player = small_player();
        let mut overworld = small_overworld(RegionIndex::new(1, 0));
        assert_eq!(
            dispatch(GameEvent::Quit, &mut player, &mut overworld).unwrap(),
            Flow::Quit
        );
    }

    #[test]
    fn test_tick_off_the_edge_switches_region() {
        let mut player = small_player();
        let mut overworld = small_overworld(RegionIndex::new(1, 0));

        dispatch(GameEvent::KeyDown(Direction::Right), &mut player, &mut overworld).unwrap();
        dispatch(GameEvent::Tick, &mut player, &mut overworld).unwrap();

        assert_eq!(overworld.index(), RegionIndex::new(2, 0));
        assert_eq!(player.rect().left(), 10);
    }

    #[test]
    fn test_switch_off_the_world_is_an_error() {
        let mut player = small_player();
        let mut overworld = small_overworld(RegionIndex::new(2, 0));

        dispatch(GameEvent::KeyDown(Direction::Right), &mut player, &mut overworld).unwrap();
        let before = player.rect();
        let result = dispatch(GameEvent::Tick, &mut player, &mut overworld);

        assert!(matches!(result, Err(MapError::OutOfBounds { .. })));
        assert_eq!(overworld.index(), RegionIndex::new(2, 0));
        assert_eq!(player.rect().top_left(), before.top_left());
    }

    #[test]
    fn test_tick_while_stopped_does_nothing() {
        let mut player = small_player();
        let mut overworld = small_overworld(RegionIndex::new(0, 1));
        let before = player.rect();

        dispatch(GameEvent::Tick, &mut player, &mut overworld).unwrap();
        assert_eq!(player.rect(), before);
        assert_eq!(overworld.index(), RegionIndex::new(0, 1));
    }
}
