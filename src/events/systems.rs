use super::{dispatch, from_key, EventQueue, Flow, GameEvent, MoveTimer};
use crate::config::GameConfig;
use crate::entities::Player;
use crate::map::Overworld;
use crate::save::{store_slot, ActiveSlot};
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

pub fn setup_event_loop(mut commands: Commands, config: Res<GameConfig>) {
    commands.init_resource::<EventQueue>();
    commands.insert_resource(MoveTimer(Timer::new(
        config.move_interval,
        TimerMode::Repeating,
    )));
}

pub fn teardown_event_loop(mut commands: Commands) {
    commands.remove_resource::<EventQueue>();
    commands.remove_resource::<MoveTimer>();
}

/// Translates keyboard messages into queued events, in arrival order
pub fn queue_keyboard_events(
    mut keyboard: MessageReader<KeyboardInput>,
    mut queue: ResMut<EventQueue>,
) {
    for input in keyboard.read() {
        if input.repeat {
            continue;
        }
        if let Some(event) = from_key(input.key_code, input.state) {
            queue.push(event);
        }
    }
}

/// Queues one tick per elapsed move interval
pub fn queue_move_ticks(
    time: Res<Time>,
    mut timer: ResMut<MoveTimer>,
    mut queue: ResMut<EventQueue>,
) {
    timer.tick(time.delta());
    for _ in 0..timer.times_finished_this_tick() {
        queue.push(GameEvent::Tick);
    }
}

/// Drains the queue, handing each event to its handler
pub fn process_events(
    mut queue: ResMut<EventQueue>,
    mut player: ResMut<Player>,
    mut overworld: ResMut<Overworld>,
    config: Res<GameConfig>,
    active_slot: Option<ResMut<ActiveSlot>>,
    mut exit: MessageWriter<AppExit>,
) {
    while let Some(event) = queue.pop() {
        match dispatch(event, &mut player, &mut overworld) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => {
                if let Some(mut active) = active_slot {
                    active.save.region = overworld.index();
                    if let Err(e) = store_slot(&config.save_directory, active.slot, &active.save) {
                        warn!("Failed to save progress: {}", e);
                    }
                }
                info!("Quitting from region {}", overworld.index());
                queue.clear();
                exit.write(AppExit::Success);
                return;
            }
            Err(e) => {
                error!("Map error, shutting down: {}", e);
                queue.clear();
                exit.write(AppExit::error());
                return;
            }
        }
    }
}
