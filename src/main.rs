use bevy::prelude::*;
use rustlink::config::GameConfig;
use rustlink::entities::PlayerPlugin;
use rustlink::events::EventsPlugin;
use rustlink::map::MapPlugin;
use rustlink::menu::MenuPlugin;
use rustlink::screen::{window_plugin, ScreenPlugin};
use rustlink::state::AppState;
use rustlink::title::TitlePlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(window_plugin()),
        )
        .init_state::<AppState>()
        .init_resource::<GameConfig>()
        .add_plugins((
            ScreenPlugin,
            TitlePlugin,
            MenuPlugin,
            MapPlugin,
            PlayerPlugin,
            EventsPlugin,
        ))
        .run()
}
