//! Orbitfolio, an animated 3D project showcase.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbitfolio::focus::FocusPlugin;
use orbitfolio::input::InputPlugin;
use orbitfolio::orbit::OrbitPlugin;
use orbitfolio::scene::ScenePlugin;
use orbitfolio::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbitfolio".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins((OrbitPlugin, FocusPlugin, ScenePlugin, InputPlugin, UiPlugin))
        .run();
}
