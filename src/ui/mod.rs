//! egui overlay: briefing panel, body labels, and the usage hint.

pub mod icons;

mod hint;
mod labels;
mod panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font installation MUST run before any system using icons.
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (labels::draw_body_labels, panel::briefing_panel, hint::hint_bar)
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
