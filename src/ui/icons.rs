//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource tracking whether the icon fonts have been installed.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font into the egui context.
/// Runs in `EguiPrimaryContextPass` where the context is ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Close button in the briefing panel.
pub const CLOSE: &str = egui_phosphor::regular::X;

/// Tech-stack section header.
pub const ROCKET: &str = egui_phosphor::regular::ROCKET;

/// Challenge section header.
pub const TARGET: &str = egui_phosphor::regular::TARGET;

/// Solution section header.
pub const LIGHTBULB: &str = egui_phosphor::regular::LIGHTBULB;

/// Impact-metrics section header.
pub const TREND_UP: &str = egui_phosphor::regular::TREND_UP;

/// Feature list section header.
pub const CHECKS: &str = egui_phosphor::regular::LIST_CHECKS;

/// Live deployment link.
pub const LINK_OUT: &str = egui_phosphor::regular::ARROW_SQUARE_OUT;

/// Source repository link.
pub const GITHUB: &str = egui_phosphor::regular::GITHUB_LOGO;
