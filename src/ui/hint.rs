//! Bottom-center instruction hint.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::focus::FocusController;

/// Show a one-line usage hint at the bottom of the viewport.
pub fn hint_bar(mut contexts: EguiContexts, focus: Res<FocusController>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let text = if focus.is_focused() {
        "Click the planet again or press Esc to return"
    } else {
        "Click on a planet to explore"
    };

    egui::Area::new(egui::Id::new("hint_bar"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_premultiplied(16, 16, 26, 200))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(60, 60, 80),
                ))
                .corner_radius(12)
                .inner_margin(egui::Margin::symmetric(14, 6))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(text)
                            .color(egui::Color32::from_rgb(150, 150, 170))
                            .monospace()
                            .size(11.0),
                    );
                });
        });
}
