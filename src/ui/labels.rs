//! Floating name labels for planets and tech satellites.
//!
//! Labels are painted directly on a background egui layer at each
//! body's projected screen position.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::focus::MainCamera;
use crate::input::HoveredBody;
use crate::scene::{ShowcaseBody, TechSatellite};

/// Draw planet titles above each planet and tech names beside each
/// satellite.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    planets: Query<(Entity, &ShowcaseBody, &GlobalTransform)>,
    satellites: Query<(&TechSatellite, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    hovered: Res<HoveredBody>,
) {
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (entity, body, transform) in planets.iter() {
                // Anchor the title above the planet's north pole.
                let world_pos = transform.translation() + Vec3::Y * (body.radius + 0.5);
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos)
                else {
                    continue;
                };

                let is_hovered = hovered.entity == Some(entity);
                let size = if is_hovered { 16.0 } else { 14.0 };
                paint_label(
                    painter,
                    egui::pos2(screen_pos.x, screen_pos.y),
                    body.name,
                    egui::FontId::proportional(size),
                    if is_hovered {
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 245)
                    } else {
                        egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230)
                    },
                );
            }

            for (satellite, transform) in satellites.iter() {
                let Ok(screen_pos) =
                    camera.world_to_viewport(camera_transform, transform.translation())
                else {
                    continue;
                };

                paint_label(
                    painter,
                    egui::pos2(screen_pos.x, screen_pos.y - 10.0),
                    satellite.tech,
                    egui::FontId::monospace(9.0),
                    egui::Color32::from_rgba_unmultiplied(190, 190, 205, 200),
                );
            }
        });
}

/// Centered text with a one-pixel shadow for readability.
fn paint_label(
    painter: &egui::Painter,
    pos: egui::Pos2,
    text: &str,
    font: egui::FontId,
    color: egui::Color32,
) {
    painter.text(
        pos + egui::vec2(1.0, 1.0),
        egui::Align2::CENTER_CENTER,
        text,
        font.clone(),
        egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
    );
    painter.text(pos, egui::Align2::CENTER_CENTER, text, font, color);
}
