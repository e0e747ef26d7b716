//! Pointer picking and selection input.
//!
//! Planets are picked in screen space: each body's center is projected
//! to the viewport and the nearest one within a generous hit radius
//! wins. Clicking the hovered planet routes through the
//! [`FocusController`]; Esc clears any selection.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::focus::{FocusController, MainCamera};
use crate::orbit::{OrbitalParams, SceneClock, orbital_position};
use crate::scene::ShowcaseBody;

/// Resource tracking the planet currently under the pointer.
#[derive(Resource, Default)]
pub struct HoveredBody {
    /// Entity of the hovered planet, if any.
    pub entity: Option<Entity>,
}

/// Plugin providing hover detection and click selection.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>().add_systems(
            Update,
            (detect_hover, handle_selection_click, draw_hover_ring).chain(),
        );
    }
}

/// Find the planet under the cursor, nearest first.
fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(Entity, &GlobalTransform, &ShowcaseBody)>,
    mut hovered: ResMut<HoveredBody>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        hovered.entity = None;
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let mut closest: Option<(Entity, f32)> = None;

    for (entity, transform, body) in bodies.iter() {
        let world_pos = transform.translation();

        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
            continue;
        };

        // Project a point on the planet's rim to get its apparent
        // radius in pixels, then double it for easier picking.
        let rim = world_pos + camera_transform.right() * body.radius;
        let Ok(rim_px) = camera.world_to_viewport(camera_transform, rim) else {
            continue;
        };
        let hit_radius = (rim_px - screen_pos).length().max(12.0) * 2.0;

        let dist = (cursor_pos - screen_pos).length();
        if dist < hit_radius && closest.is_none_or(|(_, d)| dist < d) {
            closest = Some((entity, dist));
        }
    }

    hovered.entity = closest.map(|(e, _)| e);
}

/// Route clicks and the Esc key through the focus controller.
fn handle_selection_click(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    hovered: Res<HoveredBody>,
    clock: Res<SceneClock>,
    mut focus: ResMut<FocusController>,
    bodies: Query<(&ShowcaseBody, &OrbitalParams)>,
    mut contexts: EguiContexts,
) {
    if keys.just_pressed(KeyCode::Escape) && focus.is_focused() {
        focus.deselect();
        info!("Selection cleared");
        return;
    }

    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    // Let the briefing panel keep its clicks.
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Some(entity) = hovered.entity else {
        return;
    };

    let Ok((body, params)) = bodies.get(entity) else {
        return;
    };

    // Snapshot where the planet is right now; the controller never
    // re-samples a moving body.
    let snapshot = orbital_position(params, clock.elapsed);
    focus.select(body.id, Some(snapshot));

    if focus.is_focused() {
        info!("Focused on {}", body.name);
    } else {
        info!("Selection cleared");
    }
}

/// Draw a highlight ring around the hovered planet.
fn draw_hover_ring(
    mut gizmos: Gizmos,
    hovered: Res<HoveredBody>,
    bodies: Query<(&GlobalTransform, &ShowcaseBody)>,
) {
    let Some(entity) = hovered.entity else {
        return;
    };

    let Ok((transform, body)) = bodies.get(entity) else {
        return;
    };

    let center = transform.translation();
    let ring_radius = body.radius * 1.5;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);

    let segments = 32;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = center + Vec3::new(ring_radius * t0.cos(), 0.0, ring_radius * t0.sin());
        let p1 = center + Vec3::new(ring_radius * t1.cos(), 0.0, ring_radius * t1.sin());

        gizmos.line(p0, p1, color);
    }
}
