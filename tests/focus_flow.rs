//! End-to-end selection and camera flow.
//!
//! Drives the focus controller against engine-sampled snapshots the
//! way the click handler does, and runs the orbit propagation system
//! in a headless app to check the focus-freeze behavior.

use approx::assert_relative_eq;
use bevy::prelude::*;

use orbitfolio::focus::{BodyId, DEFAULT_VIEWPOINT, FOCUS_OFFSET, FocusController};
use orbitfolio::orbit::{OrbitalParams, SceneClock, orbital_position, propagate_orbits};
use orbitfolio::scene::ShowcaseBody;
use orbitfolio::showcase::PROJECTS;

#[test]
fn test_focus_converges_then_releases() {
    let project = &PROJECTS[0];
    let params = project.orbital_params();
    let mut focus = FocusController::default();

    // Click at t=12.5: snapshot where the planet is right now.
    let snapshot = orbital_position(&params, 12.5);
    focus.select(project.id, Some(snapshot));

    let mut camera = DEFAULT_VIEWPOINT;
    for _ in 0..400 {
        camera = focus.tick(camera);
    }
    let goal = snapshot + FOCUS_OFFSET;
    assert_relative_eq!(camera.x, goal.x, epsilon = 1e-3);
    assert_relative_eq!(camera.y, goal.y, epsilon = 1e-3);
    assert_relative_eq!(camera.z, goal.z, epsilon = 1e-3);

    // Second click on the same planet releases the focus.
    focus.select(project.id, Some(snapshot));
    assert!(!focus.is_focused());

    for _ in 0..400 {
        camera = focus.tick(camera);
    }
    assert_relative_eq!(camera.x, DEFAULT_VIEWPOINT.x, epsilon = 1e-3);
    assert_relative_eq!(camera.y, DEFAULT_VIEWPOINT.y, epsilon = 1e-3);
    assert_relative_eq!(camera.z, DEFAULT_VIEWPOINT.z, epsilon = 1e-3);
}

#[test]
fn test_switching_planets_takes_fresh_snapshot() {
    let first = &PROJECTS[0];
    let second = &PROJECTS[1];
    let mut focus = FocusController::default();

    let first_snapshot = orbital_position(&first.orbital_params(), 3.0);
    focus.select(first.id, Some(first_snapshot));

    // Time passes before the second click; its snapshot is sampled at
    // the later clock value, not carried over.
    let second_snapshot = orbital_position(&second.orbital_params(), 9.0);
    focus.select(second.id, Some(second_snapshot));

    assert_eq!(focus.selected, Some(second.id));
    assert_eq!(focus.camera_target, Some(second_snapshot));
    assert_ne!(focus.camera_target, Some(first_snapshot));
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<FocusController>();
    app.insert_resource(SceneClock::default());
    app.add_systems(Update, propagate_orbits);
    app
}

#[test]
fn test_selected_planet_freezes_until_deselected() {
    let mut app = headless_app();

    let id = BodyId("nebula-api");
    let params = OrbitalParams::planar(4.0, 0.3, 0.0);
    let entity = app
        .world_mut()
        .spawn((
            params,
            Transform::default(),
            ShowcaseBody {
                id,
                radius: 0.7,
                name: "NEBULA API",
            },
        ))
        .id();

    // Unselected: position follows the clock.
    app.world_mut().resource_mut::<SceneClock>().elapsed = 1.0;
    app.update();
    let before = app.world().get::<Transform>(entity).unwrap().translation;
    assert_eq!(before, orbital_position(&params, 1.0));

    // Selected: the planet holds its snapshot position.
    app.world_mut()
        .resource_mut::<FocusController>()
        .select(id, Some(before));
    app.world_mut().resource_mut::<SceneClock>().elapsed = 5.0;
    app.update();
    let frozen = app.world().get::<Transform>(entity).unwrap().translation;
    assert_eq!(frozen, before);

    // Deselected: motion resumes from the current clock.
    app.world_mut().resource_mut::<FocusController>().deselect();
    app.update();
    let resumed = app.world().get::<Transform>(entity).unwrap().translation;
    assert_eq!(resumed, orbital_position(&params, 5.0));
}

#[test]
fn test_unselected_bodies_keep_moving_while_one_is_focused() {
    let mut app = headless_app();

    let focused_id = BodyId("nebula-api");
    let focused_params = OrbitalParams::planar(4.0, 0.3, 0.0);
    app.world_mut().spawn((
        focused_params,
        Transform::default(),
        ShowcaseBody {
            id: focused_id,
            radius: 0.7,
            name: "NEBULA API",
        },
    ));

    let other_params = OrbitalParams::planar(6.0, 0.25, 0.0);
    let other = app
        .world_mut()
        .spawn((
            other_params,
            Transform::default(),
            ShowcaseBody {
                id: BodyId("stellar-ui"),
                radius: 0.55,
                name: "STELLAR UI",
            },
        ))
        .id();

    app.world_mut()
        .resource_mut::<FocusController>()
        .select(focused_id, Some(Vec3::new(4.0, 0.0, 0.0)));

    app.world_mut().resource_mut::<SceneClock>().elapsed = 7.0;
    app.update();

    let other_pos = app.world().get::<Transform>(other).unwrap().translation;
    assert_eq!(other_pos, orbital_position(&other_params, 7.0));
}
