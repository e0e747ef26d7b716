//! Scene composition for the solar system showcase.
//!
//! Spawns the sun, project planets, tech satellites, orbit rings, and
//! the starfield backdrop, plus the cosmetic per-frame animation
//! (spin, corona pulse) that rides on the scene clock.

pub mod background;
pub mod bodies;
mod rings;

use bevy::prelude::*;

pub use self::bodies::{ShowcaseBody, TechSatellite};

/// Plugin aggregating all scene content.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Also initialized by InputPlugin; pulse_shells reads it even
        // when this plugin runs alone.
        app.init_resource::<crate::input::HoveredBody>();
        app.add_systems(
            Startup,
            (
                bodies::spawn_showcase,
                background::spawn_starfield,
                background::spawn_lighting,
            ),
        )
        .add_systems(
            Update,
            (bodies::spin_bodies, bodies::pulse_shells, rings::draw_orbit_rings),
        );
    }
}
