//! Orbit layout engine.
//!
//! Computes where any orbiting body sits at a given scene time, as a
//! pure function of its orbital parameters. The same formula places
//! project planets around the sun and tech satellites around their
//! planet; only the parameters differ.

use bevy::prelude::*;

use crate::focus::FocusController;
use crate::scene::bodies::ShowcaseBody;

/// Parameters of a circular orbit with optional vertical bobbing.
///
/// Attached as a component to every orbiting entity. The position at
/// time `t` is fully determined by these values; the engine keeps no
/// state of its own.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParams {
    /// Distance from the orbit center in scene units. Non-negative.
    pub orbit_radius: f32,
    /// Angular speed in radians per scene-second. Zero means the body
    /// holds a fixed angle; negative reverses direction.
    pub orbit_speed: f32,
    /// Initial angle, used to desynchronize bodies that share a radius
    /// and speed.
    pub phase_offset: f32,
    /// Bob amplitude above and below the orbital plane.
    pub vertical_amplitude: f32,
    /// Bob frequency in radians per scene-second.
    pub vertical_frequency: f32,
}

impl OrbitalParams {
    /// A flat orbit in the XZ plane with no vertical motion.
    pub fn planar(orbit_radius: f32, orbit_speed: f32, phase_offset: f32) -> Self {
        Self {
            orbit_radius,
            orbit_speed,
            phase_offset,
            vertical_amplitude: 0.0,
            vertical_frequency: 0.0,
        }
    }

    /// Same orbit with vertical bobbing added.
    pub fn with_bob(mut self, amplitude: f32, frequency: f32) -> Self {
        self.vertical_amplitude = amplitude;
        self.vertical_frequency = frequency;
        self
    }
}

/// Position of a body at scene time `t`, relative to its orbit center.
///
/// Total over all inputs: every `(params, t)` pair yields a defined
/// position, and equal inputs yield equal output. Periodic in `t` with
/// period `TAU / |orbit_speed|` when the speed is nonzero.
pub fn orbital_position(params: &OrbitalParams, t: f32) -> Vec3 {
    let angle = t * params.orbit_speed + params.phase_offset;
    Vec3::new(
        angle.cos() * params.orbit_radius,
        (t * params.vertical_frequency).sin() * params.vertical_amplitude,
        angle.sin() * params.orbit_radius,
    )
}

/// Scene-local animation clock.
///
/// Zero when the scene mounts, monotonically increasing until
/// teardown, advanced once per frame by the render loop. Threading
/// this value explicitly through [`orbital_position`] keeps the layout
/// engine replayable: any frame can be recomputed from the clock value
/// alone.
#[derive(Resource, Default, Clone, Debug)]
pub struct SceneClock {
    /// Elapsed scene time in seconds.
    pub elapsed: f32,
}

/// Plugin advancing the scene clock and propagating orbital positions.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(Update, (advance_clock, propagate_orbits).chain());
    }
}

/// Advance the scene clock by the frame's wall-time delta.
fn advance_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    clock.elapsed += time.delta_secs();
}

/// Write each orbiting body's position for the current frame.
///
/// Satellites are children of their planet, so writing the local
/// `Transform` handles both hierarchy levels with the same math. The
/// focused planet is skipped: it holds its last position so the
/// camera's selection snapshot stays on target while the briefing
/// panel is open.
pub fn propagate_orbits(
    clock: Res<SceneClock>,
    focus: Res<FocusController>,
    mut bodies: Query<(&OrbitalParams, &mut Transform, Option<&ShowcaseBody>)>,
) {
    for (params, mut transform, body) in bodies.iter_mut() {
        if let Some(body) = body {
            if focus.selected == Some(body.id) {
                continue;
            }
        }
        transform.translation = orbital_position(params, clock.elapsed);
    }
}
