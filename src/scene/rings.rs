//! Orbital path rings.

use bevy::prelude::*;

use crate::showcase::PROJECTS;

/// Faint cyan used for the path rings.
const RING_COLOR: Color = Color::srgba(0.0, 0.83, 1.0, 0.1);

const SEGMENTS: usize = 128;

/// Draw a ring in the orbital plane for each distinct project orbit.
pub fn draw_orbit_rings(mut gizmos: Gizmos) {
    let mut radii: Vec<f32> = PROJECTS.iter().map(|p| p.orbit_radius).collect();
    radii.sort_by(f32::total_cmp);
    radii.dedup();

    for radius in radii {
        for i in 0..SEGMENTS {
            let t0 = (i as f32 / SEGMENTS as f32) * std::f32::consts::TAU;
            let t1 = ((i + 1) as f32 / SEGMENTS as f32) * std::f32::consts::TAU;

            let p0 = Vec3::new(radius * t0.cos(), 0.0, radius * t0.sin());
            let p1 = Vec3::new(radius * t1.cos(), 0.0, radius * t1.sin());

            gizmos.line(p0, p1, RING_COLOR);
        }
    }
}
