//! Starfield and lighting backdrop.

use bevy::prelude::*;
use rand::Rng;

/// How many stars to scatter on the background shell.
const STAR_COUNT: usize = 400;

/// Spawn a starfield on a far spherical shell around the scene.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    let star_mesh = meshes.add(Sphere::new(0.08));

    let mut rng = rand::thread_rng();

    let mut spawned = 0;
    while spawned < STAR_COUNT {
        let dir = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        // Rejection sample for a uniform direction.
        if dir.length_squared() > 1.0 || dir.length_squared() < 1e-4 {
            continue;
        }

        let pos = dir.normalize() * rng.gen_range(40.0..60.0);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos).with_scale(Vec3::splat(scale)),
        ));
        spawned += 1;
    }

    info!("Spawned {STAR_COUNT} background stars");
}

/// Spawn ambient and directional fill; the sun's point light does the
/// rest.
pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });

    // Soft directional fill from above, so the night sides of planets
    // far from the sun stay readable.
    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene lighting initialized");
}
