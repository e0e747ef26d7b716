//! Sun, project planets, and tech satellites.

use bevy::prelude::*;

use crate::focus::BodyId;
use crate::input::HoveredBody;
use crate::orbit::{SceneClock, orbital_position};
use crate::showcase::{PROJECTS, PlanetKind, ProjectInfo, SizeClass};

/// Extra glow-shell scale while the parent planet is hovered.
const HOVER_GLOW_BOOST: f32 = 1.3;

/// Component marking a selectable project planet.
#[derive(Component)]
pub struct ShowcaseBody {
    /// Identifier matching the project registry.
    pub id: BodyId,
    /// Planet mesh radius in scene units.
    pub radius: f32,
    /// Display name.
    pub name: &'static str,
}

/// Component marking a tech-stack satellite.
#[derive(Component)]
pub struct TechSatellite {
    /// Tech-stack entry this satellite represents.
    pub tech: &'static str,
}

/// Marker for the central sun.
#[derive(Component)]
pub struct Sun;

/// Continuous rotation around the local Y axis.
#[derive(Component)]
pub struct Spin {
    /// Radians per second.
    pub rate: f32,
}

/// Breathing scale animation for glow shells.
#[derive(Component)]
pub struct Pulse {
    pub base_scale: f32,
    pub amplitude: f32,
    /// Radians per scene-second.
    pub frequency: f32,
}

/// Spawn the sun and every project planet with its satellites.
pub fn spawn_showcase(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_sun(&mut commands, &mut meshes, &mut materials);

    for project in PROJECTS {
        spawn_planet(&mut commands, &mut meshes, &mut materials, project);
    }

    info!("Spawned {} project planets", PROJECTS.len());
}

fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let gold = Color::srgb(1.0, 0.84, 0.0);
    let sphere = meshes.add(Sphere::new(1.0));

    let core = materials.add(StandardMaterial {
        base_color: gold,
        emissive: Color::srgb(1.0, 0.55, 0.0).to_linear() * 4.0,
        ..default()
    });
    let corona = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.65, 0.0).with_alpha(0.1),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let outer_glow = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.8, 0.0).with_alpha(0.2),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Mesh3d(sphere.clone()),
            MeshMaterial3d(core),
            Transform::default(),
            Sun,
            Spin { rate: 0.12 },
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(sphere.clone()),
                MeshMaterial3d(corona),
                Transform::default().with_scale(Vec3::splat(2.5)),
                Pulse {
                    base_scale: 2.5,
                    amplitude: 0.1,
                    frequency: 0.5,
                },
            ));
            parent.spawn((
                Mesh3d(sphere),
                MeshMaterial3d(outer_glow),
                Transform::default().with_scale(Vec3::splat(1.8)),
            ));
        });

    // The sun is the scene's light source.
    commands.spawn((
        PointLight {
            color: gold,
            intensity: 2_000_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));
}

fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    project: &'static ProjectInfo,
) {
    let radius = project.size.radius();
    let color = project.color();
    let params = project.orbital_params();
    let finish = project.kind.finish();

    let surface = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * finish.glow,
        metallic: finish.metallic,
        perceptual_roughness: finish.roughness,
        ..default()
    });
    let glow = materials.add(StandardMaterial {
        base_color: color.with_alpha(0.2),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let planet_mesh = meshes.add(Sphere::new(radius));

    commands
        .spawn((
            Mesh3d(planet_mesh.clone()),
            MeshMaterial3d(surface),
            Transform::from_translation(orbital_position(&params, 0.0)),
            params,
            ShowcaseBody {
                id: project.id,
                radius,
                name: project.title,
            },
            Spin { rate: 0.5 },
        ))
        .with_children(|parent| {
            // Atmospheric glow shell.
            parent.spawn((
                Mesh3d(planet_mesh.clone()),
                MeshMaterial3d(glow),
                Transform::default().with_scale(Vec3::splat(1.4)),
                Pulse {
                    base_scale: 1.4,
                    amplitude: 0.05,
                    frequency: 2.0,
                },
            ));

            // Cloud layer on gas and oceanic planets.
            if matches!(project.kind, PlanetKind::Gas | PlanetKind::Oceanic) {
                let clouds = materials.add(StandardMaterial {
                    base_color: Color::WHITE.with_alpha(0.15),
                    alpha_mode: AlphaMode::Blend,
                    perceptual_roughness: 1.0,
                    ..default()
                });
                parent.spawn((
                    Mesh3d(planet_mesh),
                    MeshMaterial3d(clouds),
                    Transform::default().with_scale(Vec3::splat(1.05)),
                ));
            }

            // Large planets get an orbital ring.
            if project.size == SizeClass::Large {
                let ring_mesh = meshes.add(Torus {
                    minor_radius: 0.03,
                    major_radius: radius * 1.6,
                });
                let ring = materials.add(StandardMaterial {
                    base_color: color.with_alpha(0.5),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                });
                parent.spawn((
                    Mesh3d(ring_mesh),
                    MeshMaterial3d(ring),
                    Transform::from_rotation(Quat::from_rotation_x(
                        std::f32::consts::PI / 2.5,
                    )),
                ));
            }

            // One satellite per tech-stack entry.
            let cube = meshes.add(Cuboid::new(0.08, 0.08, 0.08));
            let satellite_material = materials.add(StandardMaterial {
                base_color: color,
                emissive: color.to_linear() * 0.5,
                metallic: 0.9,
                perceptual_roughness: 0.2,
                ..default()
            });
            for (i, tech) in project.tech.iter().enumerate() {
                let sat_params = project.satellite_params(i);
                parent.spawn((
                    Mesh3d(cube.clone()),
                    MeshMaterial3d(satellite_material.clone()),
                    Transform::from_translation(orbital_position(&sat_params, 0.0)),
                    sat_params,
                    TechSatellite { tech },
                ));
            }
        });
}

/// Rotate planets and the sun around their own axis.
pub fn spin_bodies(time: Res<Time>, mut spinners: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in spinners.iter_mut() {
        transform.rotate_y(spin.rate * time.delta_secs());
    }
}

/// Breathe the glow shells in and out on the scene clock. A shell
/// whose planet is under the pointer swells by [`HOVER_GLOW_BOOST`].
pub fn pulse_shells(
    clock: Res<SceneClock>,
    hovered: Res<HoveredBody>,
    mut shells: Query<(&Pulse, &mut Transform, Option<&ChildOf>)>,
) {
    for (pulse, mut transform, child_of) in shells.iter_mut() {
        let mut scale =
            pulse.base_scale * (1.0 + pulse.amplitude * (pulse.frequency * clock.elapsed).sin());
        if child_of.is_some_and(|c| hovered.entity == Some(c.parent())) {
            scale *= HOVER_GLOW_BOOST;
        }
        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn shell_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SceneClock::default());
        app.init_resource::<HoveredBody>();
        app.add_systems(Update, pulse_shells);

        let planet = app.world_mut().spawn(Transform::default()).id();
        let shell = app
            .world_mut()
            .spawn((
                Pulse {
                    base_scale: 1.4,
                    amplitude: 0.05,
                    frequency: 2.0,
                },
                Transform::default(),
                ChildOf(planet),
            ))
            .id();
        (app, planet, shell)
    }

    #[test]
    fn test_glow_shell_swells_while_planet_hovered() {
        let (mut app, planet, shell) = shell_app();

        // Clock stays at zero, so the pulse term contributes nothing.
        app.update();
        let resting = app.world().get::<Transform>(shell).unwrap().scale.x;
        assert_relative_eq!(resting, 1.4, epsilon = 1e-6);

        app.world_mut().resource_mut::<HoveredBody>().entity = Some(planet);
        app.update();
        let boosted = app.world().get::<Transform>(shell).unwrap().scale.x;
        assert_relative_eq!(boosted, 1.4 * HOVER_GLOW_BOOST, epsilon = 1e-6);

        app.world_mut().resource_mut::<HoveredBody>().entity = None;
        app.update();
        let released = app.world().get::<Transform>(shell).unwrap().scale.x;
        assert_relative_eq!(released, resting, epsilon = 1e-6);
    }

    #[test]
    fn test_hovering_one_planet_leaves_other_shells_alone() {
        let (mut app, _planet, shell) = shell_app();

        let other = app.world_mut().spawn(Transform::default()).id();
        app.world_mut().resource_mut::<HoveredBody>().entity = Some(other);
        app.update();

        let scale = app.world().get::<Transform>(shell).unwrap().scale.x;
        assert_relative_eq!(scale, 1.4, epsilon = 1e-6);
    }
}
