//! Selection tracking and camera convergence.
//!
//! At most one body is selected at a time. Selecting a planet takes a
//! position snapshot and drifts the camera toward it; deselecting (or
//! selecting the same planet again) drifts the camera back to the
//! default viewpoint.

use bevy::prelude::*;

/// Opaque identifier for a selectable body. Compared by equality only;
/// the controller makes no existence guarantee about ids it is handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub &'static str);

/// Camera position when nothing is selected, looking at the sun.
pub const DEFAULT_VIEWPOINT: Vec3 = Vec3::new(0.0, 8.0, 12.0);

/// Offset from a focused planet to the camera's convergence goal,
/// slightly above and behind so the planet fills the lower frame.
pub const FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 3.0);

/// Per-frame blend ratio toward the goal. Fixed per frame rather than
/// dt-scaled, so convergence speed tracks the display refresh rate.
pub const CONVERGENCE: f32 = 0.05;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Two-state camera controller: idle (no selection, drifting to the
/// default viewpoint) or focused (selection active, drifting to the
/// selection snapshot plus [`FOCUS_OFFSET`]).
#[derive(Resource, Default, Clone, Debug)]
pub struct FocusController {
    /// Currently selected body, if any.
    pub selected: Option<BodyId>,
    /// World-position snapshot taken at the moment of selection. Not
    /// re-sampled afterwards; the orbit engine freezes the selected
    /// planet so the snapshot stays on target.
    pub camera_target: Option<Vec3>,
}

impl FocusController {
    /// Handle a selection event.
    ///
    /// Selecting the already-selected id toggles the selection off.
    /// Any other id becomes the new selection with `snapshot` as the
    /// convergence target. Unknown ids are accepted; it is the
    /// caller's job to resolve the snapshot, and a caller that cannot
    /// resolve one passes `None`, leaving the camera at the default
    /// viewpoint.
    pub fn select(&mut self, id: BodyId, snapshot: Option<Vec3>) {
        if self.selected == Some(id) {
            self.deselect();
        } else {
            self.selected = Some(id);
            self.camera_target = snapshot;
        }
    }

    /// Clear the selection and its snapshot. No-op when already idle.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.camera_target = None;
    }

    /// Whether a selection is active.
    pub fn is_focused(&self) -> bool {
        self.selected.is_some()
    }

    /// Camera position goal and look-at goal for the current state.
    pub fn camera_goal(&self) -> (Vec3, Vec3) {
        match self.camera_target {
            Some(target) => (target + FOCUS_OFFSET, target),
            None => (DEFAULT_VIEWPOINT, Vec3::ZERO),
        }
    }

    /// One smoothing step: blend `current` toward the position goal.
    pub fn tick(&self, current: Vec3) -> Vec3 {
        let (goal, _) = self.camera_goal();
        current.lerp(goal, CONVERGENCE)
    }
}

/// Plugin providing the main camera and its per-frame convergence.
pub struct FocusPlugin;

impl Plugin for FocusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusController>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, converge_camera);
    }
}

/// Spawn the main camera at the default viewpoint.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 60f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(DEFAULT_VIEWPOINT).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Blend the camera toward the controller's goal every frame.
fn converge_camera(
    focus: Res<FocusController>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let (_, look_at) = focus.camera_goal();
    transform.translation = focus.tick(transform.translation);
    transform.look_at(look_at, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: BodyId = BodyId("alpha");
    const BETA: BodyId = BodyId("beta");

    #[test]
    fn test_select_then_reselect_toggles_off() {
        let mut focus = FocusController::default();
        focus.select(ALPHA, Some(Vec3::new(4.0, 0.0, 0.0)));
        assert!(focus.is_focused());

        focus.select(ALPHA, Some(Vec3::new(4.0, 0.0, 0.0)));
        assert!(!focus.is_focused());
        assert_eq!(focus.camera_target, None);
    }

    #[test]
    fn test_select_other_body_retargets() {
        let mut focus = FocusController::default();
        focus.select(ALPHA, Some(Vec3::new(4.0, 0.0, 0.0)));
        focus.select(BETA, Some(Vec3::new(0.0, 0.0, -6.0)));

        assert_eq!(focus.selected, Some(BETA));
        assert_eq!(focus.camera_target, Some(Vec3::new(0.0, 0.0, -6.0)));
    }

    #[test]
    fn test_deselect_when_idle_is_noop() {
        let mut focus = FocusController::default();
        focus.deselect();
        assert_eq!(focus.selected, None);
        assert_eq!(focus.camera_target, None);
    }

    #[test]
    fn test_unknown_id_selects_without_target() {
        let mut focus = FocusController::default();
        focus.select(BodyId("no-such-planet"), None);

        assert!(focus.is_focused());
        // With no snapshot the camera keeps drifting to the default.
        let (goal, look_at) = focus.camera_goal();
        assert_eq!(goal, DEFAULT_VIEWPOINT);
        assert_eq!(look_at, Vec3::ZERO);
    }

    #[test]
    fn test_focused_goal_is_offset_snapshot() {
        let mut focus = FocusController::default();
        let snapshot = Vec3::new(-3.0, 0.2, 1.5);
        focus.select(ALPHA, Some(snapshot));

        let (goal, look_at) = focus.camera_goal();
        assert_eq!(goal, snapshot + FOCUS_OFFSET);
        assert_eq!(look_at, snapshot);
    }

    #[test]
    fn test_tick_moves_monotonically_toward_goal() {
        let mut focus = FocusController::default();
        focus.select(ALPHA, Some(Vec3::new(10.0, 0.0, 0.0)));
        let (goal, _) = focus.camera_goal();

        let mut pos = DEFAULT_VIEWPOINT;
        let mut dist = (goal - pos).length();
        for _ in 0..300 {
            pos = focus.tick(pos);
            let next = (goal - pos).length();
            assert!(next <= dist);
            dist = next;
        }
        assert!(dist < 0.01, "camera did not converge, still {dist} away");
    }
}
