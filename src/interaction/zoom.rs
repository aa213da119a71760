//! Camera zoom toward the selected body.
//!
//! The pan-orbit rig owns the camera transform; this module steers its focus
//! and radius targets, easing the current values the same way the rig does so
//! the approach is exponential (repeated `(1 - factor)` per frame).

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::MainCamera;
use crate::bodies::{BoundingRadius, CelestialBody};
use crate::interaction::{SelectionPhase, SelectionState};

/// Tunables for the zoom interpolation.
#[derive(Resource)]
pub struct ZoomSettings {
    /// Extra distance beyond the bounding sphere at which the camera parks.
    pub standoff_margin: f32,
    /// Per-frame interpolation factor for the camera distance.
    pub zoom_factor: f32,
    /// Per-frame interpolation factor for the look-at point.
    pub focus_factor: f32,
    /// Zoom completes when the camera is within this fraction of the standoff
    /// distance from the aim point.
    pub arrival_fraction: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            standoff_margin: 1.0,
            zoom_factor: 0.05,
            focus_factor: 0.1,
            arrival_fraction: 0.15,
        }
    }
}

/// Camera parking distance from a body's center.
pub fn standoff_distance(bounding_radius: f32, margin: f32) -> f32 {
    bounding_radius + margin
}

/// Point just outside the body's bounding sphere, facing the camera.
pub fn aim_point(body_pos: Vec3, camera_pos: Vec3, standoff: f32) -> Vec3 {
    let to_body = (body_pos - camera_pos).normalize_or_zero();
    body_pos - to_body * standoff
}

/// One exponential-smoothing step.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Whether the camera has arrived at the aim point.
pub fn reached(camera_pos: Vec3, aim: Vec3, standoff: f32, arrival_fraction: f32) -> bool {
    camera_pos.distance(aim) < standoff * arrival_fraction
}

/// Per-frame zoom integration while a body is selected.
///
/// The focus target always tracks the (orbiting) body so the camera follows
/// it even after the zoom completes. If the selected entity no longer
/// resolves, the selection clears instead of faulting.
pub fn zoom_camera(
    mut selection: ResMut<SelectionState>,
    settings: Res<ZoomSettings>,
    bodies: Query<(&GlobalTransform, &BoundingRadius), With<CelestialBody>>,
    mut rig: Query<(&Transform, &mut PanOrbitCamera), With<MainCamera>>,
) {
    let Some(target) = selection.target else {
        return;
    };
    let Ok((camera_transform, mut pan_orbit)) = rig.single_mut() else {
        return;
    };
    let Ok((body_transform, bounding)) = bodies.get(target.entity) else {
        // Fail closed: the selected body is gone.
        warn!("selected body {:?} no longer exists; clearing", target.id);
        let state = selection.as_mut();
        state.target = None;
        state.phase = SelectionPhase::Idle;
        return;
    };

    let body_pos = body_transform.translation();
    pan_orbit.target_focus = body_pos;
    pan_orbit.focus = pan_orbit.focus.lerp(body_pos, settings.focus_factor);
    pan_orbit.force_update = true;

    if selection.phase != SelectionPhase::Zooming {
        return;
    }

    let standoff = standoff_distance(bounding.0, settings.standoff_margin);
    pan_orbit.target_radius = standoff;
    if let Some(radius) = pan_orbit.radius {
        pan_orbit.radius = Some(approach(radius, standoff, settings.zoom_factor));
    }

    let aim = aim_point(body_pos, camera_transform.translation, standoff);
    if reached(camera_transform.translation, aim, standoff, settings.arrival_fraction) {
        selection.phase = SelectionPhase::Selected;
        info!("camera arrived at {:?}", target.id);
    }
}
