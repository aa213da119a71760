//! Per-frame kinematic updates: orbital revolution and self-rotation.
//!
//! Pure state advance with no branching on user state. Bodies whose focus has
//! not spawned yet (Earth while its model loads) are skipped for the frame.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::bodies::{BodyId, CelestialBody, Orbit, Spin};

pub mod kinematics;

pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (update_orbits, update_spin));
    }
}

/// Advance every orbit by one frame.
///
/// Focus positions resolve in dependency order: stationary bodies seed the
/// map, then each pass places every body whose focus is already placed. Two
/// passes cover the sun → planet → moon chain; the loop is general.
pub fn update_orbits(
    anchors: Query<(&Transform, &CelestialBody), Without<Orbit>>,
    mut bodies: Query<(&mut Orbit, &mut Transform, &CelestialBody)>,
) {
    let mut placed: HashMap<BodyId, Vec3> = HashMap::new();
    for (transform, body) in &anchors {
        placed.insert(body.id, transform.translation);
    }

    loop {
        let mut progress = false;
        for (mut orbit, mut transform, body) in &mut bodies {
            if placed.contains_key(&body.id) {
                continue;
            }
            let Some(&focus) = placed.get(&orbit.focus) else {
                continue;
            };
            orbit.angle += orbit.speed;
            let position = kinematics::orbit_position(focus, orbit.radius, orbit.angle);
            transform.translation = position;
            placed.insert(body.id, position);
            progress = true;
        }
        if !progress {
            break;
        }
    }
}

/// Rotate every spinning body about its local axis.
pub fn update_spin(mut query: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in &mut query {
        transform.rotate_local(Quat::from_axis_angle(spin.axis, spin.speed));
    }
}
