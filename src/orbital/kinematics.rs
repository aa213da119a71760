//! Closed-form orbital position math.

use bevy::prelude::*;

/// Position on a circular orbit in the y=0 plane, centered on the focus
/// body's current position.
pub fn orbit_position(focus: Vec3, radius: f32, angle: f32) -> Vec3 {
    focus + Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}
