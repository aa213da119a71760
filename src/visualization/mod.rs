//! Visualization module
//!
//! Rendering-side systems: the Earth glTF model, scene lighting, and the
//! starfield skybox.

use bevy::prelude::*;

pub mod earth;
pub mod lighting;
pub mod stars;

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                lighting::setup_lighting,
                earth::load_earth_model,
                // The skybox attaches to the camera spawned in setup_scene.
                stars::setup_starfield.after(crate::setup_scene),
            ),
        )
        .add_systems(
            Update,
            (
                earth::poll_earth_model,
                earth::activate_earth.after(earth::poll_earth_model),
                lighting::update_sun_emissive,
            ),
        );
    }
}
