//! Static scene lighting and the sun's distance-scaled glow.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::MainCamera;
use crate::bodies::SunBody;

/// Sun glow reaches full intensity around eleven moon-orbit radii out.
const SUN_GLOW_MAX_DISTANCE: f32 = 66.0;

pub fn setup_lighting(mut commands: Commands) {
    // Ensure the dark sides of the planets stay readable.
    commands.insert_resource(GlobalAmbientLight {
        brightness: 150.0,
        ..default()
    });

    // The sun stays at the origin, so one point light there suffices.
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 2_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sunlight"),
    ));
}

/// Emissive intensity as a function of camera distance: quadratic ramp,
/// clamped to full brightness.
pub fn sun_glow_intensity(distance: f32, max_distance: f32) -> f32 {
    let factor = distance / max_distance + 0.3;
    (factor * factor).min(1.0)
}

/// Scale the sun material's emissive term with camera distance so the sun
/// reads as a soft disk up close and a glare point from afar.
pub fn update_sun_emissive(
    cameras: Query<&Transform, With<MainCamera>>,
    suns: Query<(&GlobalTransform, &MeshMaterial3d<StandardMaterial>), With<SunBody>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(camera) = cameras.single() else {
        return;
    };
    let Ok((sun_transform, material)) = suns.single() else {
        return;
    };
    let distance = camera.translation.distance(sun_transform.translation());
    let intensity = sun_glow_intensity(distance, SUN_GLOW_MAX_DISTANCE);
    if let Some(material) = materials.get_mut(&material.0) {
        material.emissive = LinearRgba::WHITE * intensity;
    }
}
