//! Celestial body components and spawning.
//!
//! Procedural bodies (everything except Earth) are built synchronously at
//! startup from the registry catalog. Earth is spawned by the visualization
//! layer once its glTF scene resolves; see `visualization::earth`.

use bevy::prelude::*;

use crate::assets::TrackedAssets;

pub mod registry;

pub use registry::BodyId;

/// Component marking an interactive celestial body.
#[derive(Component, Copy, Clone, Debug)]
pub struct CelestialBody {
    pub id: BodyId,
}

/// Sphere radius used for pick raycasts and the camera standoff.
#[derive(Component, Copy, Clone, Debug)]
pub struct BoundingRadius(pub f32);

/// Circular-orbit state, advanced once per frame.
#[derive(Component, Clone, Debug)]
pub struct Orbit {
    /// Body whose current position the orbit is centered on.
    pub focus: BodyId,
    pub radius: f32,
    /// Accumulated angle in radians; unbounded, relies on trig periodicity.
    pub angle: f32,
    /// Radians per frame, signed.
    pub speed: f32,
}

/// Per-frame self-rotation about a fixed local axis.
#[derive(Component, Clone, Debug)]
pub struct Spin {
    /// Unit axis in local space.
    pub axis: Vec3,
    /// Radians per frame, cumulative.
    pub speed: f32,
}

/// Marker for the sun entity, whose material glow tracks camera distance.
#[derive(Component)]
pub struct SunBody;

/// Plugin spawning the procedural body set.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut tracked: ResMut<TrackedAssets>,
) {
    for cfg in registry::BODIES {
        // Earth's visuals come from the glTF model and spawn asynchronously.
        let Some(texture_path) = cfg.texture else {
            continue;
        };

        let texture: Handle<Image> = asset_server.load(texture_path);
        tracked.track(&texture);

        let material = if cfg.id == BodyId::Sun {
            StandardMaterial {
                base_color_texture: Some(texture),
                emissive: LinearRgba::WHITE,
                unlit: false,
                ..default()
            }
        } else {
            StandardMaterial {
                base_color_texture: Some(texture),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            }
        };

        // Every body starts at (distance, 0, 0); the sun at the origin.
        let initial = cfg
            .orbit
            .as_ref()
            .map(|orbit| Vec3::new(orbit.radius, 0.0, 0.0))
            .unwrap_or(Vec3::ZERO);

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(cfg.size).mesh().uv(48, 32))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(initial),
            CelestialBody { id: cfg.id },
            BoundingRadius(cfg.size),
            Spin {
                axis: cfg.spin_axis.normalize(),
                speed: cfg.spin_speed,
            },
            Name::new(cfg.display_name),
        ));

        if let Some(orbit) = &cfg.orbit {
            entity.insert(Orbit {
                focus: orbit.focus,
                radius: orbit.radius,
                angle: 0.0,
                speed: orbit.speed,
            });
        }

        if cfg.id == BodyId::Sun {
            entity.insert(SunBody);
        }
    }
}
