//! Earth model loading and activation.
//!
//! Earth's visuals come from a glTF scene rather than a procedural sphere.
//! The load is fire-and-forget: an explicit pending/spawned/ready/failed
//! state is polled once per frame, and until the scene hierarchy is live the
//! Earth is absent from both rendering and the pickable body set.

use bevy::asset::RecursiveDependencyLoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::assets::TrackedAssets;
use crate::bodies::registry::{self, BodyId};
use crate::bodies::{BoundingRadius, CelestialBody, Orbit, Spin};

pub const EARTH_SCENE_PATH: &str = "models/earth/earth.gltf";

/// Node-name fragment identifying the cloud layer inside the model. A
/// model-internal concern; body labeling never goes through node names.
const CLOUD_NODE_FRAGMENT: &str = "Object_9";
const CLOUD_SPIN_SPEED: f32 = 0.001;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum EarthLoadState {
    /// Asset still loading.
    Pending,
    /// Scene spawned; waiting for the entity hierarchy to appear.
    Spawned,
    /// Fully active: orbiting, spinning, pickable.
    Ready,
    /// Load failed; the Earth never appears this session.
    Failed,
}

#[derive(Resource)]
pub struct EarthModel {
    scene: Handle<Scene>,
    state: EarthLoadState,
    root: Option<Entity>,
}

pub fn load_earth_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut tracked: ResMut<TrackedAssets>,
) {
    let scene: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(EARTH_SCENE_PATH));
    tracked.track(&scene);
    commands.insert_resource(EarthModel {
        scene,
        state: EarthLoadState::Pending,
        root: None,
    });
}

/// Poll the load state and spawn the scene once it resolves.
pub fn poll_earth_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut model: ResMut<EarthModel>,
) {
    if model.state != EarthLoadState::Pending {
        return;
    }
    match asset_server.get_recursive_dependency_load_state(model.scene.id()) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            let Some(cfg) = registry::config(BodyId::Earth) else {
                return;
            };
            let distance = cfg.orbit.as_ref().map(|o| o.radius).unwrap_or(0.0);
            let root = commands
                .spawn((
                    SceneRoot(model.scene.clone()),
                    Transform::from_xyz(distance, 0.0, 0.0),
                    Name::new(cfg.display_name),
                ))
                .id();
            model.root = Some(root);
            model.state = EarthLoadState::Spawned;
            info!("earth model loaded");
        }
        Some(RecursiveDependencyLoadState::Failed(err)) => {
            error!("failed to load {EARTH_SCENE_PATH}: {err}");
            model.state = EarthLoadState::Failed;
        }
        _ => {}
    }
}

/// Once the scene hierarchy exists, register the Earth as a celestial body
/// and set the cloud layer spinning.
pub fn activate_earth(
    mut commands: Commands,
    mut model: ResMut<EarthModel>,
    children: Query<&Children>,
    names: Query<&Name>,
) {
    if model.state != EarthLoadState::Spawned {
        return;
    }
    let Some(root) = model.root else {
        return;
    };
    // Scene spawning is deferred; wait until the hierarchy shows up.
    if children.get(root).is_err() {
        return;
    }
    let Some(cfg) = registry::config(BodyId::Earth) else {
        return;
    };

    let mut entity = commands.entity(root);
    entity.insert((
        CelestialBody { id: BodyId::Earth },
        BoundingRadius(cfg.size),
        Spin {
            axis: cfg.spin_axis.normalize(),
            speed: cfg.spin_speed,
        },
    ));
    if let Some(orbit) = &cfg.orbit {
        entity.insert(Orbit {
            focus: orbit.focus,
            radius: orbit.radius,
            angle: 0.0,
            speed: orbit.speed,
        });
    }

    let cloud_layer = children
        .iter_descendants(root)
        .find(|&node| {
            names
                .get(node)
                .is_ok_and(|name| name.as_str().contains(CLOUD_NODE_FRAGMENT))
        });
    match cloud_layer {
        Some(node) => {
            commands.entity(node).insert(Spin {
                axis: Vec3::Y,
                speed: CLOUD_SPIN_SPEED,
            });
        }
        None => warn!("earth model has no node matching {CLOUD_NODE_FRAGMENT:?}"),
    }

    model.state = EarthLoadState::Ready;
    info!("earth active");
}
