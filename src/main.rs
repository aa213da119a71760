use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod assets;
mod bodies;
mod interaction;
mod orbital;
mod ui;
mod visualization;

use assets::AssetTrackerPlugin;
use bodies::BodiesPlugin;
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use ui::UiPlugin;
use visualization::VisualizationPlugin;

/// Marker for the camera that renders the scene and receives pick rays.
#[derive(Component)]
pub struct MainCamera;

/// Initial camera distance from the sun, roughly framing the inner planets.
const INITIAL_CAMERA_DISTANCE: f32 = 40.0;

// Setup the scene camera
pub fn setup_scene(mut commands: Commands) {
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,                     // Look at the sun
        radius: Some(INITIAL_CAMERA_DISTANCE), // Initial distance from focus point
        yaw: Some(0.0),
        pitch: Some(0.35),
        force_update: true, // Force immediate positioning
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            // Neptune orbits at 157 units; leave headroom for zooming out.
            far: 2_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        // Note: Bloom is intentionally disabled - it causes rendering issues with PanOrbitCamera
        Transform::from_xyz(0.0, 14.0, INITIAL_CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orrery".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(AssetTrackerPlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_systems(Startup, setup_scene);

    app.run();
}
