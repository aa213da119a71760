//! User interface module
//!
//! Overlay card for the selected body and the asset-loading screen.

use bevy::prelude::*;

pub mod loading;
pub mod overlay;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (overlay::spawn_overlay_card, loading::spawn_loading_screen),
        )
        .add_systems(
            Update,
            (overlay::sync_overlay_card, loading::sync_loading_screen),
        );
    }
}
