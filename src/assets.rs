//! Asset load tracking.
//!
//! Loads are fire-and-forget; every handle the scene depends on is registered
//! here and polled once per frame against the asset server's load state
//! (pending / loaded / failed). Nothing blocks on a load, and a stalled load
//! simply leaves the loading overlay up.

use bevy::asset::{RecursiveDependencyLoadState, UntypedHandle};
use bevy::prelude::*;

/// Handles whose load progress drives the loading overlay.
#[derive(Resource, Default)]
pub struct TrackedAssets {
    handles: Vec<UntypedHandle>,
}

impl TrackedAssets {
    pub fn track<A: Asset>(&mut self, handle: &Handle<A>) {
        self.handles.push(handle.clone().untyped());
    }
}

/// Aggregate load progress, updated once per frame.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct LoadProgress {
    /// Handles that finished, successfully or not.
    pub resolved: usize,
    pub failed: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.resolved as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.resolved >= self.total
    }
}

pub struct AssetTrackerPlugin;

impl Plugin for AssetTrackerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackedAssets>()
            .init_resource::<LoadProgress>()
            .add_systems(Update, poll_tracked_assets);
    }
}

fn poll_tracked_assets(
    asset_server: Res<AssetServer>,
    tracked: Res<TrackedAssets>,
    mut progress: ResMut<LoadProgress>,
) {
    let mut resolved = 0;
    let mut failed = 0;
    for handle in &tracked.handles {
        match asset_server.get_recursive_dependency_load_state(handle.id()) {
            Some(RecursiveDependencyLoadState::Loaded) => resolved += 1,
            Some(RecursiveDependencyLoadState::Failed(_)) => {
                resolved += 1;
                failed += 1;
            }
            _ => {}
        }
    }

    let next = LoadProgress {
        resolved,
        failed,
        total: tracked.handles.len(),
    };
    if *progress == next {
        return;
    }
    if next.is_complete() && !progress.is_complete() {
        if next.failed > 0 {
            warn!(
                "asset loading complete: {} of {} failed",
                next.failed, next.total
            );
        } else {
            info!("asset loading complete: {} assets", next.total);
        }
    }
    *progress = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_reports_complete() {
        let progress = LoadProgress::default();
        assert!(progress.is_complete());
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn test_fraction_reflects_resolved_share() {
        let progress = LoadProgress {
            resolved: 3,
            failed: 1,
            total: 4,
        };
        assert!(!progress.is_complete());
        assert!((progress.fraction() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_failed_assets_still_resolve() {
        let progress = LoadProgress {
            resolved: 4,
            failed: 4,
            total: 4,
        };
        assert!(progress.is_complete());
    }
}
