//! Click selection and the pick/zoom state machine.
//!
//! At most one body is selected at a time. A click that hits nothing always
//! clears the selection; re-clicking the current target changes nothing.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::MainCamera;
use crate::bodies::{BodyId, BoundingRadius, CelestialBody};

pub mod picking;
pub mod zoom;

use picking::PickSphere;
pub use zoom::ZoomSettings;

/// Selection phases: `Idle` (nothing selected) → `Zooming` (camera on its
/// way) → `Selected` (parked, still tracking the body).
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selected,
    Zooming,
}

/// The selected body's entity and stable id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionTarget {
    pub entity: Entity,
    pub id: BodyId,
}

/// Single optional selection slot.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct SelectionState {
    pub target: Option<SelectionTarget>,
    pub phase: SelectionPhase,
}

/// What a click did to the selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A new body became the target; zooming begins.
    Selected(BodyId),
    /// A miss click cleared the previous target.
    Cleared,
    /// Same target re-hit, or a miss with nothing selected.
    Unchanged,
}

/// Apply one click's hit result to the selection state machine.
pub fn apply_click(state: &mut SelectionState, hit: Option<SelectionTarget>) -> ClickOutcome {
    match hit {
        Some(target) => {
            if state.target.map(|current| current.entity) == Some(target.entity) {
                ClickOutcome::Unchanged
            } else {
                state.target = Some(target);
                state.phase = SelectionPhase::Zooming;
                ClickOutcome::Selected(target.id)
            }
        }
        None => {
            if state.target.is_some() {
                state.target = None;
                state.phase = SelectionPhase::Idle;
                ClickOutcome::Cleared
            } else {
                ClickOutcome::Unchanged
            }
        }
    }
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<ZoomSettings>()
            .add_systems(
                Update,
                (
                    handle_clicks,
                    zoom::zoom_camera.after(crate::orbital::update_orbits),
                ),
            );
    }
}

/// Raycast a left click into the body set and update the selection.
fn handle_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(Entity, &GlobalTransform, &BoundingRadius, &CelestialBody)>,
    mut selection: ResMut<SelectionState>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let spheres: Vec<PickSphere> = bodies
        .iter()
        .map(|(entity, transform, bounding, body)| PickSphere {
            target: SelectionTarget {
                entity,
                id: body.id,
            },
            center: transform.translation(),
            radius: bounding.0,
        })
        .collect();

    let hit = picking::pick_nearest(ray.origin, *ray.direction, &spheres);

    // Stage the transition on a copy so an unchanged click leaves the
    // resource's change tick alone (idempotent re-selection).
    let mut next = *selection;
    match apply_click(&mut next, hit.map(|h| h.target)) {
        ClickOutcome::Selected(id) => {
            info!("selected {:?}", id);
            *selection = next;
        }
        ClickOutcome::Cleared => {
            info!("selection cleared");
            *selection = next;
        }
        ClickOutcome::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::World;

    fn target(world: &mut World, id: BodyId) -> SelectionTarget {
        SelectionTarget {
            entity: world.spawn_empty().id(),
            id,
        }
    }

    #[test]
    fn test_hit_from_idle_starts_zooming() {
        let mut world = World::new();
        let moon = target(&mut world, BodyId::Moon);
        let mut state = SelectionState::default();

        let outcome = apply_click(&mut state, Some(moon));
        assert_eq!(outcome, ClickOutcome::Selected(BodyId::Moon));
        assert_eq!(state.phase, SelectionPhase::Zooming);
        assert_eq!(state.target, Some(moon));
    }

    #[test]
    fn test_miss_clears_from_any_phase() {
        let mut world = World::new();
        let sun = target(&mut world, BodyId::Sun);
        for phase in [SelectionPhase::Selected, SelectionPhase::Zooming] {
            let mut state = SelectionState {
                target: Some(sun),
                phase,
            };
            let outcome = apply_click(&mut state, None);
            assert_eq!(outcome, ClickOutcome::Cleared);
            assert_eq!(state.phase, SelectionPhase::Idle);
            assert!(state.target.is_none());
        }
    }

    #[test]
    fn test_miss_while_idle_changes_nothing() {
        let mut state = SelectionState::default();
        assert_eq!(apply_click(&mut state, None), ClickOutcome::Unchanged);
        assert_eq!(state.phase, SelectionPhase::Idle);
    }

    #[test]
    fn test_reclicking_current_target_is_idempotent() {
        let mut world = World::new();
        let mars = target(&mut world, BodyId::Mars);
        let mut state = SelectionState {
            target: Some(mars),
            phase: SelectionPhase::Selected,
        };
        assert_eq!(apply_click(&mut state, Some(mars)), ClickOutcome::Unchanged);
        // No zoom restart.
        assert_eq!(state.phase, SelectionPhase::Selected);
    }

    #[test]
    fn test_hit_on_different_body_retargets() {
        let mut world = World::new();
        let mars = target(&mut world, BodyId::Mars);
        let venus = target(&mut world, BodyId::Venus);
        let mut state = SelectionState {
            target: Some(mars),
            phase: SelectionPhase::Selected,
        };
        let outcome = apply_click(&mut state, Some(venus));
        assert_eq!(outcome, ClickOutcome::Selected(BodyId::Venus));
        assert_eq!(state.target, Some(venus));
        assert_eq!(state.phase, SelectionPhase::Zooming);
    }
}
