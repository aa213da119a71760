//! Fixed catalog of celestial bodies.
//!
//! Orbit radii and speeds are tuned for visual pacing, not orbital mechanics
//! accuracy; callers must not assume real-world periods. Display labels are
//! resolved from [`BodyId`] here, never by matching node-name strings.

use bevy::prelude::*;

/// Stable identifier for a celestial body; the selection key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Circular-orbit parameters, relative to the focus body's current position.
pub struct OrbitConfig {
    pub focus: BodyId,
    pub radius: f32,
    /// Radians per frame, signed (direction of revolution).
    pub speed: f32,
}

/// One entry in the body catalog.
pub struct BodyConfig {
    pub id: BodyId,
    pub display_name: &'static str,
    /// Texture for procedurally meshed bodies. `None` for Earth, whose
    /// visuals come from the glTF model.
    pub texture: Option<&'static str>,
    /// Sphere radius in scene units; doubles as the picking bounding radius.
    pub size: f32,
    /// `None` for the sun, which stays at the origin.
    pub orbit: Option<OrbitConfig>,
    /// Axis of the per-frame self-rotation. Not necessarily unit length;
    /// normalized at spawn.
    pub spin_axis: Vec3,
    /// Radians per frame, cumulative and unbounded.
    pub spin_speed: f32,
}

pub const BODIES: &[BodyConfig] = &[
    BodyConfig {
        id: BodyId::Sun,
        display_name: "Sun",
        texture: Some("textures/sun.jpg"),
        size: 2.0,
        orbit: None,
        spin_axis: Vec3::Y,
        spin_speed: 0.005,
    },
    BodyConfig {
        id: BodyId::Mercury,
        display_name: "Mercury",
        texture: Some("textures/mercury.jpg"),
        size: 0.25,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 7.0,
            speed: -1.2e-3,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.00612216,
    },
    BodyConfig {
        id: BodyId::Venus,
        display_name: "Venus",
        texture: Some("textures/venus.jpg"),
        size: 0.87,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 18.0,
            speed: 4.0e-5,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.0016,
    },
    BodyConfig {
        id: BodyId::Earth,
        display_name: "Earth",
        texture: None,
        size: 1.0,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 35.0,
            speed: 5.0e-5,
        }),
        spin_axis: Vec3::NEG_Y,
        spin_speed: 0.0005,
    },
    BodyConfig {
        id: BodyId::Moon,
        display_name: "Moon",
        texture: Some("textures/moon.jpg"),
        size: 0.2,
        orbit: Some(OrbitConfig {
            focus: BodyId::Earth,
            radius: 6.0,
            speed: 6.0e-4,
        }),
        spin_axis: Vec3::new(0.7, 0.25, -1.0),
        spin_speed: 0.0026,
    },
    BodyConfig {
        id: BodyId::Mars,
        display_name: "Mars",
        texture: Some("textures/mars.jpg"),
        size: 0.47,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 28.0,
            speed: 6.0e-4,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.0026,
    },
    BodyConfig {
        id: BodyId::Jupiter,
        display_name: "Jupiter",
        texture: Some("textures/jupiter.jpg"),
        size: 1.2,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 55.0,
            speed: -1.1e-4,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.03,
    },
    BodyConfig {
        id: BodyId::Saturn,
        display_name: "Saturn",
        texture: Some("textures/saturn.jpg"),
        size: 1.1,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 85.0,
            speed: 2.0e-5,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.0002,
    },
    BodyConfig {
        id: BodyId::Uranus,
        display_name: "Uranus",
        texture: Some("textures/uranus.jpg"),
        size: 0.9,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 126.0,
            speed: 1.0e-5,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.006,
    },
    BodyConfig {
        id: BodyId::Neptune,
        display_name: "Neptune",
        texture: Some("textures/neptune.jpg"),
        size: 0.8,
        orbit: Some(OrbitConfig {
            focus: BodyId::Sun,
            radius: 157.0,
            speed: -1.3e-4,
        }),
        spin_axis: Vec3::Y,
        spin_speed: 0.00098,
    },
];

/// Look up a body's catalog entry.
pub fn config(id: BodyId) -> Option<&'static BodyConfig> {
    BODIES.iter().find(|cfg| cfg.id == id)
}

/// Overlay card text for a body.
pub struct BodyLabel {
    pub title: &'static str,
    pub description: &'static str,
}

const DEFAULT_TITLE: &str = "Lorem ipsum";
const PLACEHOLDER_DESCRIPTION: &str = "Lorem ipsum dolor sit amet consectetur it";

/// Resolve the overlay label for a body. The sun, Earth, and the moon carry
/// their own titles; everything else routes to the placeholder.
pub fn label(id: BodyId) -> BodyLabel {
    match id {
        BodyId::Sun => BodyLabel {
            title: "Sun",
            description: PLACEHOLDER_DESCRIPTION,
        },
        BodyId::Earth => BodyLabel {
            title: "Earth",
            description: PLACEHOLDER_DESCRIPTION,
        },
        BodyId::Moon => BodyLabel {
            title: "Moon",
            description: PLACEHOLDER_DESCRIPTION,
        },
        _ => BodyLabel {
            title: DEFAULT_TITLE,
            description: PLACEHOLDER_DESCRIPTION,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_body_ids_are_unique() {
        let mut seen = HashSet::new();
        for cfg in BODIES {
            assert!(seen.insert(cfg.id), "duplicate body id {:?}", cfg.id);
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut seen = HashSet::new();
        for cfg in BODIES {
            assert!(
                seen.insert(cfg.display_name),
                "duplicate display name {}",
                cfg.display_name
            );
        }
    }

    #[test]
    fn test_sizes_and_orbits_are_positive() {
        for cfg in BODIES {
            assert!(cfg.size > 0.0, "{:?} has non-positive size", cfg.id);
            if let Some(orbit) = &cfg.orbit {
                assert!(orbit.radius > 0.0, "{:?} has non-positive orbit", cfg.id);
            }
        }
    }

    #[test]
    fn test_every_orbit_focus_exists() {
        for cfg in BODIES {
            if let Some(orbit) = &cfg.orbit {
                assert!(
                    config(orbit.focus).is_some(),
                    "{:?} orbits unknown focus {:?}",
                    cfg.id,
                    orbit.focus
                );
            }
        }
    }

    #[test]
    fn test_only_the_sun_is_stationary() {
        for cfg in BODIES {
            assert_eq!(cfg.orbit.is_none(), cfg.id == BodyId::Sun);
        }
    }

    #[test]
    fn test_spin_axes_are_nonzero() {
        for cfg in BODIES {
            assert!(cfg.spin_axis.length_squared() > 0.0);
        }
    }

    #[test]
    fn test_labels_route_special_bodies() {
        assert_eq!(label(BodyId::Sun).title, "Sun");
        assert_eq!(label(BodyId::Earth).title, "Earth");
        assert_eq!(label(BodyId::Moon).title, "Moon");
    }

    #[test]
    fn test_labels_route_other_bodies_to_placeholder() {
        for id in [
            BodyId::Mercury,
            BodyId::Venus,
            BodyId::Mars,
            BodyId::Jupiter,
            BodyId::Saturn,
            BodyId::Uranus,
            BodyId::Neptune,
        ] {
            assert_eq!(label(id).title, DEFAULT_TITLE);
        }
    }

    #[test]
    fn test_earth_is_model_textured() {
        let earth = config(BodyId::Earth).unwrap();
        assert!(earth.texture.is_none());
    }
}
