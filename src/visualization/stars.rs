//! Procedural starfield: deterministic star placement on the sky sphere,
//! baked into a cubemap and attached to the camera as a skybox.

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::MainCamera;

pub const STAR_COUNT: usize = 5000;
const STARFIELD_SEED: u64 = 7;
const FACE_SIZE: u32 = 512;
const SKYBOX_BRIGHTNESS: f32 = 500.0;

/// A single star on the sky sphere.
#[derive(Clone, Debug)]
pub struct Star {
    /// Unit direction.
    pub direction: Vec3,
    /// In [0, 1]; power-law distributed so most stars are dim.
    pub brightness: f32,
}

/// Generate a deterministic star catalog for a seed.
pub fn generate_stars(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let y = 1.0 - 2.0 * rng.random::<f32>();
        let planar = (1.0 - y * y).max(0.0).sqrt();
        let direction = Vec3::new(planar * theta.cos(), y, planar * theta.sin());

        // Many dim stars, few bright ones.
        let brightness = rng.random::<f32>().powf(3.0);
        stars.push(Star {
            direction,
            brightness,
        });
    }
    stars
}

/// Map a unit direction to a cube face index (0..6) and UVs in [0, 1].
/// Face order matches wgpu cubemap layers: +X, -X, +Y, -Y, +Z, -Z.
fn direction_to_face_uv(dir: Vec3) -> (usize, f32, f32) {
    let abs = dir.abs();
    let (face, u, v) = if abs.x >= abs.y && abs.x >= abs.z {
        if dir.x > 0.0 {
            (0, -dir.z / abs.x, -dir.y / abs.x)
        } else {
            (1, dir.z / abs.x, -dir.y / abs.x)
        }
    } else if abs.y >= abs.x && abs.y >= abs.z {
        if dir.y > 0.0 {
            (2, dir.x / abs.y, dir.z / abs.y)
        } else {
            (3, dir.x / abs.y, -dir.z / abs.y)
        }
    } else if dir.z > 0.0 {
        (4, dir.x / abs.z, -dir.y / abs.z)
    } else {
        (5, -dir.x / abs.z, -dir.y / abs.z)
    };
    (face, u * 0.5 + 0.5, v * 0.5 + 0.5)
}

/// Bake the catalog into six RGBA8 cubemap faces.
pub fn bake_cubemap(stars: &[Star], face_size: u32) -> Vec<Vec<u8>> {
    let pixel_count = (face_size * face_size) as usize;
    let mut faces: Vec<Vec<[f32; 3]>> = vec![vec![[0.0; 3]; pixel_count]; 6];

    let warm = Vec3::new(1.0, 0.9, 0.8);
    let cool = Vec3::new(0.8, 0.9, 1.0);

    for star in stars {
        let (face, u, v) = direction_to_face_uv(star.direction);
        let px = (u * face_size as f32).min(face_size as f32 - 1.0) as u32;
        let py = (v * face_size as f32).min(face_size as f32 - 1.0) as u32;
        let index = (py * face_size + px) as usize;

        let tint = warm.lerp(cool, star.brightness);
        let intensity = 0.25 + 0.75 * star.brightness;

        // Additive: overlapping dim stars accumulate.
        let pixel = &mut faces[face][index];
        pixel[0] = (pixel[0] + tint.x * intensity).min(1.0);
        pixel[1] = (pixel[1] + tint.y * intensity).min(1.0);
        pixel[2] = (pixel[2] + tint.z * intensity).min(1.0);
    }

    faces
        .into_iter()
        .map(|face| {
            let mut bytes = Vec::with_capacity(face.len() * 4);
            for pixel in face {
                bytes.push((pixel[0] * 255.0) as u8);
                bytes.push((pixel[1] * 255.0) as u8);
                bytes.push((pixel[2] * 255.0) as u8);
                bytes.push(255);
            }
            bytes
        })
        .collect()
}

/// Bake the starfield and attach it to the main camera as a skybox.
pub fn setup_starfield(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<MainCamera>>,
) {
    let stars = generate_stars(STARFIELD_SEED, STAR_COUNT);
    let faces = bake_cubemap(&stars, FACE_SIZE);

    let mut data = Vec::with_capacity((FACE_SIZE * FACE_SIZE * 4) as usize * 6);
    for face in &faces {
        data.extend_from_slice(face);
    }
    let mut image = Image::new(
        Extent3d {
            width: FACE_SIZE,
            height: FACE_SIZE,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    let handle = images.add(image);

    let Ok(camera) = cameras.single() else {
        warn!("starfield: main camera not found");
        return;
    };
    commands.entity(camera).insert(Skybox {
        image: handle,
        brightness: SKYBOX_BRIGHTNESS,
        ..default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_requested_count() {
        assert_eq!(generate_stars(42, 1000).len(), 1000);
    }

    #[test]
    fn test_directions_are_unit_vectors() {
        for (i, star) in generate_stars(42, 1000).iter().enumerate() {
            let len = star.direction.length();
            assert!((len - 1.0).abs() < 1e-5, "star {i} has length {len}");
        }
    }

    #[test]
    fn test_brightness_stays_in_range() {
        for star in generate_stars(42, 1000) {
            assert!((0.0..=1.0).contains(&star.brightness));
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = generate_stars(123, 500);
        let b = generate_stars(123, 500);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x.direction - y.direction).length() < 1e-6);
            assert!((x.brightness - y.brightness).abs() < 1e-6);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_stars(1, 500);
        let b = generate_stars(2, 500);
        let moved = a
            .iter()
            .zip(b.iter())
            .filter(|(x, y)| (x.direction - y.direction).length() > 0.01)
            .count();
        assert!(moved > 250, "only {moved}/500 stars differed between seeds");
    }

    #[test]
    fn test_axis_directions_cover_all_faces() {
        let mut seen: Vec<usize> = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ]
        .iter()
        .map(|&d| direction_to_face_uv(d).0)
        .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_baked_faces_have_expected_size_and_content() {
        let stars = generate_stars(42, 2000);
        let faces = bake_cubemap(&stars, 64);
        assert_eq!(faces.len(), 6);
        let mut lit = 0usize;
        for face in &faces {
            assert_eq!(face.len(), 64 * 64 * 4);
            lit += face
                .chunks_exact(4)
                .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
                .count();
        }
        assert!(lit > 100, "expected lit pixels, got {lit}");
    }
}
