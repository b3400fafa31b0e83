//! Hand-placed layout of the table scene.
//!
//! Everything here is plain data: which primitive each object uses, where it
//! sits, and which texture (with a solid-color fallback) it wears. The
//! renderer turns this description into GPU resources once at startup.

use glam::{Mat4, Quat, Vec3};

use super::mesh::MeshData;
use super::primitives;

/// Egg sphere tessellation (sectors × stacks).
const EGG_TESSELLATION: (u32, u32) = (30, 30);
/// Bowl cylinder tessellation (sectors).
const BOWL_SECTORS: u32 = 100;

/// A diffuse texture source: file path plus the solid color used when the
/// file is unavailable.
#[derive(Debug, Clone, Copy)]
pub struct TextureSpec {
    /// Path relative to the working directory.
    pub path: &'static str,
    /// Fallback color (sRGB bytes).
    pub fallback: [u8; 3],
}

/// One placed object: a mesh, a texture, and a model matrix.
#[derive(Debug, Clone)]
pub struct ObjectSpec {
    /// Human-readable name, used for GPU labels and logs.
    pub name: &'static str,
    /// Index into [`SceneDescription::meshes`].
    pub mesh_index: usize,
    /// Diffuse texture source.
    pub texture: TextureSpec,
    /// Object-to-world transform.
    pub model: Mat4,
}

/// The full static scene: shared meshes plus placed objects.
#[derive(Debug, Clone)]
pub struct SceneDescription {
    /// Distinct primitive meshes, shared between objects.
    pub meshes: Vec<MeshData>,
    /// Placed objects in draw order.
    pub objects: Vec<ObjectSpec>,
}

/// Uniform translate-rotate-scale transform. All scales in the scene are
/// uniform, so rotation and scale commute.
fn place(translation: Vec3, rotation_y_deg: f32, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_rotation_y(rotation_y_deg.to_radians()),
        translation,
    )
}

/// Build the table scene exactly as the demo lays it out: a rotated table
/// plane, a cutting board, a cheese block and slice, three eggs, and a bowl.
#[must_use]
pub fn build_scene() -> SceneDescription {
    let meshes = vec![
        primitives::plane(),                  // 0: table
        primitives::cuboid(0.4, 0.075, 0.6),  // 1: cutting board
        primitives::cuboid(0.15, 0.25, 0.125), // 2: cheese block
        primitives::cuboid(0.15, 0.025, 0.125), // 3: cheese slice
        primitives::uv_sphere(EGG_TESSELLATION.0, EGG_TESSELLATION.1), // 4: egg
        primitives::hollow_cylinder(2.0, BOWL_SECTORS, 1.0), // 5: bowl
    ];

    let egg_positions = [
        Vec3::new(-0.33, 0.036, 0.23),
        Vec3::new(-0.35, 0.036, 0.10),
        Vec3::new(-0.25, 0.036, 0.13),
    ];
    let egg_textures = [
        TextureSpec {
            path: "assets/images/brown_egg.jpg",
            fallback: [196, 148, 106],
        },
        TextureSpec {
            path: "assets/images/white_egg1.jpg",
            fallback: [240, 235, 224],
        },
        TextureSpec {
            path: "assets/images/green_egg.jpg",
            fallback: [188, 208, 170],
        },
    ];

    let mut objects = vec![
        ObjectSpec {
            name: "table",
            mesh_index: 0,
            texture: TextureSpec {
                path: "assets/images/table.jpg",
                fallback: [139, 94, 60],
            },
            model: place(Vec3::ZERO, -45.0, 1.0),
        },
        ObjectSpec {
            name: "cutting board",
            mesh_index: 1,
            texture: TextureSpec {
                path: "assets/images/cutting_board.jpg",
                fallback: [186, 141, 88],
            },
            model: place(Vec3::new(0.0, 0.001, 0.0), 0.0, 0.3),
        },
        ObjectSpec {
            name: "cheese block",
            mesh_index: 2,
            texture: TextureSpec {
                path: "assets/images/cheese_slice.jpg",
                fallback: [241, 202, 92],
            },
            model: place(Vec3::new(0.0, 0.024, -0.053), 0.0, 0.3),
        },
        ObjectSpec {
            name: "cheese slice",
            mesh_index: 3,
            texture: TextureSpec {
                path: "assets/images/cheese_slice.jpg",
                fallback: [241, 202, 92],
            },
            model: place(Vec3::new(0.0, 0.024, 0.053), 0.0, 0.3),
        },
    ];

    for (position, texture) in egg_positions.into_iter().zip(egg_textures) {
        objects.push(ObjectSpec {
            name: "egg",
            mesh_index: 4,
            texture,
            model: place(position, 90.0, 0.035),
        });
    }

    objects.push(ObjectSpec {
        name: "bowl",
        mesh_index: 5,
        texture: TextureSpec {
            path: "assets/images/bowl2.jpg",
            fallback: [96, 114, 140],
        },
        model: place(Vec3::new(-0.05, 0.034, 0.35), 0.0, 0.045),
    });

    SceneDescription { meshes, objects }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_has_expected_objects() {
        let scene = build_scene();
        assert_eq!(scene.meshes.len(), 6);
        assert_eq!(scene.objects.len(), 8);
        let eggs =
            scene.objects.iter().filter(|o| o.name == "egg").count();
        assert_eq!(eggs, 3);
    }

    #[test]
    fn mesh_indices_are_in_bounds() {
        let scene = build_scene();
        for object in &scene.objects {
            assert!(object.mesh_index < scene.meshes.len());
        }
    }

    #[test]
    fn eggs_share_one_mesh_but_not_textures() {
        let scene = build_scene();
        let eggs: Vec<_> =
            scene.objects.iter().filter(|o| o.name == "egg").collect();
        assert!(eggs.windows(2).all(|w| w[0].mesh_index == w[1].mesh_index));
        assert_ne!(eggs[0].texture.path, eggs[1].texture.path);
        assert_ne!(eggs[1].texture.path, eggs[2].texture.path);
    }

    #[test]
    fn table_transform_preserves_height() {
        let scene = build_scene();
        let table = &scene.objects[0];
        // The table is rotated about Y only, so a point on the plane stays
        // at y = 0.
        let corner = table
            .model
            .transform_point3(Vec3::new(-0.5, 0.0, -0.5));
        assert!(corner.y.abs() < 1e-6);
    }
}
