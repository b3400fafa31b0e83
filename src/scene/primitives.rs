//! Procedural mesh builders for the scene's primitives.
//!
//! All builders emit counter-clockwise triangles (viewed from outside) so
//! they render correctly with back-face culling, and per-vertex normals of
//! unit length.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::mesh::{MeshData, MeshVertex};

/// Append one quad (two triangles) with a shared face normal.
///
/// `corners` must be ordered counter-clockwise as seen from outside the
/// surface; UVs are assigned (0,0), (1,0), (1,1), (0,1) in that order.
fn push_quad(mesh: &mut MeshData, corners: [[f32; 3]; 4], normal: [f32; 3]) {
    let base = mesh.vertices.len() as u32;
    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    for (position, uv) in corners.into_iter().zip(uvs) {
        mesh.vertices.push(MeshVertex {
            position,
            normal,
            uv,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

/// Unit table plane: a 1×1 quad at y = 0 facing +Y, UVs spanning the quad.
#[must_use]
pub fn plane() -> MeshData {
    let mut mesh = MeshData::default();
    push_quad(
        &mut mesh,
        [
            [-0.5, 0.0, 0.5],
            [0.5, 0.0, 0.5],
            [0.5, 0.0, -0.5],
            [-0.5, 0.0, -0.5],
        ],
        [0.0, 1.0, 0.0],
    );
    mesh
}

/// Cuboid with half-extents `hx`/`hz` in x/z and full height `height` in y.
///
/// The base sits at y = 0 and the top at y = `height`, matching how the
/// demo's board and cheese blocks rest on the table surface.
#[must_use]
pub fn cuboid(hx: f32, height: f32, hz: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let h = height;

    // Top (+Y)
    push_quad(
        &mut mesh,
        [[-hx, h, hz], [hx, h, hz], [hx, h, -hz], [-hx, h, -hz]],
        [0.0, 1.0, 0.0],
    );
    // Bottom (−Y)
    push_quad(
        &mut mesh,
        [[-hx, 0.0, -hz], [hx, 0.0, -hz], [hx, 0.0, hz], [-hx, 0.0, hz]],
        [0.0, -1.0, 0.0],
    );
    // Front (+Z)
    push_quad(
        &mut mesh,
        [[-hx, 0.0, hz], [hx, 0.0, hz], [hx, h, hz], [-hx, h, hz]],
        [0.0, 0.0, 1.0],
    );
    // Back (−Z)
    push_quad(
        &mut mesh,
        [[hx, 0.0, -hz], [-hx, 0.0, -hz], [-hx, h, -hz], [hx, h, -hz]],
        [0.0, 0.0, -1.0],
    );
    // Right (+X)
    push_quad(
        &mut mesh,
        [[hx, 0.0, hz], [hx, 0.0, -hz], [hx, h, -hz], [hx, h, hz]],
        [1.0, 0.0, 0.0],
    );
    // Left (−X)
    push_quad(
        &mut mesh,
        [[-hx, 0.0, -hz], [-hx, 0.0, hz], [-hx, h, hz], [-hx, h, -hz]],
        [-1.0, 0.0, 0.0],
    );

    mesh
}

/// Unit-radius UV sphere with the given sector (longitude) and stack
/// (latitude) counts. Normals equal positions on a unit sphere.
#[must_use]
pub fn uv_sphere(sectors: u32, stacks: u32) -> MeshData {
    let mut mesh = MeshData::default();

    for i in 0..=stacks {
        // From +Y pole (φ = π/2) down to −Y pole (φ = −π/2).
        let phi = FRAC_PI_2 - PI * i as f32 / stacks as f32;
        let (y, ring_radius) = (phi.sin(), phi.cos());
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let position =
                [ring_radius * theta.cos(), y, ring_radius * theta.sin()];
            mesh.vertices.push(MeshVertex {
                position,
                normal: position,
                uv: [j as f32 / sectors as f32, 1.0 - i as f32 / stacks as f32],
            });
        }
    }

    let ring = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = i * ring + j;
            let k2 = k1 + ring;
            if i != 0 {
                mesh.indices.extend_from_slice(&[k1, k1 + 1, k2]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[k1 + 1, k2 + 1, k2]);
            }
        }
    }

    mesh
}

/// Hollow, open-ended cylinder centered at the origin: an outer wall plus an
/// inner wall with flipped normals, so the bowl reads as a shell from both
/// sides under back-face culling. No caps.
#[must_use]
pub fn hollow_cylinder(radius: f32, sectors: u32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;

    // Two rings of shared positions, emitted once per wall so the normals
    // can differ.
    for flip in [false, true] {
        let base = mesh.vertices.len() as u32;
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let (nx, nz) = (theta.cos(), theta.sin());
            let normal = if flip {
                [-nx, 0.0, -nz]
            } else {
                [nx, 0.0, nz]
            };
            let u = j as f32 / sectors as f32;
            for (y, v) in [(-half, 0.0), (half, 1.0)] {
                mesh.vertices.push(MeshVertex {
                    position: [radius * nx, y, radius * nz],
                    normal,
                    uv: [u, v],
                });
            }
        }
        for j in 0..sectors {
            let bottom = base + 2 * j;
            let top = bottom + 1;
            let (next_bottom, next_top) = (bottom + 2, top + 2);
            if flip {
                mesh.indices.extend_from_slice(&[
                    bottom,
                    next_bottom,
                    top,
                    next_bottom,
                    next_top,
                    top,
                ]);
            } else {
                mesh.indices.extend_from_slice(&[
                    bottom,
                    top,
                    next_bottom,
                    next_bottom,
                    top,
                    next_top,
                ]);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_valid(mesh: &MeshData) {
        assert!(!mesh.vertices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        for &index in &mesh.indices {
            assert!((index as usize) < mesh.vertices.len());
        }
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < EPS, "non-unit normal {len}");
        }
    }

    #[test]
    fn plane_is_one_upward_quad() {
        let mesh = plane();
        assert_valid(&mesh);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
            assert_eq!(vertex.position[1], 0.0);
        }
    }

    #[test]
    fn cuboid_has_six_faces() {
        let mesh = cuboid(0.4, 0.075, 0.6);
        assert_valid(&mesh);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        // Base at y = 0, top at y = height.
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| y == 0.0 || y == 0.075));
    }

    #[test]
    fn sphere_vertices_lie_on_unit_radius() {
        let mesh = uv_sphere(30, 30);
        assert_valid(&mesh);
        assert_eq!(mesh.vertices.len(), 31 * 31);
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            let radius = (x * x + y * y + z * z).sqrt();
            assert!((radius - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn sphere_triangle_count_accounts_for_pole_fans() {
        let (sectors, stacks) = (8u32, 6u32);
        let mesh = uv_sphere(sectors, stacks);
        // Pole stacks contribute one triangle per sector, interior stacks two.
        let expected = sectors * 2 + (stacks - 2) * sectors * 2;
        assert_eq!(mesh.indices.len() as u32, expected * 3);
    }

    #[test]
    fn hollow_cylinder_has_inner_and_outer_walls() {
        let mesh = hollow_cylinder(2.0, 100, 1.0);
        assert_valid(&mesh);
        assert_eq!(mesh.vertices.len(), 2 * 2 * 101);
        assert_eq!(mesh.indices.len(), 2 * 100 * 6);
        // Every position sits on the cylinder wall.
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            assert!(((x * x + z * z).sqrt() - 2.0).abs() < 1e-4);
            assert!(y.abs() <= 0.5 + EPS);
        }
        // Outer normals point away from the axis, inner toward it.
        let outward = mesh
            .vertices
            .iter()
            .filter(|v| {
                v.normal[0] * v.position[0] + v.normal[2] * v.position[2] > 0.0
            })
            .count();
        assert_eq!(outward, mesh.vertices.len() / 2);
    }
}
