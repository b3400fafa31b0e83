//! The static table scene: mesh types, primitive builders, hand-placed
//! layout, and the lighting rig.

/// Hand-placed object layout.
pub mod layout;
/// Lighting uniform and GPU resources.
pub mod lighting;
/// Vertex/mesh types shared by the primitives and the renderer.
pub mod mesh;
/// Procedural primitive mesh builders.
pub mod primitives;

pub use layout::{build_scene, ObjectSpec, SceneDescription, TextureSpec};
pub use lighting::{SceneLights, SceneLightsUniform};
pub use mesh::{MeshBuffers, MeshData, MeshVertex};
