//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization and material texture
//! loading/upload.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Diffuse texture loading with solid-color fallback.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::MaterialTexture;
