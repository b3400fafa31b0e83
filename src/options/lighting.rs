use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Material and light-intensity parameters.
pub struct LightingOptions {
    /// Phong shininess exponent.
    pub shininess: f32,
    /// Multiplier on every light's diffuse contribution.
    pub diffuse_intensity: f32,
    /// Specular strength (the demo has no specular maps, so a scalar stands
    /// in for one).
    pub specular_strength: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            shininess: 32.0,
            diffuse_intensity: 1.0,
            specular_strength: 0.5,
        }
    }
}
