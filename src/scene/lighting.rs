//! Scene lighting: three point lights plus one overhead spotlight.
//!
//! The values mirror the demo's hand-tuned setup. The uniform layout must
//! match the `SceneLights` struct in `scene_lit.wgsl` exactly (every field
//! padded to vec4 boundaries).

use bytemuck::Zeroable;
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// World positions of the three point lights; also where the light-marker
/// cubes are drawn.
pub const POINT_LIGHT_POSITIONS: [Vec3; 3] = [
    Vec3::new(-1.5, 1.0, 0.0),
    Vec3::new(-1.5, 1.0, 3.0),
    Vec3::new(-1.5, 1.0, -4.5),
];

/// Spotlight anchor above the table center.
pub const SPOTLIGHT_POSITION: Vec3 = Vec3::new(0.1, 2.0, 0.1);

/// Distance attenuation: constant, linear, quadratic (shared by all lights).
const ATTENUATION: [f32; 3] = [1.0, 0.09, 0.032];

/// One point light, padded to vec4 boundaries for WGSL.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    /// World position (xyz).
    pub position: [f32; 4],
    /// Ambient contribution (rgb).
    pub ambient: [f32; 4],
    /// Diffuse contribution (rgb).
    pub diffuse: [f32; 4],
    /// Specular contribution (rgb).
    pub specular: [f32; 4],
    /// Attenuation coefficients: constant, linear, quadratic.
    pub attenuation: [f32; 4],
}

/// The overhead spotlight, padded to vec4 boundaries for WGSL.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    /// World position (xyz).
    pub position: [f32; 4],
    /// Beam direction (xyz, normalized).
    pub direction: [f32; 4],
    /// Ambient contribution (rgb).
    pub ambient: [f32; 4],
    /// Diffuse contribution (rgb).
    pub diffuse: [f32; 4],
    /// Specular contribution (rgb).
    pub specular: [f32; 4],
    /// Attenuation coefficients: constant, linear, quadratic.
    pub attenuation: [f32; 4],
    /// x = cos(inner cutoff), y = cos(outer cutoff).
    pub cutoffs: [f32; 4],
}

/// Full lighting uniform: three point lights, the spotlight, and material
/// parameters (shininess, specular strength).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneLightsUniform {
    /// The three point lights.
    pub point_lights: [PointLightUniform; 3],
    /// The overhead spotlight.
    pub spot: SpotLightUniform,
    /// x = material shininess exponent, y = specular strength.
    pub material: [f32; 4],
}

fn vec4(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

fn rgb(r: f32, g: f32, b: f32) -> [f32; 4] {
    [r, g, b, 0.0]
}

impl SceneLightsUniform {
    /// Build the demo's lighting rig, scaled by the configured intensities.
    #[must_use]
    pub fn new(options: &LightingOptions) -> Self {
        let attenuation =
            [ATTENUATION[0], ATTENUATION[1], ATTENUATION[2], 0.0];
        let diffuse = 0.8 * options.diffuse_intensity;

        // Lights 0 and 2 are white; light 1 carries a soft yellow specular.
        let speculars = [
            rgb(1.0, 1.0, 1.0),
            rgb(0.9, 1.0, 0.8),
            rgb(1.0, 1.0, 1.0),
        ];
        let mut point_lights = [PointLightUniform::zeroed(); 3];
        for (i, light) in point_lights.iter_mut().enumerate() {
            *light = PointLightUniform {
                position: vec4(POINT_LIGHT_POSITIONS[i]),
                ambient: rgb(0.05, 0.05, 0.05),
                diffuse: rgb(diffuse, diffuse, diffuse),
                specular: speculars[i],
                attenuation,
            };
        }

        let spot = SpotLightUniform {
            position: vec4(SPOTLIGHT_POSITION),
            direction: vec4(Vec3::NEG_Y),
            ambient: rgb(0.0, 0.0, 0.0),
            diffuse: rgb(
                options.diffuse_intensity,
                options.diffuse_intensity,
                options.diffuse_intensity,
            ),
            specular: rgb(0.9, 1.0, 0.8),
            attenuation,
            cutoffs: [
                12.5_f32.to_radians().cos(),
                15.0_f32.to_radians().cos(),
                0.0,
                0.0,
            ],
        };

        Self {
            point_lights,
            spot,
            material: [options.shininess, options.specular_strength, 0.0, 0.0],
        }
    }
}

/// GPU-side lighting state: the uniform plus its buffer and bind group
/// (group 1 in the lit shader).
pub struct SceneLights {
    /// CPU copy of the uniform.
    pub uniform: SceneLightsUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl SceneLights {
    /// Create the lighting uniform and its GPU resources.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = SceneLightsUniform::new(options);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_padding() {
        // 3 point lights × 5 vec4 + spot 7 vec4 + material vec4, 16 bytes
        // each. A mismatch here means the WGSL struct drifted.
        assert_eq!(size_of::<PointLightUniform>(), 80);
        assert_eq!(size_of::<SpotLightUniform>(), 112);
        assert_eq!(size_of::<SceneLightsUniform>(), 368);
    }

    #[test]
    fn spot_cutoffs_are_cosines_with_inner_wider_than_outer() {
        let uniform = SceneLightsUniform::new(&LightingOptions::default());
        let [inner, outer, ..] = uniform.spot.cutoffs;
        // cos is decreasing: the inner (narrower) angle has the larger cos.
        assert!(inner > outer);
        assert!((inner - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        assert!((outer - 15.0_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn default_lights_match_demo_values() {
        let uniform = SceneLightsUniform::new(&LightingOptions::default());
        for light in &uniform.point_lights {
            assert_eq!(light.ambient, [0.05, 0.05, 0.05, 0.0]);
            assert_eq!(light.diffuse, [0.8, 0.8, 0.8, 0.0]);
            assert_eq!(light.attenuation, [1.0, 0.09, 0.032, 0.0]);
        }
        assert_eq!(uniform.point_lights[1].specular, [0.9, 1.0, 0.8, 0.0]);
        assert_eq!(uniform.spot.ambient, [0.0; 4]);
        assert_eq!(uniform.material[0], 32.0);
    }
}
