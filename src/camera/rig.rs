use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::FlyCamera;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Half-width of the orthographic view box (matches the demo's fixed
/// `ortho(-5, 5, -5, 5)` framing).
const ORTHO_EXTENT: f32 = 5.0;

/// Projection mode selected by the render loop, not the camera itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection driven by the camera's zoom (FOV).
    #[default]
    Perspective,
    /// Fixed-box orthographic projection.
    Orthographic,
}

/// GPU uniform holding the combined view-projection matrix and eye position.
///
/// Layout must match the `CameraUniform` struct in the WGSL shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position, for specular lighting.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }
}

impl CameraUniform {
    /// Refresh the uniform from the camera state and projection matrix.
    pub fn update(&mut self, camera: &FlyCamera, projection: Mat4) {
        self.view_proj = (projection * camera.view_matrix()).to_cols_array_2d();
        self.position = camera.position.to_array();
    }
}

/// Owns the [`FlyCamera`] together with its GPU resources and the
/// projection-mode state that lives outside the camera proper.
pub struct CameraRig {
    /// The free-fly camera driven by input.
    pub camera: FlyCamera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in the scene shaders).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over the uniform buffer.
    pub bind_group: wgpu::BindGroup,

    mode: ProjectionMode,
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl CameraRig {
    /// Create the rig with GPU buffers sized for [`CameraUniform`].
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let mut camera = FlyCamera::new(Vec3::from(options.start_position));
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.zoom_min = options.zoom_min;
        camera.zoom_max = options.zoom_max;

        let aspect =
            context.config.width as f32 / context.config.height as f32;

        let mut uniform = CameraUniform::default();
        uniform.update(
            &camera,
            Mat4::perspective_rh(
                camera.zoom().to_radians(),
                aspect,
                options.znear,
                options.zfar,
            ),
        );

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
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
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            mode: ProjectionMode::Perspective,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Flip between perspective and orthographic projection.
    pub fn toggle_projection(&mut self) {
        self.mode = match self.mode {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        };
        log::debug!("projection mode: {:?}", self.mode);
    }

    /// Projection matrix for the current mode.
    ///
    /// Perspective uses the camera's scroll-driven FOV; orthographic uses a
    /// fixed view box the way the original demo framed it.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.camera.zoom().to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => Mat4::orthographic_rh(
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                self.znear,
                self.zfar,
            ),
        }
    }

    /// Track a window resize by updating the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Push the current camera state to the GPU.
    ///
    /// Must run after all of the frame's input mutations so draws see a
    /// basis consistent with the just-applied input.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update(&self.camera, self.projection_matrix());
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_mode_toggle_round_trips() {
        let mut mode = ProjectionMode::default();
        assert_eq!(mode, ProjectionMode::Perspective);
        mode = match mode {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        };
        assert_eq!(mode, ProjectionMode::Orthographic);
    }

    #[test]
    fn uniform_combines_projection_and_view() {
        let camera = FlyCamera::default();
        let proj = Mat4::perspective_rh(
            45.0_f32.to_radians(),
            16.0 / 9.0,
            0.1,
            100.0,
        );
        let mut uniform = CameraUniform::default();
        uniform.update(&camera, proj);

        let expected = (proj * camera.view_matrix()).to_cols_array_2d();
        assert_eq!(uniform.view_proj, expected);
        assert_eq!(uniform.position, [0.0, 0.0, 0.0]);
    }
}
