//! The engine: owns the GPU context, camera rig, lighting, and renderer,
//! and executes the commands the input layer produces.

use crate::camera::{CameraRig, MoveDirection};
use crate::error::TablescapeError;
use crate::gpu::render_context::RenderContext;
use crate::input::KeyAction;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::SceneLights;
use crate::util::FrameTiming;

/// The engine's interactive vocabulary.
///
/// Every user-facing operation is a `SceneCommand`; the event loop converts
/// raw input into commands and passes them to
/// [`SceneEngine::execute`]. `Quit` is the one command the engine does not
/// act on itself, since only the event loop can exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Rotate the view by a mouse delta, in screen pixels (y already
    /// flipped so positive pitches up).
    Look {
        /// Horizontal cursor delta.
        x_offset: f32,
        /// Vertical cursor delta, positive = up.
        y_offset: f32,
    },
    /// Adjust the field of view by a scroll delta.
    Zoom {
        /// Scroll amount, positive narrows the FOV.
        delta: f32,
    },
    /// Flip between perspective and orthographic projection.
    ToggleProjection,
    /// Exit the application.
    Quit,
}

impl SceneCommand {
    /// The command a bound discrete [`KeyAction`] maps to.
    #[must_use]
    pub fn from_action(action: KeyAction) -> Self {
        match action {
            KeyAction::ToggleProjection => Self::ToggleProjection,
            KeyAction::Quit => Self::Quit,
        }
    }
}

/// Owns all render state and runs one frame at a time.
pub struct SceneEngine {
    /// GPU device, queue, and surface.
    pub context: RenderContext,
    camera_rig: CameraRig,
    lights: SceneLights,
    renderer: SceneRenderer,
    timing: FrameTiming,
}

impl SceneEngine {
    /// Initialize the GPU context and build all scene resources.
    ///
    /// # Errors
    ///
    /// Returns [`TablescapeError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, TablescapeError> {
        let context = RenderContext::new(window, size).await?;
        let camera_rig = CameraRig::new(&context, &options.camera);
        let lights = SceneLights::new(&context, &options.lighting);
        let renderer = SceneRenderer::new(
            &context,
            &camera_rig.layout,
            &lights.layout,
            &options.window,
        );
        log::info!("scene initialized ({}x{})", size.0, size.1);

        Ok(Self {
            context,
            camera_rig,
            lights,
            renderer,
            timing: FrameTiming::new(),
        })
    }

    /// Start a new frame and return its delta time in seconds.
    pub fn begin_frame(&mut self) -> f32 {
        self.timing.begin_frame()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Track a window resize: surface, aspect ratio, and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_rig.resize(width, height);
        self.renderer.resize(&self.context);
    }

    /// Apply one held movement direction for this frame's delta time.
    pub fn apply_movement(&mut self, direction: MoveDirection, dt: f32) {
        self.camera_rig.camera.process_keyboard(direction, dt);
    }

    /// Execute a command. `Quit` is a no-op here; the event loop handles it.
    pub fn execute(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Look { x_offset, y_offset } => {
                self.camera_rig
                    .camera
                    .process_mouse_movement(x_offset, y_offset, true);
            }
            SceneCommand::Zoom { delta } => {
                self.camera_rig.camera.process_mouse_scroll(delta);
            }
            SceneCommand::ToggleProjection => {
                self.camera_rig.toggle_projection();
            }
            SceneCommand::Quit => {}
        }
    }

    /// Upload this frame's camera state and draw the scene.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; on `Lost`/`Outdated` the caller resizes and retries.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_rig.update_gpu(&self.context.queue);
        self.renderer.render(
            &self.context,
            &self.camera_rig.bind_group,
            &self.lights.bind_group,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discrete_actions_map_to_commands() {
        assert_eq!(
            SceneCommand::from_action(KeyAction::ToggleProjection),
            SceneCommand::ToggleProjection
        );
        assert_eq!(
            SceneCommand::from_action(KeyAction::Quit),
            SceneCommand::Quit
        );
    }
}
