//! Binary entry point: window setup, event loop, and input dispatch.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tablescape::engine::{SceneCommand, SceneEngine};
use tablescape::input::{InputEvent, InputProcessor};
use tablescape::options::Options;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

struct RenderApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    input: InputProcessor,
    options: Options,
    last_title_update: Instant,
}

impl RenderApp {
    fn new(options: Options) -> Self {
        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());
        Self {
            window: None,
            engine: None,
            input,
            options,
            last_title_update: Instant::now(),
        }
    }

    /// Capture and hide the cursor for mouse-look. Not all platforms
    /// support locking, so fall back to confining.
    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);
    }

    fn dispatch(&mut self, event: InputEvent, event_loop: &ActiveEventLoop) {
        if let Some(command) = self.input.handle_event(event) {
            if command == SceneCommand::Quit {
                event_loop.exit();
                return;
            }
            if let Some(engine) = &mut self.engine {
                engine.execute(command);
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for RenderApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(&self.options.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.options.window.width,
                    self.options.window.height,
                ));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            Self::grab_cursor(&window);

            let size = window.inner_size();
            let engine = pollster::block_on(SceneEngine::new(
                window.clone(),
                (size.width, size.height),
                &self.options,
            ))
            .expect("GPU initialization failed");

            window.request_redraw();
            self.window = Some(window);
            self.engine = Some(engine);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(focused) => {
                // Re-latch the cursor so regaining focus doesn't produce a
                // spurious look delta.
                self.input.reset_cursor_latch();
                if focused {
                    if let Some(window) = &self.window {
                        Self::grab_cursor(window);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                {
                    let dt = engine.begin_frame();
                    for direction in self.input.held_directions() {
                        engine.apply_movement(direction, dt);
                    }

                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            let inner = window.inner_size();
                            engine.resize(inner.width, inner.height);
                        }
                        Err(e) => {
                            log::error!("render error: {:?}", e);
                        }
                    }

                    // FPS readout in the title, refreshed once a second.
                    if self.last_title_update.elapsed() >= Duration::from_secs(1)
                    {
                        window.set_title(&format!(
                            "{} - {:.0} FPS",
                            self.options.window.title,
                            engine.fps()
                        ));
                        self.last_title_update = Instant::now();
                    }

                    window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                    event_loop,
                );
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(InputEvent::Scroll { delta: amount }, event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::PhysicalKey;
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.dispatch(
                        InputEvent::Key {
                            key: format!("{code:?}"),
                            pressed: event.state == ElementState::Pressed,
                        },
                        event_loop,
                    );
                }
            }

            _ => (),
        }
    }
}

fn main() {
    env_logger::init();

    // Optional first argument: path to a TOML options file.
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut app = RenderApp::new(options);
    let event_loop = EventLoop::new().unwrap();

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app).expect("Event loop error");
}
