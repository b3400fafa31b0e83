/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SceneCommand`](crate::engine::SceneCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Escape"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = narrow the field of view).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
}
