use serde::{Deserialize, Serialize};

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_projection = "KeyP"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip between perspective and orthographic projection.
    ToggleProjection,
    /// Exit the application.
    Quit,
}
