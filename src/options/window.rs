use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window creation and clear-color parameters.
pub struct WindowOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Background clear color (linear RGB).
    pub clear_color: [f32; 3],
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Tablescape".to_owned(),
            clear_color: [0.1, 0.1, 0.1],
        }
    }
}
