//! Centralized runtime options with TOML support.
//!
//! All tweakable settings (window, camera speeds, lighting, keybindings)
//! are consolidated here and serialize to/from TOML, so the demo's
//! hand-tuned constants can be overridden without recompiling.

mod camera;
mod keybindings;
mod lighting;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::TablescapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window creation parameters.
    pub window: WindowOptions,
    /// Camera start state and control speeds.
    pub camera: CameraOptions,
    /// Material and light-intensity parameters.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TablescapeError> {
        let content =
            std::fs::read_to_string(path).map_err(TablescapeError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| TablescapeError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), TablescapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TablescapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TablescapeError::Io)?;
        }
        std::fs::write(path, content).map_err(TablescapeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.lighting.shininess, 32.0);
    }

    #[test]
    fn zoom_bounds_override_from_toml() {
        let toml_str = r"
[camera]
zoom_min = 10.0
zoom_max = 60.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_min, 10.0);
        assert_eq!(opts.camera.zoom_max, 60.0);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyP"),
            Some(KeyAction::ToggleProjection)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }
}
