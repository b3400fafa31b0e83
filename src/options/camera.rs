use serde::{Deserialize, Serialize};

use crate::camera::core::{
    DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera start state, control speeds, and projection planes.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub start_position: [f32; 3],
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
    /// Lower scroll-zoom bound (vertical FOV, degrees).
    pub zoom_min: f32,
    /// Upper scroll-zoom bound (vertical FOV, degrees).
    pub zoom_max: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            start_position: [-0.75, 0.5, 0.75],
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_max: DEFAULT_ZOOM_MAX,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
