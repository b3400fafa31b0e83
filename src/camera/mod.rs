//! Camera system for free-flight scene viewing.
//!
//! [`core`] holds the input-driven fly camera itself; [`rig`] wraps it with
//! GPU resources and the perspective/orthographic projection state that the
//! render loop owns.

/// Free-fly camera state and its input mutators.
pub mod core;
/// GPU uniform plumbing and projection-mode handling around the camera.
pub mod rig;

pub use core::{FlyCamera, MoveDirection};
pub use rig::{CameraRig, ProjectionMode};
