// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated 3D table-scene demo built on wgpu.
//!
//! Tablescape renders a small still life — a textured table with a cutting
//! board, cheese, eggs, and a bowl — lit by three point lights and an
//! overhead spotlight, explored with a free-fly camera.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - the main rendering engine
//! - [`camera::FlyCamera`] - yaw/pitch free-fly camera
//! - [`input::InputProcessor`] - raw events to [`engine::SceneCommand`]s
//! - [`options::Options`] - runtime configuration (window, camera, lighting,
//!   keybindings)
//!
//! # Architecture
//!
//! The scene is static: meshes, textures, and the lighting uniform are built
//! once at startup. Each frame the event loop applies held movement keys with
//! the frame's delta time, uploads the camera uniform, and draws every object
//! with one instanced-model-matrix pipeline plus an unlit pipeline for the
//! light-marker cubes.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
