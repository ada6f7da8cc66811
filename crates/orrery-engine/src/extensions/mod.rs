// extensions/mod.rs
//
// Optional extension modules, decoupled from the scene graph.
// Games opt in by creating these systems alongside their state.

pub mod easing;
pub mod transition;

pub use easing::{Easing, lerp, lerp_vec3, ease, ease_vec3};
pub use transition::CameraTransition;
