pub mod api;
pub mod core;
pub mod input;
pub mod picking;
pub mod renderer;
pub mod systems;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{NodeId, GameEvent};
pub use core::scene::{SceneGraph, Node, Renderable};
pub use core::time::{FixedTimestep, SimulationClock};
pub use input::queue::{InputEvent, InputQueue};
pub use picking::{Ray, nearest_hit};
pub use renderer::camera::{OrbitCamera, CameraUniform};
pub use renderer::instance::{
    SphereInstance, RingInstance, LabelInstance, ColorVertex,
    SphereBuffer, RingBuffer, LabelBuffer, PathBuffer, PointBuffer,
};
pub use systems::render::{RenderBuffers, build_render_buffers};
pub use extensions::{Easing, lerp, lerp_vec3, ease, ease_vec3, CameraTransition};
