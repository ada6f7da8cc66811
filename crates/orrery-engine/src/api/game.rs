use crate::api::types::GameEvent;
use crate::core::scene::SceneGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial viewport size in pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Buffer capacities for the host-shared memory.
    pub max_spheres: usize,
    pub max_rings: usize,
    pub max_labels: usize,
    pub max_path_vertices: usize,
    pub max_points: usize,
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_spheres: 64,
            max_rings: 8,
            max_labels: 32,
            max_path_vertices: 8192,
            max_points: 8192,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn scene nodes, position the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Drain input, advance simulation, drive the camera.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Static descriptive data the host UI may fetch as JSON (overlay
    /// content). Empty by default.
    fn ui_data(&self) -> String {
        String::new()
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: SceneGraph,
    pub camera: OrbitCamera,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scene: SceneGraph::new(),
            camera: OrbitCamera::new(config.viewport_width, config.viewport_height),
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Emit a game event to be forwarded to the host page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}
