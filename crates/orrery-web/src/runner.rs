use orrery_engine::{
    CameraUniform, EngineContext, FixedTimestep, Game, GameConfig, InputEvent, InputQueue,
    RenderBuffers,
};
use orrery_engine::systems::render::build_render_buffers;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffers: RenderBuffers,
    timestep: FixedTimestep,
    config: GameConfig,
    camera_uniform: CameraUniform,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let render_buffers = RenderBuffers::with_capacity(
            config.max_spheres,
            config.max_rings,
            config.max_labels,
            config.max_path_vertices,
            config.max_points,
        );
        let ctx = EngineContext::new(&config);
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffers,
            timestep,
            config,
            camera_uniform,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update game, advance the camera, rebuild buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation. Input is drained after the first
        // step so a click is never replayed when a frame covers two steps.
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.input.drain();
            self.ctx.camera.update(self.timestep.dt());
        }

        // Build the flat instance buffers from the scene graph
        build_render_buffers(&self.ctx.scene, &mut self.render_buffers);

        // Snapshot camera matrices for the host render pass
        self.camera_uniform = self.ctx.camera.uniform();
    }

    pub fn ui_data(&self) -> String {
        self.game.ui_data()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn sphere_instances_ptr(&self) -> *const f32 {
        self.render_buffers.spheres.as_ptr()
    }

    pub fn sphere_instance_count(&self) -> u32 {
        self.render_buffers.spheres.count()
    }

    pub fn ring_instances_ptr(&self) -> *const f32 {
        self.render_buffers.rings.as_ptr()
    }

    pub fn ring_instance_count(&self) -> u32 {
        self.render_buffers.rings.count()
    }

    pub fn label_instances_ptr(&self) -> *const f32 {
        self.render_buffers.labels.as_ptr()
    }

    pub fn label_instance_count(&self) -> u32 {
        self.render_buffers.labels.count()
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.render_buffers.paths.as_ptr()
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.render_buffers.paths.count()
    }

    pub fn point_vertices_ptr(&self) -> *const f32 {
        self.render_buffers.points.as_ptr()
    }

    pub fn point_vertex_count(&self) -> u32 {
        self.render_buffers.points.count()
    }

    pub fn camera_uniform_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_spheres(&self) -> u32 {
        self.config.max_spheres as u32
    }

    pub fn max_rings(&self) -> u32 {
        self.config.max_rings as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.config.max_labels as u32
    }

    pub fn max_path_vertices(&self) -> u32 {
        self.config.max_path_vertices as u32
    }

    pub fn max_points(&self) -> u32 {
        self.config.max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
