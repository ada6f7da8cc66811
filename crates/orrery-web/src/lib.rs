pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates the `thread_local!` storage for the GameRunner, a
/// `with_runner()` helper, and every wasm-bindgen export (game_init,
/// game_tick, input handlers, data accessors).
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
/// use orrery_web::GameRunner;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u8, ctrl: bool) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button, ctrl }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32, ctrl: bool) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, ctrl }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32, ctrl: bool) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y, ctrl }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32, repeat: bool) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code, repeat }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_sphere_instances_ptr() -> *const f32 {
            with_runner(|r| r.sphere_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_instance_count() -> u32 {
            with_runner(|r| r.sphere_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_ring_instances_ptr() -> *const f32 {
            with_runner(|r| r.ring_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ring_instance_count() -> u32 {
            with_runner(|r| r.ring_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_label_instances_ptr() -> *const f32 {
            with_runner(|r| r.label_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_label_instance_count() -> u32 {
            with_runner(|r| r.label_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_path_vertices_ptr() -> *const f32 {
            with_runner(|r| r.path_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_path_vertex_count() -> u32 {
            with_runner(|r| r.path_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_point_vertices_ptr() -> *const f32 {
            with_runner(|r| r.point_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_point_vertex_count() -> u32 {
            with_runner(|r| r.point_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_uniform_ptr() -> *const f32 {
            with_runner(|r| r.camera_uniform_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_ui_data() -> String {
            with_runner(|r| r.ui_data())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_rings() -> u32 {
            with_runner(|r| r.max_rings())
        }

        #[wasm_bindgen]
        pub fn get_max_labels() -> u32 {
            with_runner(|r| r.max_labels())
        }

        #[wasm_bindgen]
        pub fn get_max_path_vertices() -> u32 {
            with_runner(|r| r.max_path_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_points() -> u32 {
            with_runner(|r| r.max_points())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }
    };
}
