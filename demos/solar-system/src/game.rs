//! The viewer itself: wires input to picking, orbital animation, and
//! camera navigation. The host overlay stays in sync through game
//! events (selection and pause changes) and reads body details from
//! the catalog JSON via `ui_data`.

use glam::Vec2;
use orrery_engine::{EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue};

use crate::animation::Animator;
use crate::builder::{build_scene, SceneBodies};
use crate::catalog::{BodyId, Catalog};
use crate::navigation::{Navigator, KEY_SPACE};
use crate::picking::{pick, PickOutcome};

const FIXED_DT: f32 = 1.0 / 60.0;

/// Pixels of pointer travel before a press counts as a drag, not a click.
const DRAG_THRESHOLD: f32 = 5.0;

// ── Custom event kinds from the host UI ─────────────────────────────

const CUSTOM_TOGGLE_PAUSE: u32 = 1;

// ── Game event kinds to the host UI ─────────────────────────────────

/// a = catalog body index, or -1 when the selection was cleared.
const EVENT_SELECTION: f32 = 1.0;
/// a = 1 paused, 0 running.
const EVENT_PAUSE: f32 = 2.0;

pub struct SolarViewer {
    catalog: Catalog,
    bodies: Option<SceneBodies>,
    animator: Animator,
    navigator: Navigator,
    selected: Option<BodyId>,

    // Pointer state for click-vs-drag discrimination.
    press: Option<(f32, f32)>,
    pointer_last: (f32, f32),
    dragged: bool,
}

impl SolarViewer {
    pub fn new() -> Self {
        // The embedded catalog is validated at compile-time inclusion;
        // a parse failure here is a build defect.
        let catalog = Catalog::builtin().expect("embedded catalog is valid");
        Self {
            catalog,
            bodies: None,
            animator: Animator::new(),
            navigator: Navigator::new(),
            selected: None,
            press: None,
            pointer_last: (0.0, 0.0),
            dragged: false,
        }
    }

    fn emit_selection(ctx: &mut EngineContext, selected: Option<BodyId>) {
        let a = selected.map_or(-1.0, |b| b.0 as f32);
        ctx.emit_event(GameEvent { kind: EVENT_SELECTION, a, b: 0.0, c: 0.0 });
    }

    fn emit_pause(ctx: &mut EngineContext, paused: bool) {
        ctx.emit_event(GameEvent {
            kind: EVENT_PAUSE,
            a: if paused { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });
    }

    fn handle_click(&mut self, ctx: &mut EngineContext, x: f32, y: f32) {
        let Some(bodies) = &self.bodies else { return };
        match pick(Vec2::new(x, y), &ctx.camera, &ctx.scene, bodies, &self.catalog) {
            PickOutcome::Body { body, node } => {
                self.selected = Some(body);
                self.animator.pause();
                let world = ctx.scene.world_position(node);
                let size = self.catalog.get(body).size;
                self.navigator.fly_to_body(&ctx.camera, world, size);
                Self::emit_selection(ctx, self.selected);
                Self::emit_pause(ctx, true);
            }
            PickOutcome::Blank => {
                self.selected = None;
                self.animator.resume();
                Self::emit_selection(ctx, None);
                Self::emit_pause(ctx, false);
            }
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter().copied() {
            match event {
                InputEvent::PointerDown { x, y, button, ctrl } => {
                    if button == 0 && ctrl {
                        self.navigator.begin_pan(&mut ctx.camera, x, y);
                    } else if button == 0 {
                        self.press = Some((x, y));
                        self.dragged = false;
                    }
                    self.pointer_last = (x, y);
                }
                InputEvent::PointerMove { x, y, ctrl } => {
                    if self.navigator.is_panning() {
                        self.navigator.pan_move(&mut ctx.camera, x, y, ctrl);
                    } else if let Some((sx, sy)) = self.press {
                        let dx = x - self.pointer_last.0;
                        let dy = y - self.pointer_last.1;
                        ctx.camera.rotate(dx, dy);
                        if (x - sx).hypot(y - sy) > DRAG_THRESHOLD {
                            self.dragged = true;
                        }
                    }
                    self.pointer_last = (x, y);
                }
                InputEvent::PointerUp { x, y, .. } => {
                    if self.navigator.is_panning() {
                        self.navigator.end_pan(&mut ctx.camera);
                    } else if self.press.take().is_some() && !self.dragged {
                        self.handle_click(ctx, x, y);
                    }
                    self.press = None;
                }
                InputEvent::Wheel { delta } => {
                    ctx.camera.zoom(delta.signum());
                }
                InputEvent::KeyDown { key_code: KEY_SPACE, repeat: false } => {
                    if self.navigator.space_pressed(&ctx.camera) {
                        // double-tap reset: resume, clear selection, fly home
                        self.selected = None;
                        self.animator.resume();
                        Self::emit_selection(ctx, None);
                        Self::emit_pause(ctx, false);
                    }
                }
                InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => {}
                InputEvent::Resize { width, height } => {
                    ctx.camera.set_viewport(width, height);
                }
                InputEvent::Custom { kind: CUSTOM_TOGGLE_PAUSE, .. } => {
                    self.animator.toggle_pause();
                    Self::emit_pause(ctx, self.animator.is_paused());
                }
                InputEvent::Custom { kind, .. } => {
                    log::warn!("unknown custom event kind {kind}");
                }
            }
        }
    }
}

impl Default for SolarViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarViewer {
    fn config(&self) -> GameConfig {
        GameConfig { fixed_dt: FIXED_DT, ..GameConfig::default() }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let bodies = build_scene(&self.catalog, &mut ctx.scene);
        // place every body at its clock-zero position before the first frame
        self.animator.advance(0.0, &mut ctx.scene, &bodies, &self.catalog);
        log::info!(
            "solar system: {} nodes, {} pickable bodies",
            ctx.scene.len(),
            bodies.pickable.len()
        );
        self.bodies = Some(bodies);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        if let Some(bodies) = &self.bodies {
            self.animator.advance(FIXED_DT as f64, &mut ctx.scene, bodies, &self.catalog);
        }
        self.navigator.update(FIXED_DT, &mut ctx.camera);
    }

    fn ui_data(&self) -> String {
        self.catalog.to_json()
    }
}
