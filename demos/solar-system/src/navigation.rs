//! Camera navigation: scripted fly-to transitions, ctrl+drag panning,
//! and the double-Space home reset. Exactly one transition can be in
//! flight; scheduling a new one replaces the old, resampling from the
//! camera's live pose so the handoff is seamless.

use glam::Vec3;
use orrery_engine::{CameraTransition, OrbitCamera};

/// Two Space presses within this window reset the view.
pub const DOUBLE_TAP_MS: f64 = 300.0;
pub const KEY_SPACE: u32 = 32;

const FLY_DURATION: f32 = 1.0;
/// Camera offset from a focused body, scaled by the body's size.
const FOCUS_OFFSET: Vec3 = Vec3::new(8.0, 4.0, 8.0);
/// Home pose offset from the origin.
const HOME_OFFSET: Vec3 = Vec3::new(100.0, 50.0, 100.0);
/// World units per pixel of pan drag.
const PAN_SPEED: f32 = 0.3;

pub struct Navigator {
    transition: Option<CameraTransition>,
    panning: bool,
    pan_last: (f32, f32),
    /// Wall-clock milliseconds, accumulated from frame dt.
    now_ms: f64,
    last_space_ms: Option<f64>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            transition: None,
            panning: false,
            pan_last: (0.0, 0.0),
            now_ms: 0.0,
            last_space_ms: None,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Fly the camera to a body: look at its center from an offset
    /// proportional to its size. Replaces any transition in flight.
    pub fn fly_to_body(&mut self, camera: &OrbitCamera, world_pos: Vec3, size: f32) {
        let end_pos = world_pos + FOCUS_OFFSET * size;
        self.transition = Some(CameraTransition::new(camera, end_pos, world_pos, FLY_DURATION));
    }

    /// Fly back to the overview pose looking at the sun.
    pub fn fly_home(&mut self, camera: &OrbitCamera) {
        self.transition = Some(CameraTransition::new(camera, HOME_OFFSET, Vec3::ZERO, FLY_DURATION));
    }

    /// Enter pan mode (ctrl + primary button). Rotation stays off until
    /// the pan ends.
    pub fn begin_pan(&mut self, camera: &mut OrbitCamera, x: f32, y: f32) {
        self.panning = true;
        self.pan_last = (x, y);
        camera.set_rotate_enabled(false);
    }

    /// Feed a pointer move while panning. Releasing ctrl mid-drag ends
    /// the pan immediately, same as releasing the button.
    pub fn pan_move(&mut self, camera: &mut OrbitCamera, x: f32, y: f32, ctrl: bool) {
        if !self.panning {
            return;
        }
        if !ctrl {
            self.end_pan(camera);
            return;
        }
        let dx = x - self.pan_last.0;
        let dy = y - self.pan_last.1;
        camera.pan(dx, dy, PAN_SPEED);
        self.pan_last = (x, y);
    }

    /// Leave pan mode and re-enable rotation. Safe to call when not
    /// panning.
    pub fn end_pan(&mut self, camera: &mut OrbitCamera) {
        if self.panning {
            self.panning = false;
            camera.set_rotate_enabled(true);
        }
    }

    /// Register a Space press. Returns true when this press completes a
    /// double-tap, which also schedules the home flight. Auto-repeat
    /// presses must be filtered out by the caller.
    pub fn space_pressed(&mut self, camera: &OrbitCamera) -> bool {
        match self.last_space_ms {
            Some(prev) if self.now_ms - prev < DOUBLE_TAP_MS => {
                self.last_space_ms = None;
                self.fly_home(camera);
                true
            }
            _ => {
                self.last_space_ms = Some(self.now_ms);
                false
            }
        }
    }

    /// Advance the wall clock and any in-flight transition.
    pub fn update(&mut self, dt: f32, camera: &mut OrbitCamera) {
        self.now_ms += dt as f64 * 1000.0;
        if let Some(mut transition) = self.transition.take() {
            let done = transition.advance(dt, camera);
            if !done {
                self.transition = Some(transition);
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(800.0, 600.0)
    }

    fn tick(nav: &mut Navigator, cam: &mut OrbitCamera, seconds: f32) {
        let steps = (seconds / DT).round() as usize;
        for _ in 0..steps {
            nav.update(DT, cam);
            cam.update(DT);
        }
    }

    #[test]
    fn fly_to_body_lands_at_offset_pose() {
        let mut cam = camera();
        let mut nav = Navigator::new();
        let body = Vec3::new(50.0, 0.0, 0.0);
        nav.fly_to_body(&cam, body, 2.0);
        tick(&mut nav, &mut cam, 1.5);

        assert!(!nav.in_transition());
        let expected = body + FOCUS_OFFSET * 2.0;
        assert!((cam.position() - expected).length() < 0.5);
        assert!((cam.target - body).length() < 1e-3);
    }

    #[test]
    fn new_flight_supersedes_old_one() {
        let mut cam = camera();
        let mut nav = Navigator::new();
        nav.fly_to_body(&cam, Vec3::new(50.0, 0.0, 0.0), 2.0);
        tick(&mut nav, &mut cam, 0.3);

        let mid = cam.position();
        nav.fly_home(&cam);
        // the replacement starts from the mid-flight pose, no snap
        nav.update(DT, &mut cam);
        assert!((cam.position() - mid).length() < 5.0);

        tick(&mut nav, &mut cam, 1.5);
        assert!((cam.target - Vec3::ZERO).length() < 1e-3);
        assert!((cam.position() - HOME_OFFSET).length() < 0.5);
    }

    #[test]
    fn double_space_within_window_triggers_once() {
        let mut cam = camera();
        let mut nav = Navigator::new();

        assert!(!nav.space_pressed(&cam));
        tick(&mut nav, &mut cam, 0.15);
        assert!(nav.space_pressed(&cam));
        assert!(nav.in_transition());

        // the pair is consumed; a third press starts a fresh window
        tick(&mut nav, &mut cam, 0.05);
        assert!(!nav.space_pressed(&cam));
    }

    #[test]
    fn slow_double_space_does_not_trigger() {
        let mut cam = camera();
        let mut nav = Navigator::new();

        assert!(!nav.space_pressed(&cam));
        tick(&mut nav, &mut cam, 0.4);
        assert!(!nav.space_pressed(&cam));
        assert!(!nav.in_transition());
    }

    #[test]
    fn pan_disables_rotation_until_released() {
        let mut cam = camera();
        let mut nav = Navigator::new();

        nav.begin_pan(&mut cam, 100.0, 100.0);
        assert!(!cam.rotate_enabled());

        let before = cam.target;
        nav.pan_move(&mut cam, 110.0, 100.0, true);
        assert!((cam.target - before).length() > 1e-3);

        nav.end_pan(&mut cam);
        assert!(cam.rotate_enabled());
        assert!(!nav.is_panning());

        // ending again is a no-op
        nav.end_pan(&mut cam);
        assert!(cam.rotate_enabled());
    }

    #[test]
    fn releasing_ctrl_mid_drag_ends_pan() {
        let mut cam = camera();
        let mut nav = Navigator::new();

        nav.begin_pan(&mut cam, 100.0, 100.0);
        let before = cam.target;
        nav.pan_move(&mut cam, 120.0, 100.0, false);
        assert!(!nav.is_panning());
        assert!(cam.rotate_enabled());
        // the ctrl-less move must not pan
        assert_eq!(cam.target, before);
    }
}
