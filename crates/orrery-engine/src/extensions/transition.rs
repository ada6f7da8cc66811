// extensions/transition.rs
//
// Scripted camera fly-to. Instead of self-rescheduling per-frame
// callbacks, the owner holds at most one `CameraTransition` in an
// `Option` slot and advances it once per tick; replacing the slot is the
// only cancellation mechanism (last-write-wins).

use glam::Vec3;

use crate::extensions::easing::{ease_vec3, Easing};
use crate::renderer::camera::OrbitCamera;

/// An in-flight eased camera movement. The start pose is sampled from
/// the live camera at construction time, so superseding a running
/// transition hands off smoothly from wherever the camera currently is.
#[derive(Debug, Clone)]
pub struct CameraTransition {
    start_pos: Vec3,
    start_target: Vec3,
    end_pos: Vec3,
    end_target: Vec3,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl CameraTransition {
    pub fn new(camera: &OrbitCamera, end_pos: Vec3, end_target: Vec3, duration: f32) -> Self {
        Self {
            start_pos: camera.position(),
            start_target: camera.target,
            end_pos,
            end_target,
            duration,
            elapsed: 0.0,
            easing: Easing::CubicOut,
        }
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// The eased (position, target) pair at the given raw progress.
    pub fn sample(&self, progress: f32) -> (Vec3, Vec3) {
        (
            ease_vec3(self.start_pos, self.end_pos, progress, self.easing),
            ease_vec3(self.start_target, self.end_target, progress, self.easing),
        )
    }

    /// Advance by `dt` seconds and write the eased pose into the camera.
    /// Returns true when the transition has completed (the final sample
    /// lands exactly on the end pose).
    pub fn advance(&mut self, dt: f32, camera: &mut OrbitCamera) -> bool {
        self.elapsed += dt;
        let progress = self.progress();
        let (pos, target) = self.sample(progress);
        camera.set_pose(pos, target);
        self.elapsed >= self.duration
    }
}
