use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::picking::Ray;

/// Perspective orbit camera: a target point plus spherical coordinates
/// (azimuth around Y, elevation above the orbital plane, distance).
/// User rotation input is damped — drag deltas feed angular velocity
/// that decays over a few frames, matching the feel of damped orbit
/// controls. Scripted transitions bypass the damping entirely through
/// `set_pose`.
pub struct OrbitCamera {
    pub target: Vec3,
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    /// Whether drag-rotate input is accepted (disabled during pan mode).
    rotate_enabled: bool,
    azimuth_vel: f32,
    elevation_vel: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    viewport: Vec2,
}

/// GPU-side uniform data for the camera.
/// view_proj + world position, padded to 16-byte alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl OrbitCamera {
    const ROTATE_SENSITIVITY: f32 = 0.005;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 20.0;
    const MAX_DISTANCE: f32 = 1500.0;
    const MAX_ELEVATION: f32 = 1.47; // ~84 degrees, avoids pole flip
    /// Velocity retained per frame at 60 fps (damping factor 0.05).
    const DAMPING_RETAIN: f32 = 0.80;

    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        // Initial pose: above and behind the system, looking at the sun.
        let start = Vec3::new(0.0, 150.0, 250.0);
        Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            elevation: (start.y / start.length()).asin(),
            distance: start.length(),
            rotate_enabled: true,
            azimuth_vel: 0.0,
            elevation_vel: 0.0,
            fov_y: 60_f32.to_radians(),
            near: 0.1,
            far: 3000.0,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    /// Camera position in world space, derived from the spherical pose.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.azimuth.sin() * self.elevation.cos(),
            self.elevation.sin(),
            self.azimuth.cos() * self.elevation.cos(),
        ) * self.distance;
        self.target + offset
    }

    /// Accept a rotate drag delta in pixels. Ignored while pan mode has
    /// rotation disabled.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !self.rotate_enabled {
            return;
        }
        self.azimuth_vel -= dx * Self::ROTATE_SENSITIVITY;
        self.elevation_vel += dy * Self::ROTATE_SENSITIVITY;
    }

    /// Multiplicative zoom; positive delta moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 + delta * Self::ZOOM_SPEED))
            .clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Translate target and camera together along the view plane.
    /// `speed` is world units per pixel of drag.
    pub fn pan(&mut self, dx: f32, dy: f32, speed: f32) {
        let forward = (self.target - self.position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        // Dragging right moves the scene right, so the camera shifts left.
        self.target += (right * -dx + up * dy) * speed;
    }

    /// Apply damped rotation velocity. Called once per fixed step.
    pub fn update(&mut self, dt: f32) {
        self.azimuth += self.azimuth_vel;
        self.elevation = (self.elevation + self.elevation_vel)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        let retain = Self::DAMPING_RETAIN.powf(dt * 60.0);
        self.azimuth_vel *= retain;
        self.elevation_vel *= retain;
    }

    /// Overwrite the pose from an explicit position and target (used by
    /// scripted transitions). The spherical parameters are re-derived so
    /// subsequent user orbiting continues from the new pose.
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.target = target;
        let rel = position - target;
        let len = rel.length();
        if len < 1e-6 {
            return;
        }
        self.distance = len.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
        self.elevation = (rel.y / len)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.azimuth = rel.x.atan2(rel.z);
    }

    pub fn set_rotate_enabled(&mut self, enabled: bool) {
        self.rotate_enabled = enabled;
    }

    pub fn rotate_enabled(&self) -> bool {
        self.rotate_enabled
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.viewport.x / self.viewport.y.max(1.0);
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        let p = self.position();
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            position: [p.x, p.y, p.z, 1.0],
        }
    }

    /// Build a world-space ray through a screen pixel (picking).
    pub fn screen_ray(&self, screen: Vec2) -> Ray {
        let ndc = Vec2::new(
            (screen.x / self.viewport.x) * 2.0 - 1.0,
            1.0 - (screen.y / self.viewport.y) * 2.0,
        );
        let inv = self.view_proj().inverse();
        // wgpu clip space: z in [0, 1]
        let near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;
        Ray {
            origin: near,
            dir: (far - near).normalize_or_zero(),
        }
    }

    /// Project a world position to screen pixels. Returns `None` for
    /// points at or behind the camera plane.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_pose_matches_start_position() {
        let cam = OrbitCamera::new(800.0, 600.0);
        let pos = cam.position();
        assert!((pos.x - 0.0).abs() < 1e-3, "x = {}", pos.x);
        assert!((pos.y - 150.0).abs() < 0.1, "y = {}", pos.y);
        assert!((pos.z - 250.0).abs() < 0.1, "z = {}", pos.z);
    }

    #[test]
    fn set_pose_round_trips() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        let want_pos = Vec3::new(80.0, 40.0, 80.0);
        let want_target = Vec3::new(50.0, 0.0, 30.0);
        cam.set_pose(want_pos, want_target);
        let got = cam.position();
        assert!((got - want_pos).length() < 1e-3, "got {got:?}");
        assert_eq!(cam.target, want_target);
    }

    #[test]
    fn zoom_clamps() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        for _ in 0..200 {
            cam.zoom(-1.0);
        }
        assert!(cam.distance >= 20.0);
        for _ in 0..200 {
            cam.zoom(1.0);
        }
        assert!(cam.distance <= 1500.0);
    }

    #[test]
    fn rotate_disabled_ignores_input() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.set_rotate_enabled(false);
        let az = cam.azimuth;
        cam.rotate(100.0, 50.0);
        cam.update(1.0 / 60.0);
        assert_eq!(cam.azimuth, az);
    }

    #[test]
    fn rotation_velocity_decays() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.rotate(40.0, 0.0);
        let mut last = cam.azimuth;
        let mut deltas = Vec::new();
        for _ in 0..5 {
            cam.update(1.0 / 60.0);
            deltas.push((cam.azimuth - last).abs());
            last = cam.azimuth;
        }
        // Each frame's movement is smaller than the one before.
        for pair in deltas.windows(2) {
            assert!(pair[1] < pair[0], "deltas not decaying: {deltas:?}");
        }
    }

    #[test]
    fn elevation_clamped() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        for _ in 0..100 {
            cam.rotate(0.0, 500.0);
            cam.update(1.0 / 60.0);
        }
        assert!(cam.elevation <= 1.47 + 1e-6);
    }

    #[test]
    fn pan_moves_target_along_view_plane() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.set_pose(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        cam.pan(10.0, 0.0, 0.3);
        // Looking down -Z, right is +X; content follows the drag so the
        // camera moves in -X.
        assert!(cam.target.x < 0.0, "target = {:?}", cam.target);
        assert!(cam.target.y.abs() < 1e-4);
    }

    #[test]
    fn screen_center_ray_points_at_target() {
        let cam = OrbitCamera::new(800.0, 600.0);
        let ray = cam.screen_ray(Vec2::new(400.0, 300.0));
        let to_target = (cam.target - cam.position()).normalize();
        assert!(ray.dir.dot(to_target) > 0.999, "dir = {:?}", ray.dir);
    }

    #[test]
    fn project_then_ray_hits_same_point() {
        let cam = OrbitCamera::new(800.0, 600.0);
        let world = Vec3::new(25.0, 0.0, -10.0);
        let screen = cam.world_to_screen(world).unwrap();
        let ray = cam.screen_ray(screen);
        // The ray should pass within a small distance of the point.
        let to_point = world - ray.origin;
        let closest = ray.origin + ray.dir * to_point.dot(ray.dir);
        assert!((closest - world).length() < 0.5);
    }
}
