//! Orbital motion. All positions are a pure function of one simulation
//! clock: a body's angle is `elapsed * angular_speed`, never an
//! accumulated per-frame delta, so pausing and resuming can never drift
//! an orbit. Axial spin is the one exception — it accumulates
//! incrementally, which is fine because nothing downstream depends on
//! its absolute value.

use std::f64::consts::TAU;

use glam::Vec3;
use orrery_engine::{SceneGraph, SimulationClock};

use crate::builder::SceneBodies;
use crate::catalog::{
    Catalog, MOON_ORBIT_SCALE, PLANET_ORBIT_SCALE, REFERENCE_ORBIT_SECONDS, REFERENCE_PERIOD_DAYS,
    SPIN_TIME_SCALE,
};

/// Orbital angular speed for a planet, in radians per simulation second.
/// Calibrated so a body with the reference period (Earth) completes one
/// orbit in `REFERENCE_ORBIT_SECONDS`.
pub fn planet_angular_speed(orbital_period_days: f64) -> f64 {
    (TAU / REFERENCE_ORBIT_SECONDS) * (REFERENCE_PERIOD_DAYS / orbital_period_days)
}

/// Orbital angular speed for a moon: real-time rate compressed by the
/// spin time scale.
pub fn moon_angular_speed(orbital_period_days: f64) -> f64 {
    TAU / (orbital_period_days * 24.0 * 3600.0) * SPIN_TIME_SCALE
}

/// Axial spin rate in radians per simulation second.
pub fn spin_speed(rotation_period_hours: f64) -> f64 {
    TAU / (rotation_period_hours * 3600.0) * SPIN_TIME_SCALE
}

/// Drives every orbiting body from the shared clock.
pub struct Animator {
    clock: SimulationClock,
}

impl Animator {
    pub fn new() -> Self {
        Self { clock: SimulationClock::new() }
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle();
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Advance the clock and reposition every planet and moon. A no-op
    /// while paused: positions, spins, and the clock all hold still.
    pub fn advance(&mut self, dt: f64, scene: &mut SceneGraph, bodies: &SceneBodies, catalog: &Catalog) {
        if self.clock.is_paused() {
            return;
        }
        let t = self.clock.advance(dt);

        for entry in &bodies.planets {
            let body = catalog.get(entry.body);
            let angle = t * planet_angular_speed(body.orbital_period_days);
            let radius = body.distance * PLANET_ORBIT_SCALE;
            if let Some(container) = scene.get_mut(entry.container) {
                container.local_pos =
                    Vec3::new(angle.cos() as f32 * radius, 0.0, angle.sin() as f32 * radius);
            }
            if let Some(mesh) = scene.get_mut(entry.mesh) {
                mesh.spin += (spin_speed(body.rotation_period_hours) * dt) as f32;
            }
        }

        for entry in &bodies.moons {
            let body = catalog.get(entry.body);
            let angle = t * moon_angular_speed(body.orbital_period_days);
            let radius = body.distance * MOON_ORBIT_SCALE;
            if let Some(mesh) = scene.get_mut(entry.mesh) {
                // Parent-local frame: the planet's motion carries the moon.
                mesh.local_pos =
                    Vec3::new(angle.cos() as f32 * radius, 0.0, angle.sin() as f32 * radius);
                mesh.spin += (spin_speed(body.rotation_period_hours) * dt) as f32;
            }
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_scene;
    use orrery_engine::SceneGraph;

    const DT: f64 = 1.0 / 60.0;

    fn setup() -> (Catalog, SceneGraph, SceneBodies, Animator) {
        let catalog = Catalog::builtin().unwrap();
        let mut scene = SceneGraph::new();
        let bodies = build_scene(&catalog, &mut scene);
        (catalog, scene, bodies, Animator::new())
    }

    fn find_planet<'a>(catalog: &Catalog, bodies: &'a SceneBodies, name: &str) -> &'a crate::builder::OrbitingEntry {
        bodies
            .planets
            .iter()
            .find(|e| catalog.get(e.body).name_en == name)
            .unwrap()
    }

    #[test]
    fn earth_returns_to_start_after_reference_orbit() {
        let (catalog, mut scene, bodies, mut anim) = setup();
        let earth = find_planet(&catalog, &bodies, "Earth");

        // step in 10ms increments to exactly t = 60s
        let steps = (REFERENCE_ORBIT_SECONDS / 0.01).round() as usize;
        for _ in 0..steps {
            anim.advance(0.01, &mut scene, &bodies, &catalog);
        }
        let pos = scene.world_position(earth.container);
        let start = Vec3::new(1.0 * PLANET_ORBIT_SCALE, 0.0, 0.0);
        assert!((pos - start).length() < 1e-2, "earth at {pos} after one reference orbit");
    }

    #[test]
    fn orbit_radius_is_scaled_distance() {
        let (catalog, mut scene, bodies, mut anim) = setup();
        anim.advance(7.3, &mut scene, &bodies, &catalog);
        for entry in &bodies.planets {
            let body = catalog.get(entry.body);
            let r = scene.world_position(entry.container).length();
            assert!((r - body.distance * PLANET_ORBIT_SCALE).abs() < 1e-3, "{}", body.name_en);
        }
    }

    #[test]
    fn position_is_pure_function_of_clock() {
        let (catalog, mut scene_a, bodies_a, mut anim_a) = setup();
        let (_, mut scene_b, bodies_b, mut anim_b) = setup();

        // one big step vs many small steps reach the same positions
        anim_a.advance(5.0, &mut scene_a, &bodies_a, &catalog);
        for _ in 0..500 {
            anim_b.advance(0.01, &mut scene_b, &bodies_b, &catalog);
        }
        for (a, b) in bodies_a.planets.iter().zip(bodies_b.planets.iter()) {
            let pa = scene_a.world_position(a.container);
            let pb = scene_b.world_position(b.container);
            assert!((pa - pb).length() < 1e-4);
        }
    }

    #[test]
    fn pause_freezes_positions_and_spin() {
        let (catalog, mut scene, bodies, mut anim) = setup();
        anim.advance(2.0, &mut scene, &bodies, &catalog);
        let earth = find_planet(&catalog, &bodies, "Earth");
        let frozen_pos = scene.world_position(earth.container);
        let frozen_spin = scene.get(earth.mesh).unwrap().spin;
        let frozen_t = anim.elapsed();

        anim.pause();
        for _ in 0..100 {
            anim.advance(DT, &mut scene, &bodies, &catalog);
        }
        assert_eq!(anim.elapsed(), frozen_t);
        assert_eq!(scene.world_position(earth.container), frozen_pos);
        assert_eq!(scene.get(earth.mesh).unwrap().spin, frozen_spin);

        // resume continues from the frozen clock, not from zero
        anim.resume();
        anim.advance(DT, &mut scene, &bodies, &catalog);
        assert!((anim.elapsed() - (frozen_t + DT)).abs() < 1e-12);
    }

    #[test]
    fn moons_orbit_in_parent_frame() {
        let (catalog, mut scene, bodies, mut anim) = setup();
        anim.advance(3.7, &mut scene, &bodies, &catalog);
        for entry in &bodies.moons {
            let body = catalog.get(entry.body);
            let local = scene.get(entry.mesh).unwrap().local_pos;
            let expected_r = body.distance * MOON_ORBIT_SCALE;
            assert!((local.length() - expected_r).abs() < 1e-3, "{}", body.name_en);

            // world position rides on the parent planet
            let world = scene.world_position(entry.mesh);
            let parent = scene.world_position(entry.container);
            assert!((world - parent).length() < expected_r + 1e-3);
        }
    }

    #[test]
    fn slower_planets_sweep_smaller_angles() {
        assert!(
            planet_angular_speed(88.0) > planet_angular_speed(365.25),
            "mercury must outpace earth"
        );
        assert!(planet_angular_speed(60190.0) < planet_angular_speed(10759.0));
    }
}
