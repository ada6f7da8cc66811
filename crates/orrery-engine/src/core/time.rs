/// Fixed timestep accumulator.
/// Ensures simulation logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// The single simulation clock every orbiting body derives its position
/// from. Accumulates seconds of simulation time while running; while
/// paused, `advance` is a no-op and the frozen value is retained so that
/// resuming continues exactly where the clock stopped.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    elapsed: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Accumulate `dt` seconds unless paused. Returns the total elapsed
    /// simulation time after the advance.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !self.paused {
            self.elapsed += dt;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0); // 60 frames worth, but capped at 10
        assert_eq!(steps, 10);
    }

    #[test]
    fn clock_accumulates_while_running() {
        let mut clock = SimulationClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn clock_frozen_while_paused() {
        let mut clock = SimulationClock::new();
        clock.advance(1.0);
        clock.pause();
        clock.advance(10.0);
        clock.advance(10.0);
        assert_eq!(clock.elapsed(), 1.0);
        clock.resume();
        clock.advance(0.5);
        assert!((clock.elapsed() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut clock = SimulationClock::new();
        clock.pause();
        clock.pause();
        assert!(clock.is_paused());
        clock.toggle();
        assert!(!clock.is_paused());
        clock.toggle();
        assert!(clock.is_paused());
    }
}
