use std::time::Instant;

/// Wall-clock frame timer.
///
/// The host ticks it once per render-loop iteration and feeds the returned
/// delta to `FlyController::update`, which scales movement and rotation by
/// it. One tick per rendered frame is what keeps held-key speeds
/// frame-rate independent.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous tick; advances the baseline
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Drop the interval accumulated so far, e.g. after a setup stall that
    /// should not count against the first frame
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
