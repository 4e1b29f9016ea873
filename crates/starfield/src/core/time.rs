/// Clamp a frame delta to a valid simulation step.
/// Time never runs backwards: negative and NaN deltas become zero.
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt >= 0.0 {
        dt
    } else {
        log::warn!("rejected frame delta {}, using 0", dt);
        0.0
    }
}

/// Fixed timestep accumulator.
/// Turns the host's variable frame times into a whole number of fixed update steps.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Upper bound on steps returned by a single `accumulate` call.
    max_steps: u32,
    /// Accumulated time not yet consumed by a step.
    accumulator: f32,
    /// Total steps handed out since construction.
    total_steps: u64,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += sanitize_delta(frame_dt);
        // Drop backlog beyond max_steps so a stalled tab doesn't replay seconds of updates
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.total_steps += steps as u64;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
