use std::time::Duration;

/// Fixed-timestep accumulator. Real elapsed time goes in, a whole number of
/// simulation ticks comes out; the remainder carries over to the next frame.
pub struct FixedTimestep {
    timestep: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    /// Upper bound on ticks run for one frame, so a long stall (window drag,
    /// debugger) does not trigger a burst of catch-up updates.
    pub const MAX_STEPS_PER_FRAME: u32 = 8;

    pub fn new(timestep: Duration) -> Self {
        Self {
            timestep,
            accumulator: Duration::ZERO,
        }
    }

    pub fn from_secs(timestep: f64) -> Self {
        Self::new(Duration::from_secs_f64(timestep))
    }

    /// Adds `elapsed` to the accumulator and returns how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.timestep.is_zero() {
            return 1;
        }

        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.timestep {
            self.accumulator -= self.timestep;
            steps += 1;
            if steps == Self::MAX_STEPS_PER_FRAME {
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        steps
    }
}
