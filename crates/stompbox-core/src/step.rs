/// Most fixed steps a single [`FixedTimestep::advance`] call will yield.
/// Time banked beyond the cap is discarded.
const MAX_CATCHUP_STEPS: u32 = 5;

/// Converts variable wall-clock frame deltas into whole fixed steps.
///
/// Fractional remainders carry over between frames, so a driver running at
/// any frame rate produces the same long-run tick count.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// Create a stepper for the given tick rate in Hz. Rates that are not
    /// finite and positive fall back to 60 Hz.
    pub fn new(tick_rate_hz: f32) -> Self {
        let hz = if tick_rate_hz.is_finite() && tick_rate_hz > 0.0 {
            tick_rate_hz
        } else {
            60.0
        };
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Seconds per fixed step.
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Bank a frame delta and return how many fixed steps to simulate now.
    ///
    /// Non-finite or negative deltas are ignored. After a long stall at most
    /// [`MAX_CATCHUP_STEPS`] steps are returned and the rest of the banked
    /// time is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        let mut steps = 0;
        while self.accumulator >= self.interval && steps < MAX_CATCHUP_STEPS {
            self.accumulator -= self.interval;
            steps += 1;
        }
        if steps == MAX_CATCHUP_STEPS {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Drop any banked time, e.g. when resuming from a pause.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
