use serde::{Deserialize, Serialize};

/// Seconds between a failure and the automatic level reset.
pub const RESPAWN_DELAY_SECS: f32 = 1.0;

/// The run's phase. `Failed` carries its own countdown, so a pending
/// respawn cannot outlive the phase that scheduled it: replacing the phase
/// is the cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Failed { respawn_in: f32 },
}

/// Session state for one run of the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub phase: Phase,
    /// Adversaries killed this run.
    pub kills: u32,
    /// Seconds spent in the Playing phase this run.
    pub elapsed: f32,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Playing,
            kills: 0,
            elapsed: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    /// Enter the Failed phase and schedule the respawn countdown.
    ///
    /// Failing is one-shot: a run that is already Failed keeps its original
    /// countdown.
    pub fn fail(&mut self, respawn_delay: f32) {
        if !self.is_playing() {
            return;
        }
        self.phase = Phase::Failed {
            respawn_in: respawn_delay,
        };
    }

    /// Count a pending respawn down by `dt`.
    ///
    /// Returns true when the countdown elapses; the caller performs the
    /// level reset. Does nothing while Playing.
    pub fn tick_respawn(&mut self, dt: f32) -> bool {
        if let Phase::Failed { respawn_in } = &mut self.phase {
            *respawn_in -= dt;
            return *respawn_in <= 0.0;
        }
        false
    }

    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    /// Back to a fresh run: Playing, no kills, zeroed clock. Drops any
    /// pending respawn.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
