use serde::{Deserialize, Serialize};

use crate::input::InputFrame;

/// Display metadata a host shell can show without inspecting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimMetadata {
    pub name: String,
    pub description: String,
}

/// Why a run transitioned to its failed phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FailureCause {
    /// Side or underside contact with a live adversary.
    LethalContact { adversary: usize },
    /// The actor fell past the bottom of the world.
    FellOffWorld,
}

/// Notable state transitions reported by [`Simulation::update`].
///
/// Events describe what happened during a single tick; drivers use them for
/// sound, overlays, and logging. Everything an event carries is also
/// recoverable from the serialized state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// The actor landed on an adversary and killed it. `kills` is the tally
    /// after this stomp.
    AdversaryStomped { adversary: usize, kills: u32 },
    /// The run failed and an automatic respawn was scheduled.
    RunFailed { cause: FailureCause },
    /// The respawn countdown elapsed and the level was reset.
    Respawned,
    /// Every adversary was down and the actor reached the goal. `elapsed` is
    /// the run clock at the moment of completion.
    LevelComplete { elapsed: f32 },
}

/// A fixed-tick simulation a driver can run.
///
/// The driver owns the frame loop, input sampling, and any rendering; the
/// simulation owns state. Each frame the driver converts wall-clock time
/// into fixed ticks (see [`crate::step::FixedTimestep`]) and calls
/// [`Simulation::update`] once per tick with the currently held controls.
pub trait Simulation: Send + Sync {
    /// Static metadata for menus and window titles.
    fn metadata(&self) -> SimMetadata;

    /// Advance exactly one tick.
    ///
    /// `dt` is the tick length in seconds and feeds only clocks and
    /// countdowns; displacement per tick is fixed. Returns the events that
    /// occurred during this tick, in order.
    fn update(&mut self, dt: f32, input: &InputFrame) -> Vec<GameEvent>;

    /// Snapshot the full mutable state as self-describing bytes.
    ///
    /// Two snapshots are byte-identical exactly when the states are equal,
    /// which is what the determinism and restart contracts compare.
    fn serialize_state(&self) -> Vec<u8>;

    /// Reset to the initial level state, dropping any pending respawn.
    fn restart(&mut self);

    /// Nominal ticks per second the driver should aim for.
    fn tick_rate(&self) -> f32 {
        60.0
    }
}
