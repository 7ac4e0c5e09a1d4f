pub mod input;
pub mod simulation;
pub mod step;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::InputFrame;
    use crate::simulation::{GameEvent, Simulation};

    /// An input frame with no controls held.
    pub fn idle_input() -> InputFrame {
        InputFrame::default()
    }

    /// Run `n` simulation ticks with the same input, returning all
    /// accumulated events.
    pub fn run_ticks(
        sim: &mut dyn Simulation,
        n: usize,
        dt: f32,
        input: &InputFrame,
    ) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(sim.update(dt, input));
        }
        all_events
    }

    // ================================================================
    // Simulation Contract Tests
    // ================================================================
    // These functions form a generic test suite that every Simulation
    // implementation must pass. Implementing crates call them from their
    // own #[cfg(test)] modules with a concrete instance.

    /// update() with dt>0 must advance the serialized state (the run clock
    /// at minimum).
    pub fn contract_update_advances_state(sim: &mut dyn Simulation) {
        let before = sim.serialize_state();
        sim.update(0.1, &idle_input());
        let after = sim.serialize_state();
        assert_ne!(
            before, after,
            "update(dt>0) must advance simulation state"
        );
    }

    /// restart() must restore the exact initial snapshot after play.
    ///
    /// `disturb` is held for a handful of ticks first; callers must pick an
    /// input that cannot complete the level inside that window.
    pub fn contract_restart_restores_initial_state(
        sim: &mut dyn Simulation,
        disturb: &InputFrame,
    ) {
        let initial = sim.serialize_state();
        run_ticks(sim, 7, 0.1, disturb);
        assert_ne!(
            initial,
            sim.serialize_state(),
            "Disturbance ticks must change state before restart"
        );
        sim.restart();
        assert_eq!(
            initial,
            sim.serialize_state(),
            "restart() must restore the initial state exactly"
        );
    }

    /// Two instances fed the identical update sequence must stay
    /// byte-identical.
    pub fn contract_updates_are_deterministic(
        a: &mut dyn Simulation,
        b: &mut dyn Simulation,
        inputs: &[InputFrame],
        dt: f32,
    ) {
        for input in inputs {
            a.update(dt, input);
            b.update(dt, input);
        }
        assert_eq!(
            a.serialize_state(),
            b.serialize_state(),
            "Identical update sequences must produce identical state"
        );
    }
}
