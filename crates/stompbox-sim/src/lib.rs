pub mod collision;
pub mod combat;
pub mod config;
pub mod geometry;
pub mod level;
pub mod patrol;
pub mod physics;
pub mod run_state;

use serde::{Deserialize, Serialize};

use stompbox_core::input::InputFrame;
use stompbox_core::simulation::{FailureCause, GameEvent, SimMetadata, Simulation};

use config::{ConfigError, StompConfig};
use geometry::Aabb;
use level::Level;
use patrol::Patroller;
use physics::Actor;
use run_state::{Phase, RunState};

/// Everything that changes during play, snapshotted as one serializable
/// aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StompState {
    pub actor: Actor,
    pub patrollers: Vec<Patroller>,
    pub run: RunState,
}

/// The stomp-and-run platformer.
///
/// One actor, one fixed level, patrolling adversaries, and a goal that only
/// accepts the actor once every adversary is down. Each [`Simulation::update`]
/// call is one tick: controls, motion, platform collisions, patrols, combat,
/// then the win check. A failure freezes the world and schedules an
/// automatic respawn.
#[derive(Debug)]
pub struct StompRun {
    state: StompState,
    level: Level,
    config: StompConfig,
}

impl StompRun {
    /// Build a run over the given tuning and layout, rejecting invalid
    /// tunables and dangling level references before the first tick.
    pub fn new(config: StompConfig, level: Level) -> Result<Self, ConfigError> {
        config.validate()?;
        level.validate(&config)?;
        let state = StompState {
            actor: Actor::new(level.spawn_x, level.spawn_y, config.actor_size),
            patrollers: level.spawn_patrollers(&config),
            run: RunState::new(),
        };
        Ok(Self {
            state,
            level,
            config,
        })
    }

    /// The built-in level under loaded (or default) tuning.
    pub fn standard() -> Self {
        Self::new(StompConfig::load(), Level::standard())
            .expect("built-in level must validate")
    }

    pub fn state(&self) -> &StompState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &StompConfig {
        &self.config
    }

    /// The goal marker's rectangle, for rendering and the win check.
    pub fn goal_marker(&self) -> Aabb {
        self.level.goal_marker(&self.config)
    }

    /// Whether the goal currently accepts the actor.
    pub fn goal_active(&self) -> bool {
        self.state.run.kills == self.level.total_adversaries()
    }

    /// Restore the exact initial state: actor and adversaries at spawn,
    /// fresh run clock, any pending respawn dropped.
    fn reset_level(&mut self) {
        self.state.actor = Actor::new(
            self.level.spawn_x,
            self.level.spawn_y,
            self.config.actor_size,
        );
        self.state.patrollers = self.level.spawn_patrollers(&self.config);
        self.state.run.reset();
    }

    fn fail(&mut self, cause: FailureCause, events: &mut Vec<GameEvent>) {
        self.state.actor.vx = 0.0;
        self.state.run.fail(self.config.respawn_delay_secs);
        tracing::debug!(?cause, "Run failed, respawn scheduled");
        events.push(GameEvent::RunFailed { cause });
    }

    fn playing_tick(&mut self, dt: f32, input: &InputFrame) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.state.run.elapsed += dt;

        physics::apply_controls(&mut self.state.actor, input, &self.config);
        physics::integrate(&mut self.state.actor, &self.config);

        // The fall check precedes collision: below the world there is
        // nothing left to collide with.
        if physics::fell_out(&self.state.actor, &self.config) {
            self.fail(FailureCause::FellOffWorld, &mut events);
            return events;
        }

        collision::resolve_actor_platforms(&mut self.state.actor, &self.level.platforms);

        for patroller in &mut self.state.patrollers {
            let span = &self.level.platforms[patroller.platform];
            patroller.advance(span);
        }

        let outcome =
            combat::resolve_combat(&mut self.state.actor, &mut self.state.patrollers, &self.config);
        for adversary in outcome.stomped {
            self.state.run.record_kill();
            events.push(GameEvent::AdversaryStomped {
                adversary,
                kills: self.state.run.kills,
            });
        }
        if let Some(adversary) = outcome.lethal {
            self.fail(FailureCause::LethalContact { adversary }, &mut events);
            return events;
        }

        if self.goal_active()
            && geometry::intersects(&self.state.actor.aabb(), &self.goal_marker())
        {
            let elapsed = self.state.run.elapsed;
            tracing::debug!(elapsed, "Level complete");
            events.push(GameEvent::LevelComplete { elapsed });
            self.reset_level();
        }

        events
    }

    fn failed_tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        // Gravity keeps settling the actor; controls, patrols, combat, and
        // the run clock are frozen until the respawn.
        physics::integrate(&mut self.state.actor, &self.config);
        collision::resolve_actor_platforms(&mut self.state.actor, &self.level.platforms);

        if self.state.run.tick_respawn(dt) {
            tracing::debug!("Respawn countdown elapsed, resetting level");
            self.reset_level();
            events.push(GameEvent::Respawned);
        }

        events
    }
}

impl Default for StompRun {
    fn default() -> Self {
        Self::new(StompConfig::default(), Level::standard())
            .expect("built-in level must validate")
    }
}

impl Simulation for StompRun {
    fn metadata(&self) -> SimMetadata {
        SimMetadata {
            name: "Stompbox".to_string(),
            description: "Stomp every patroller, then reach the flag.".to_string(),
        }
    }

    fn update(&mut self, dt: f32, input: &InputFrame) -> Vec<GameEvent> {
        match self.state.run.phase {
            Phase::Playing => self.playing_tick(dt, input),
            Phase::Failed { .. } => self.failed_tick(dt),
        }
    }

    fn serialize_state(&self) -> Vec<u8> {
        serde_json::to_vec(&self.state).unwrap_or_default()
    }

    fn restart(&mut self) {
        self.reset_level();
    }

    fn tick_rate(&self) -> f32 {
        60.0
    }
}
