use serde::{Deserialize, Serialize};

use crate::combat;
use crate::level;
use crate::patrol;
use crate::physics;
use crate::run_state;

/// Data-driven tuning for the simulation.
///
/// Everything here is a tunable magnitude; which platforms exist and where
/// things spawn is level data ([`crate::level::Level`]), not configuration.
/// Loading never validates; [`crate::StompRun::new`] does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StompConfig {
    /// Logical world width (world units).
    pub world_width: f32,
    /// Logical world height (world units).
    pub world_height: f32,
    /// Side length of the square actor.
    pub actor_size: f32,
    /// Downward acceleration added to vertical velocity every tick.
    pub gravity: f32,
    /// Horizontal speed while a direction is held (units/tick).
    pub move_speed: f32,
    /// Vertical velocity at the moment of a jump. Negative is up.
    pub jump_velocity: f32,
    /// How far below the world bottom the actor may fall before the run
    /// fails.
    pub fall_margin: f32,
    /// Adversary width.
    pub adversary_width: f32,
    /// Adversary height.
    pub adversary_height: f32,
    /// Patrol speed magnitude (units/tick).
    pub adversary_speed: f32,
    /// Goal marker width.
    pub goal_width: f32,
    /// Goal marker height.
    pub goal_height: f32,
    /// Band below an adversary's top edge that still counts as a stomp.
    pub stomp_tolerance: f32,
    /// Fraction of the jump impulse returned by a stomp bounce. Must lie
    /// strictly between 0 and 1.
    pub bounce_damping: f32,
    /// Seconds between a failure and the automatic level reset.
    pub respawn_delay_secs: f32,
}

impl Default for StompConfig {
    fn default() -> Self {
        Self {
            world_width: physics::WORLD_WIDTH,
            world_height: physics::WORLD_HEIGHT,
            actor_size: physics::ACTOR_SIZE,
            gravity: physics::GRAVITY,
            move_speed: physics::MOVE_SPEED,
            jump_velocity: physics::JUMP_VELOCITY,
            fall_margin: physics::FALL_MARGIN,
            adversary_width: patrol::ADVERSARY_WIDTH,
            adversary_height: patrol::ADVERSARY_HEIGHT,
            adversary_speed: patrol::ADVERSARY_SPEED,
            goal_width: level::GOAL_WIDTH,
            goal_height: level::GOAL_HEIGHT,
            stomp_tolerance: combat::STOMP_TOLERANCE,
            bounce_damping: combat::BOUNCE_DAMPING,
            respawn_delay_secs: run_state::RESPAWN_DELAY_SECS,
        }
    }
}

impl StompConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("STOMPBOX_SIM_CONFIG")
            .unwrap_or_else(|_| "config/stompbox.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<StompConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    StompConfig::default()
                }
            },
            Err(_) => StompConfig::default(),
        }
    }

    /// Check every tunable, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("actor_size", self.actor_size),
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("adversary_width", self.adversary_width),
            ("adversary_height", self.adversary_height),
            ("adversary_speed", self.adversary_speed),
            ("goal_width", self.goal_width),
            ("goal_height", self.goal_height),
            ("respawn_delay_secs", self.respawn_delay_secs),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let non_negative = [
            ("stomp_tolerance", self.stomp_tolerance),
            ("fall_margin", self.fall_margin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return Err(ConfigError::JumpNotUpward {
                value: self.jump_velocity,
            });
        }
        if !(self.bounce_damping > 0.0 && self.bounce_damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange {
                value: self.bounce_damping,
            });
        }

        Ok(())
    }
}

/// Invalid tuning or level layout, reported before the first tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A tunable that must be a finite positive number is not.
    NotPositive { name: &'static str, value: f32 },
    /// A tunable that must be finite and non-negative is not.
    Negative { name: &'static str, value: f32 },
    /// Jump velocity must be negative: up is negative y.
    JumpNotUpward { value: f32 },
    /// Bounce damping must lie strictly between 0 and 1.
    DampingOutOfRange { value: f32 },
    /// The level has no platforms.
    NoPlatforms,
    /// A platform has zero or negative extent.
    DegeneratePlatform { index: usize },
    /// The goal platform index does not name a platform.
    GoalPlatformOutOfRange {
        index: usize,
        platform_count: usize,
    },
    /// An adversary's patrol platform index does not name a platform.
    PatrolPlatformOutOfRange {
        adversary: usize,
        index: usize,
        platform_count: usize,
    },
    /// An adversary is wider than the platform it patrols.
    PatrolSpanTooNarrow { adversary: usize, platform: usize },
    /// An adversary's spawn offset places it outside its platform's span.
    SpawnOffsetOutOfSpan { adversary: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotPositive { name, value } => {
                write!(f, "{name} must be a finite positive number, got {value}")
            }
            ConfigError::Negative { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            ConfigError::JumpNotUpward { value } => {
                write!(f, "jump_velocity must be negative (upward), got {value}")
            }
            ConfigError::DampingOutOfRange { value } => {
                write!(
                    f,
                    "bounce_damping must lie strictly between 0 and 1, got {value}"
                )
            }
            ConfigError::NoPlatforms => write!(f, "level has no platforms"),
            ConfigError::DegeneratePlatform { index } => {
                write!(f, "platform {index} has zero or negative extent")
            }
            ConfigError::GoalPlatformOutOfRange {
                index,
                platform_count,
            } => {
                write!(
                    f,
                    "goal platform index {index} is out of range ({platform_count} platforms)"
                )
            }
            ConfigError::PatrolPlatformOutOfRange {
                adversary,
                index,
                platform_count,
            } => {
                write!(
                    f,
                    "adversary {adversary} patrols platform {index}, out of range \
                     ({platform_count} platforms)"
                )
            }
            ConfigError::PatrolSpanTooNarrow {
                adversary,
                platform,
            } => {
                write!(f, "adversary {adversary} is wider than platform {platform}")
            }
            ConfigError::SpawnOffsetOutOfSpan { adversary } => {
                write!(f, "adversary {adversary} spawns outside its platform span")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(StompConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_matches_the_module_constants() {
        let cfg = StompConfig::default();
        assert_eq!(cfg.gravity, physics::GRAVITY);
        assert_eq!(cfg.jump_velocity, physics::JUMP_VELOCITY);
        assert_eq!(cfg.adversary_speed, patrol::ADVERSARY_SPEED);
        assert_eq!(cfg.bounce_damping, combat::BOUNCE_DAMPING);
        assert_eq!(cfg.respawn_delay_secs, run_state::RESPAWN_DELAY_SECS);
    }

    #[test]
    fn toml_overrides_merge_over_defaults() {
        let cfg: StompConfig = toml::from_str(
            r#"
            gravity = 0.8
            move_speed = 6.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.gravity, 0.8);
        assert_eq!(cfg.move_speed, 6.0);
        assert_eq!(cfg.jump_velocity, physics::JUMP_VELOCITY);
        assert_eq!(cfg.world_width, physics::WORLD_WIDTH);
    }

    #[test]
    fn non_positive_tunables_are_rejected() {
        let cfg = StompConfig {
            gravity: 0.0,
            ..StompConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "gravity",
                value: 0.0
            })
        );

        let cfg = StompConfig {
            world_width: -800.0,
            ..StompConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "world_width",
                ..
            })
        ));

        let cfg = StompConfig {
            move_speed: f32::NAN,
            ..StompConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "move_speed",
                ..
            })
        ));
    }

    #[test]
    fn negative_tolerances_are_rejected() {
        let cfg = StompConfig {
            stomp_tolerance: -1.0,
            ..StompConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Negative {
                name: "stomp_tolerance",
                ..
            })
        ));

        let cfg = StompConfig {
            fall_margin: 0.0,
            ..StompConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()), "A zero margin is allowed");
    }

    #[test]
    fn upward_jump_velocity_is_required() {
        let cfg = StompConfig {
            jump_velocity: 12.0,
            ..StompConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::JumpNotUpward { value: 12.0 })
        );

        let cfg = StompConfig {
            jump_velocity: 0.0,
            ..StompConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::JumpNotUpward { .. })
        ));
    }

    #[test]
    fn bounce_damping_must_be_a_proper_fraction() {
        for bad in [0.0, 1.0, 1.5, -0.5, f32::NAN] {
            let cfg = StompConfig {
                bounce_damping: bad,
                ..StompConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::DampingOutOfRange { .. })),
                "bounce_damping {bad} must be rejected"
            );
        }
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = ConfigError::NotPositive {
            name: "gravity",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "gravity must be a finite positive number, got 0"
        );

        let err = ConfigError::GoalPlatformOutOfRange {
            index: 9,
            platform_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "goal platform index 9 is out of range (5 platforms)"
        );
    }
}
