use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, StompConfig};
use crate::geometry::Aabb;
use crate::patrol::{PatrolHeading, Patroller};
use crate::physics;

/// Default goal marker width.
pub const GOAL_WIDTH: f32 = 24.0;
/// Default goal marker height.
pub const GOAL_HEIGHT: f32 = 40.0;

/// Where an adversary starts and which platform bounds its patrol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversarySpawn {
    /// Index of the patrol platform.
    pub platform: usize,
    /// Spawn distance from the platform's left edge.
    pub offset_x: f32,
    pub heading: PatrolHeading,
}

impl AdversarySpawn {
    /// Build the live patroller standing on its platform.
    pub fn materialize(&self, platforms: &[Aabb], config: &StompConfig) -> Patroller {
        let platform = &platforms[self.platform];
        Patroller {
            x: platform.x + self.offset_x,
            y: platform.y - config.adversary_height,
            vx: self.heading.signum() * config.adversary_speed,
            width: config.adversary_width,
            height: config.adversary_height,
            alive: true,
            platform: self.platform,
        }
    }
}

/// Static level data. Immutable once a run is constructed; everything that
/// changes during play lives in [`crate::StompState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Aabb>,
    /// Actor spawn position (top-left corner).
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Index of the platform carrying the goal marker.
    pub goal_platform: usize,
    pub adversaries: Vec<AdversarySpawn>,
}

impl Level {
    /// The built-in layout: a full-width floor, four ledges rising to the
    /// right, the goal atop the highest ledge, and three patrollers.
    pub fn standard() -> Self {
        Self {
            platforms: vec![
                Aabb::new(0.0, physics::WORLD_HEIGHT - 40.0, physics::WORLD_WIDTH, 40.0),
                Aabb::new(80.0, 420.0, 160.0, 20.0),
                Aabb::new(300.0, 340.0, 120.0, 20.0),
                Aabb::new(500.0, 260.0, 180.0, 20.0),
                Aabb::new(650.0, 180.0, 100.0, 20.0),
            ],
            spawn_x: 100.0,
            spawn_y: 100.0,
            goal_platform: 4,
            adversaries: vec![
                AdversarySpawn {
                    platform: 1,
                    offset_x: 20.0,
                    heading: PatrolHeading::Right,
                },
                AdversarySpawn {
                    platform: 3,
                    offset_x: 120.0,
                    heading: PatrolHeading::Left,
                },
                AdversarySpawn {
                    platform: 0,
                    offset_x: 420.0,
                    heading: PatrolHeading::Right,
                },
            ],
        }
    }

    /// The goal marker, centered on top of its platform.
    pub fn goal_marker(&self, config: &StompConfig) -> Aabb {
        let platform = &self.platforms[self.goal_platform];
        Aabb::new(
            platform.x + (platform.width - config.goal_width) / 2.0,
            platform.y - config.goal_height,
            config.goal_width,
            config.goal_height,
        )
    }

    pub fn total_adversaries(&self) -> u32 {
        self.adversaries.len() as u32
    }

    /// Materialize every adversary at its spawn pose.
    pub fn spawn_patrollers(&self, config: &StompConfig) -> Vec<Patroller> {
        self.adversaries
            .iter()
            .map(|spawn| spawn.materialize(&self.platforms, config))
            .collect()
    }

    /// Structural validation: the platform list, the goal reference, and
    /// every patrol reference and span. Reports the first violation.
    pub fn validate(&self, config: &StompConfig) -> Result<(), ConfigError> {
        if self.platforms.is_empty() {
            return Err(ConfigError::NoPlatforms);
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            if !(platform.width.is_finite() && platform.width > 0.0)
                || !(platform.height.is_finite() && platform.height > 0.0)
            {
                return Err(ConfigError::DegeneratePlatform { index });
            }
        }
        if self.goal_platform >= self.platforms.len() {
            return Err(ConfigError::GoalPlatformOutOfRange {
                index: self.goal_platform,
                platform_count: self.platforms.len(),
            });
        }
        for (adversary, spawn) in self.adversaries.iter().enumerate() {
            if spawn.platform >= self.platforms.len() {
                return Err(ConfigError::PatrolPlatformOutOfRange {
                    adversary,
                    index: spawn.platform,
                    platform_count: self.platforms.len(),
                });
            }
            let platform = &self.platforms[spawn.platform];
            if config.adversary_width > platform.width {
                return Err(ConfigError::PatrolSpanTooNarrow {
                    adversary,
                    platform: spawn.platform,
                });
            }
            if !spawn.offset_x.is_finite()
                || spawn.offset_x < 0.0
                || spawn.offset_x + config.adversary_width > platform.width
            {
                return Err(ConfigError::SpawnOffsetOutOfSpan { adversary });
            }
        }
        Ok(())
    }
}
