use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// Default adversary width.
pub const ADVERSARY_WIDTH: f32 = 30.0;
/// Default adversary height.
pub const ADVERSARY_HEIGHT: f32 = 30.0;
/// Default patrol speed magnitude, in units/tick.
pub const ADVERSARY_SPEED: f32 = 1.5;

/// Initial patrol direction for an adversary spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolHeading {
    Left,
    Right,
}

impl PatrolHeading {
    /// -1.0 for left, +1.0 for right.
    pub fn signum(self) -> f32 {
        match self {
            PatrolHeading::Left => -1.0,
            PatrolHeading::Right => 1.0,
        }
    }
}

/// A patrolling adversary.
///
/// Patrollers walk back and forth along one platform and never fall off it.
/// A dead patroller keeps its position but stops moving and stops taking
/// part in combat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patroller {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity in units/tick; the sign is the walk direction.
    pub vx: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    /// Index of the platform whose span bounds this patrol.
    pub platform: usize,
}

impl Patroller {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one patrol tick along the bounding platform.
    ///
    /// Walking past either end of the span clamps the patroller back to the
    /// bound and reverses its direction. Dead patrollers do not move.
    pub fn advance(&mut self, platform: &Aabb) {
        if !self.alive {
            return;
        }

        self.x += self.vx;

        if self.x < platform.left() {
            self.x = platform.left();
            self.vx = self.vx.abs();
        }
        if self.x + self.width > platform.right() {
            self.x = platform.right() - self.width;
            self.vx = -self.vx.abs();
        }
    }
}
