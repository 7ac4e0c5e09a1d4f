use serde::{Deserialize, Serialize};

use stompbox_core::input::InputFrame;

use crate::config::StompConfig;
use crate::geometry::Aabb;

/// Logical world width in world units.
pub const WORLD_WIDTH: f32 = 800.0;
/// Logical world height in world units.
pub const WORLD_HEIGHT: f32 = 600.0;
/// Side length of the square actor.
pub const ACTOR_SIZE: f32 = 40.0;
/// Downward acceleration added to vertical velocity every tick.
pub const GRAVITY: f32 = 0.6;
/// Horizontal speed while a direction is held, in units/tick.
pub const MOVE_SPEED: f32 = 4.0;
/// Vertical velocity at the moment of a jump. Negative is up.
pub const JUMP_VELOCITY: f32 = -12.0;
/// How far below the world bottom the actor may fall before the run fails.
pub const FALL_MARGIN: f32 = 200.0;

/// The controllable actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    /// Horizontal velocity in units/tick. Rebuilt from input every tick.
    pub vx: f32,
    /// Vertical velocity in units/tick. Persists and accumulates gravity.
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// Set only by landing on a platform top; cleared by every collision
    /// pass and by jumping.
    pub grounded: bool,
}

impl Actor {
    pub fn new(spawn_x: f32, spawn_y: f32, size: f32) -> Self {
        Self {
            x: spawn_x,
            y: spawn_y,
            vx: 0.0,
            vy: 0.0,
            width: size,
            height: size,
            grounded: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Map this tick's held controls onto the actor.
///
/// Horizontal velocity is rebuilt from scratch: left and right held together
/// resolve to right. A held jump fires only while grounded, so it retriggers
/// on the first tick after each landing.
pub fn apply_controls(actor: &mut Actor, input: &InputFrame, config: &StompConfig) {
    actor.vx = 0.0;
    if input.move_left {
        actor.vx = -config.move_speed;
    }
    if input.move_right {
        actor.vx = config.move_speed;
    }

    if input.jump && actor.grounded {
        actor.vy = config.jump_velocity;
        actor.grounded = false;
    }
}

/// Advance one tick of motion: horizontal displacement, then gravity, then
/// vertical displacement, then the horizontal world clamp. Displacement is
/// fixed per tick rather than scaled by wall-clock time.
///
/// Gravity is unconditional. A grounded actor re-penetrates the platform it
/// rests on every tick and relies on the collision pass to push it back out.
pub fn integrate(actor: &mut Actor, config: &StompConfig) {
    actor.x += actor.vx;

    actor.vy += config.gravity;
    actor.y += actor.vy;

    if actor.x < 0.0 {
        actor.x = 0.0;
    }
    if actor.x + actor.width > config.world_width {
        actor.x = config.world_width - actor.width;
    }
}

/// Whether the actor has fallen past the bottom of the world plus the fall
/// margin. There is no vertical clamp; this is the only bottom boundary.
pub fn fell_out(actor: &Actor, config: &StompConfig) -> bool {
    actor.y > config.world_height + config.fall_margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StompConfig {
        StompConfig::default()
    }

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    #[test]
    fn gravity_accumulates_every_tick() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        integrate(&mut actor, &cfg);
        assert_eq!(actor.vy, 0.6);
        assert_eq!(actor.y, 100.6);
        integrate(&mut actor, &cfg);
        assert_eq!(actor.vy, 1.2);
        assert!(actor.y > 101.6, "Fall speed must grow tick over tick");
    }

    #[test]
    fn gravity_applies_even_while_grounded() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        actor.grounded = true;
        integrate(&mut actor, &cfg);
        assert_eq!(actor.vy, 0.6);
    }

    #[test]
    fn directional_input_sets_velocity() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);

        let left = InputFrame {
            move_left: true,
            ..Default::default()
        };
        apply_controls(&mut actor, &left, &cfg);
        assert_eq!(actor.vx, -cfg.move_speed);

        let right = InputFrame {
            move_right: true,
            ..Default::default()
        };
        apply_controls(&mut actor, &right, &cfg);
        assert_eq!(actor.vx, cfg.move_speed);
    }

    #[test]
    fn right_wins_when_both_directions_held() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        let both = InputFrame {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        apply_controls(&mut actor, &both, &cfg);
        assert_eq!(actor.vx, cfg.move_speed);
    }

    #[test]
    fn horizontal_velocity_does_not_carry_between_ticks() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        let right = InputFrame {
            move_right: true,
            ..Default::default()
        };
        apply_controls(&mut actor, &right, &cfg);
        assert_eq!(actor.vx, cfg.move_speed);

        apply_controls(&mut actor, &idle(), &cfg);
        assert_eq!(actor.vx, 0.0, "Releasing the key must stop the actor");
    }

    #[test]
    fn jump_fires_only_while_grounded() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        let jump = InputFrame {
            jump: true,
            ..Default::default()
        };

        apply_controls(&mut actor, &jump, &cfg);
        assert_eq!(actor.vy, 0.0, "Airborne jump input must be ignored");

        actor.grounded = true;
        apply_controls(&mut actor, &jump, &cfg);
        assert_eq!(actor.vy, cfg.jump_velocity);
        assert!(!actor.grounded, "Jumping must clear the grounded flag");
    }

    #[test]
    fn held_jump_does_not_refire_in_the_air() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 100.0, cfg.actor_size);
        actor.grounded = true;
        let jump = InputFrame {
            jump: true,
            ..Default::default()
        };

        apply_controls(&mut actor, &jump, &cfg);
        integrate(&mut actor, &cfg);
        let rising_vy = actor.vy;

        apply_controls(&mut actor, &jump, &cfg);
        assert_eq!(actor.vy, rising_vy, "Held jump must not reset vy mid-air");
    }

    #[test]
    fn x_clamps_at_the_left_wall() {
        let cfg = config();
        let mut actor = Actor::new(2.0, 100.0, cfg.actor_size);
        actor.vx = -cfg.move_speed;
        integrate(&mut actor, &cfg);
        assert_eq!(actor.x, 0.0);
    }

    #[test]
    fn x_clamps_at_the_right_wall() {
        let cfg = config();
        let mut actor = Actor::new(cfg.world_width - cfg.actor_size - 2.0, 100.0, cfg.actor_size);
        actor.vx = cfg.move_speed;
        integrate(&mut actor, &cfg);
        assert_eq!(actor.x, cfg.world_width - cfg.actor_size);
    }

    #[test]
    fn fall_out_requires_passing_the_margin() {
        let cfg = config();
        let mut actor = Actor::new(100.0, 0.0, cfg.actor_size);

        actor.y = cfg.world_height + cfg.fall_margin;
        assert!(!fell_out(&actor, &cfg), "The threshold itself is still in");

        actor.y = cfg.world_height + cfg.fall_margin + 0.1;
        assert!(fell_out(&actor, &cfg));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // The horizontal world clamp holds for any input sequence.
            #[test]
            fn x_stays_inside_the_world(
                start_x in 0.0f32..760.0,
                held in proptest::collection::vec((proptest::bool::ANY, proptest::bool::ANY), 1..200)
            ) {
                let cfg = config();
                let mut actor = Actor::new(start_x, 100.0, cfg.actor_size);
                for (move_left, move_right) in held {
                    let input = InputFrame {
                        move_left,
                        move_right,
                        jump: false,
                    };
                    apply_controls(&mut actor, &input, &cfg);
                    integrate(&mut actor, &cfg);
                    prop_assert!(
                        actor.x >= 0.0 && actor.x + actor.width <= cfg.world_width,
                        "Actor x={} escaped the world clamp",
                        actor.x
                    );
                }
            }

            // Without a jump or a landing, fall speed only ever grows.
            #[test]
            fn gravity_is_monotonic_in_free_fall(ticks in 1usize..300) {
                let cfg = config();
                let mut actor = Actor::new(100.0, 0.0, cfg.actor_size);
                let mut last_vy = actor.vy;
                for _ in 0..ticks {
                    integrate(&mut actor, &cfg);
                    prop_assert!(actor.vy > last_vy);
                    last_vy = actor.vy;
                }
            }
        }
    }
}
