//! Actor-vs-adversary contact: stomps and lethal touches.

use crate::config::StompConfig;
use crate::geometry;
use crate::patrol::Patroller;
use crate::physics::Actor;

/// Band below an adversary's top edge that still counts as a stomp.
pub const STOMP_TOLERANCE: f32 = 10.0;
/// Fraction of the jump impulse returned by a stomp bounce.
pub const BOUNCE_DAMPING: f32 = 0.6;

/// What one combat scan produced.
#[derive(Debug, Default)]
pub struct CombatOutcome {
    /// Adversaries stomped this tick, in scan order.
    pub stomped: Vec<usize>,
    /// First lethal contact, if any. The scan stops there.
    pub lethal: Option<usize>,
}

/// Scan live adversaries in index order and resolve any overlap with the
/// actor.
///
/// A contact is a stomp when the actor is descending, its bottom edge was
/// at or above the adversary's top before this tick's vertical move, and
/// its bottom is still within the tolerance band below that top. A stomp
/// kills the adversary and replaces the actor's fall with a damped bounce
/// immediately, so a second adversary later in the same scan is judged
/// against the post-bounce velocity. Any other overlap is lethal and ends
/// the scan with the adversary untouched.
pub fn resolve_combat(
    actor: &mut Actor,
    patrollers: &mut [Patroller],
    config: &StompConfig,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    for (index, patroller) in patrollers.iter_mut().enumerate() {
        if !patroller.alive {
            continue;
        }
        if !geometry::intersects(&actor.aabb(), &patroller.aabb()) {
            continue;
        }

        let bottom = actor.y + actor.height;
        let prev_bottom = bottom - actor.vy;
        let stomped = actor.vy > 0.0
            && prev_bottom <= patroller.y
            && bottom <= patroller.y + config.stomp_tolerance;

        if stomped {
            patroller.alive = false;
            actor.vy = config.jump_velocity * config.bounce_damping;
            outcome.stomped.push(index);
        } else {
            outcome.lethal = Some(index);
            break;
        }
    }

    outcome
}
