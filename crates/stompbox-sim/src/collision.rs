//! Actor-vs-platform collision resolution.
//!
//! The side of a contact is decided from where the actor was before this
//! tick's displacement, reconstructed by subtracting the tick's velocity
//! from the current position. That reconstruction is exact only because
//! velocity is constant across a tick and position updates are single
//! additions, so the subtraction returns the identical pre-move value.

use crate::geometry::{self, Aabb};
use crate::physics::Actor;

/// Resolve the actor against every platform, in platform order.
///
/// `grounded` is cleared first and re-set only by a top-surface landing, so
/// a resting actor must re-qualify through rule one every tick. Each
/// overlapping platform applies exactly one of four outcomes, tested in
/// this order: landing on top, bumping the underside, stopping at the left
/// edge, stopping at the right edge.
pub fn resolve_actor_platforms(actor: &mut Actor, platforms: &[Aabb]) {
    actor.grounded = false;

    for platform in platforms {
        if !geometry::intersects(&actor.aabb(), platform) {
            continue;
        }

        let prev_bottom = actor.y + actor.height - actor.vy;
        let prev_top = actor.y - actor.vy;
        let prev_right = actor.x + actor.width - actor.vx;
        let prev_left = actor.x - actor.vx;

        if prev_bottom <= platform.top() && actor.y + actor.height >= platform.top() {
            // Fell onto the top surface.
            actor.y = platform.top() - actor.height;
            actor.vy = 0.0;
            actor.grounded = true;
        } else if prev_top >= platform.bottom() && actor.y <= platform.bottom() {
            // Rose into the underside.
            actor.y = platform.bottom();
            actor.vy = 0.0;
        } else if prev_right <= platform.left() && actor.x + actor.width >= platform.left() {
            // Ran into the left edge.
            actor.x = platform.left() - actor.width;
            actor.vx = 0.0;
        } else if prev_left >= platform.right() && actor.x <= platform.right() {
            // Ran into the right edge.
            actor.x = platform.right();
            actor.vx = 0.0;
        }
    }
}
