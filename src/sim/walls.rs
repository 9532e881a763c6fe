//! Boundary reflection against the arena walls
//!
//! Each axis is handled independently. A wall only reflects when the disk's
//! leading edge has crossed it AND the velocity still points into it;
//! otherwise a body that penetrated deep on a previous tick would flip its
//! velocity every tick while trying to leave.
//!
//! Position is not clamped back inside the arena. Deep penetration from a
//! large step keeps its position and only reverses velocity.

use super::body::{Arena, Body};

/// Reflect velocity components for any wall the body has crossed while
/// still approaching it.
pub fn resolve_walls(body: &mut Body, arena: &Arena) {
    // Left / right walls
    if body.pos.x - body.radius <= 0.0 && body.vel.x < 0.0 {
        body.vel.x = -body.vel.x;
    }
    if body.pos.x + body.radius >= arena.width && body.vel.x > 0.0 {
        body.vel.x = -body.vel.x;
    }

    // Top / bottom walls
    if body.pos.y - body.radius <= 0.0 && body.vel.y < 0.0 {
        body.vel.y = -body.vel.y;
    }
    if body.pos.y + body.radius >= arena.height && body.vel.y > 0.0 {
        body.vel.y = -body.vel.y;
    }
}
