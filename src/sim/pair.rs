//! Two-body elastic collision response
//!
//! Equal unit masses: the impulse exchanges the velocity components along
//! the collision normal and leaves tangential components untouched. A
//! symmetric positional correction removes the residual overlap; without
//! it the impulse alone leaves the disks visually interpenetrating across
//! frames at the simulated step size.

use glam::Vec2;

use super::body::Body;

/// Summary of a resolved collision, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairImpact {
    /// Unit normal from `a` toward `b`
    pub normal: Vec2,
    /// Overlap depth removed by the position correction
    pub overlap: f32,
    /// Impulse magnitude applied along the normal
    pub impulse: f32,
}

/// Resolve the collision between exactly two bodies, if any.
///
/// Returns `None` when the disks are apart, already separating along the
/// normal, or exactly concentric (zero distance leaves no defined normal;
/// resolution is skipped for that tick rather than treated as an error).
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Option<PairImpact> {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let min_dist = a.radius + b.radius;

    if dist == 0.0 {
        return None;
    }
    if dist >= min_dist {
        return None;
    }

    let normal = delta / dist;

    // Relative approach speed along the normal; positive means the
    // centers are already separating, and responding again would make
    // touching disks stick together re-triggering every tick.
    let vn = (b.vel - a.vel).dot(normal);
    if vn > 0.0 {
        return None;
    }

    // Equal unit masses: full exchange of the normal components
    let impulse = -vn;
    a.vel -= impulse * normal;
    b.vel += impulse * normal;

    // Push each disk half the overlap apart so they do not stay stuck
    let overlap = min_dist - dist;
    let correction = normal * (overlap / 2.0);
    a.pos -= correction;
    b.pos += correction;

    Some(PairImpact {
        normal,
        overlap,
        impulse,
    })
}
