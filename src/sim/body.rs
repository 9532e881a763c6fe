//! Core simulation types
//!
//! Bodies are pure data: position, velocity, radius, plus a render color
//! the physics never reads. The arena is fixed at startup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular simulation bounds.
///
/// Origin is top-left; y increases downward (screen convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// RGB render color, carried through to snapshots untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CYAN: Self = Self { r: 0, g: 255, b: 255 };
    pub const MAGENTA: Self = Self { r: 255, g: 0, b: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };
}

/// A simulated disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Stable identity; distinguishes bodies even when state coincides
    pub id: u32,
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance position by one tick's velocity. Applied unconditionally
    /// once per tick, before any collision resolution.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Read-only render state for the host
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            id: self.id,
            pos: self.pos,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Per-body render state handed to the renderer each tick.
///
/// The renderer owns no simulation state; this is the whole contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_adds_velocity() {
        let mut body = Body::new(
            1,
            Vec2::new(200.0, 200.0),
            Vec2::new(4.0, 3.0),
            25.0,
            Color::CYAN,
        );
        body.integrate();
        assert_eq!(body.pos, Vec2::new(204.0, 203.0));
        // Velocity untouched
        assert_eq!(body.vel, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let body = Body::new(
            7,
            Vec2::new(10.0, 20.0),
            Vec2::new(-1.0, 0.5),
            8.0,
            Color::MAGENTA,
        );
        let snap = body.snapshot();
        assert_eq!(snap.id, 7);
        assert_eq!(snap.pos, body.pos);
        assert_eq!(snap.radius, 8.0);
        assert_eq!(snap.color, Color::MAGENTA);
    }
}
