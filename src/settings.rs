//! Construction-time configuration
//!
//! Arena dimensions plus starting position, velocity, radius, and color
//! for each body. Loaded from a JSON file when one is given; any load or
//! parse failure falls back to the built-in reference scenario.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Body, Color};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

/// Starting state for one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Color,
}

impl BodyConfig {
    pub fn to_body(&self, id: u32) -> Body {
        Body::new(
            id,
            Vec2::new(self.x, self.y),
            Vec2::new(self.vx, self.vy),
            self.radius,
            self.color,
        )
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for SimConfig {
    /// The reference scenario: 600x400 arena, two disks launched at each
    /// other off-axis.
    fn default() -> Self {
        Self {
            arena: ArenaConfig {
                width: ARENA_WIDTH,
                height: ARENA_HEIGHT,
            },
            bodies: vec![
                BodyConfig {
                    x: ARENA_WIDTH / 3.0,
                    y: ARENA_HEIGHT / 2.0,
                    vx: 4.0,
                    vy: 3.0,
                    radius: BODY_RADIUS,
                    color: Color::CYAN,
                },
                BodyConfig {
                    x: 2.0 * ARENA_WIDTH / 3.0,
                    y: ARENA_HEIGHT / 2.0,
                    vx: -3.0,
                    vy: -4.0,
                    radius: BODY_RADIUS,
                    color: Color::MAGENTA,
                },
            ],
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load configuration from a JSON file, falling back to the reference
    /// scenario on any error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
