//! Carom - two disks bouncing in a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall and pair collisions)
//! - `host`: Renderer trait and fixed-rate tick driver
//! - `settings`: Construction-time configuration

pub mod host;
pub mod settings;
pub mod sim;

pub use host::{Renderer, run};
pub use settings::SimConfig;
pub use sim::{Arena, Body, Color, RenderSnapshot, Simulation};

/// Simulation configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Arena defaults (reference scenario)
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 25.0;
}
