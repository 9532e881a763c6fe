//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocity is per-tick displacement)
//! - Stable body order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod pair;
pub mod tick;
pub mod walls;

pub use body::{Arena, Body, Color, RenderSnapshot};
pub use pair::{PairImpact, resolve_pair};
pub use tick::{Phase, Simulation};
pub use walls::resolve_walls;
