//! Fixed timestep simulation
//!
//! `Simulation` owns the bodies and advances them one tick at a time in a
//! deterministic order: integrate, resolve walls, resolve the pair, then
//! publish render snapshots. The host schedules the cadence; the core only
//! assumes a roughly constant, small per-tick delta.

use super::body::{Arena, Body, RenderSnapshot};
use super::pair::resolve_pair;
use super::walls::resolve_walls;
use crate::settings::SimConfig;

/// Loop state. `Stopped` is the only terminal state; there is no error or
/// win/lose state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// The simulation: a fixed set of bodies inside a fixed arena.
///
/// Bodies are created once at construction and mutated in place for the
/// life of the process; the renderer only ever sees snapshots.
#[derive(Debug, Clone)]
pub struct Simulation {
    arena: Arena,
    /// Sorted by id for deterministic iteration
    bodies: Vec<Body>,
    phase: Phase,
    time_ticks: u64,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let arena = Arena::new(config.arena.width, config.arena.height);
        let mut bodies: Vec<Body> = config
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| b.to_body(i as u32 + 1))
            .collect();
        bodies.sort_by_key(|b| b.id);

        if bodies.len() != 2 {
            // Pair resolution is defined for exactly two bodies; anything
            // else still integrates and bounces off walls.
            log::warn!(
                "Configured {} bodies; pair collisions need exactly 2",
                bodies.len()
            );
        }

        Self {
            arena,
            bodies,
            phase: Phase::Running,
            time_ticks: 0,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Advance the simulation by one fixed step and return the render
    /// state for every body. A stopped simulation advances nothing and
    /// returns the current snapshots.
    pub fn tick(&mut self) -> Vec<RenderSnapshot> {
        if self.phase == Phase::Stopped {
            return self.snapshots();
        }
        self.time_ticks += 1;

        for body in &mut self.bodies {
            body.integrate();
        }
        for body in &mut self.bodies {
            resolve_walls(body, &self.arena);
        }
        if let [a, b] = &mut self.bodies[..] {
            if let Some(impact) = resolve_pair(a, b) {
                log::debug!(
                    "tick {}: pair collision, impulse {:.3} overlap {:.3}",
                    self.time_ticks,
                    impact.impulse,
                    impact.overlap
                );
            }
        }

        self.snapshots()
    }

    /// Halt further ticking. Idempotent; in-flight state is simply kept.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            log::info!("Simulation stopped after {} ticks", self.time_ticks);
            self.phase = Phase::Stopped;
        }
    }

    /// Current render state without advancing
    pub fn snapshots(&self) -> Vec<RenderSnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }
}
