//! Carom entry point
//!
//! Headless demo host: loads the config, drives the simulation at the
//! fixed cadence, and logs body positions instead of drawing them. Usage:
//! `carom [config.json] [ticks]`.

use std::path::Path;

use carom::host::{Renderer, TICK_INTERVAL, run};
use carom::settings::SimConfig;
use carom::sim::{RenderSnapshot, Simulation};

/// Logs each body's position once a second of simulated time
struct LogRenderer {
    frame: u64,
    stride: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshots: &[RenderSnapshot]) {
        if self.frame % self.stride == 0 {
            for snap in snapshots {
                log::info!(
                    "frame {}: body {} at ({:.1}, {:.1})",
                    self.frame,
                    snap.id,
                    snap.pos.x,
                    snap.pos.y
                );
            }
        }
        self.frame += 1;
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(Path::new(&path)),
        None => SimConfig::default(),
    };
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(600);

    log::info!(
        "Carom starting: {}x{} arena, {} bodies, {} ticks",
        config.arena.width,
        config.arena.height,
        config.bodies.len(),
        max_ticks
    );

    let mut sim = Simulation::new(&config);
    let mut renderer = LogRenderer { frame: 0, stride: 60 };

    let mut ticks: u64 = 0;
    run(&mut sim, &mut renderer, TICK_INTERVAL, || {
        ticks += 1;
        ticks >= max_ticks
    });
}
