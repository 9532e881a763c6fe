//! Host-side driving of the simulation
//!
//! The core never touches a window or a timer. Presentation implements
//! `Renderer`; `run` supplies the fixed cadence, re-invoking `tick` after
//! each interval and yielding in between. Termination is cooperative: when
//! the quit poll reports true, ticking stops and in-flight state is
//! abandoned with no teardown.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::TICK_INTERVAL_MS;
use crate::sim::{RenderSnapshot, Simulation};

/// Fixed tick interval (~60 Hz)
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Narrow presentation interface: given this tick's snapshots, draw them.
pub trait Renderer {
    fn draw(&mut self, snapshots: &[RenderSnapshot]);
}

/// Drive the simulation at a fixed cadence until `quit` reports true or
/// the simulation is stopped externally.
pub fn run<R: Renderer>(
    sim: &mut Simulation,
    renderer: &mut R,
    interval: Duration,
    mut quit: impl FnMut() -> bool,
) {
    renderer.draw(&sim.snapshots());

    while !sim.is_stopped() {
        let frame_start = Instant::now();

        let snapshots = sim.tick();
        renderer.draw(&snapshots);

        if quit() {
            sim.stop();
            break;
        }

        // Sleep out the remainder of the frame; an overrun tick just
        // starts the next one immediately
        let elapsed = frame_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;

    struct CountingRenderer {
        frames: usize,
        last: Vec<RenderSnapshot>,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, snapshots: &[RenderSnapshot]) {
            self.frames += 1;
            self.last = snapshots.to_vec();
        }
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut sim = Simulation::new(&SimConfig::default());
        let mut renderer = CountingRenderer {
            frames: 0,
            last: Vec::new(),
        };

        let mut ticks = 0;
        run(&mut sim, &mut renderer, Duration::ZERO, || {
            ticks += 1;
            ticks >= 5
        });

        assert!(sim.is_stopped());
        assert_eq!(sim.time_ticks(), 5);
        // Initial draw plus one per tick
        assert_eq!(renderer.frames, 6);
        assert_eq!(renderer.last.len(), 2);
    }

    #[test]
    fn test_run_returns_immediately_when_stopped() {
        let mut sim = Simulation::new(&SimConfig::default());
        sim.stop();
        let mut renderer = CountingRenderer {
            frames: 0,
            last: Vec::new(),
        };

        run(&mut sim, &mut renderer, Duration::ZERO, || false);

        assert_eq!(sim.time_ticks(), 0);
        assert_eq!(renderer.frames, 1);
    }
}
