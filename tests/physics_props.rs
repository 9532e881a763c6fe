//! Randomized conservation properties for the physics core

use glam::Vec2;
use proptest::prelude::*;

use carom::sim::{Arena, Body, Color, resolve_pair, resolve_walls};

fn body(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Body {
    Body::new(id, pos, vel, radius, Color::WHITE)
}

proptest! {
    /// Wall reflection only flips signs, so speed magnitude is conserved
    /// everywhere in (and around) the arena.
    #[test]
    fn wall_resolution_conserves_speed(
        x in -50.0f32..650.0,
        y in -50.0f32..450.0,
        vx in -10.0f32..10.0,
        vy in -10.0f32..10.0,
        radius in 1.0f32..40.0,
    ) {
        let arena = Arena::new(600.0, 400.0);
        let mut b = body(1, Vec2::new(x, y), Vec2::new(vx, vy), radius);
        let speed_before = b.vel.length();

        resolve_walls(&mut b, &arena);

        prop_assert!((b.vel.length() - speed_before).abs() < 1e-4);
        prop_assert_eq!(b.vel.x.abs(), vx.abs());
        prop_assert_eq!(b.vel.y.abs(), vy.abs());
        // Never repositions
        prop_assert_eq!(b.pos, Vec2::new(x, y));
    }

    /// Wall resolution is idempotent within a tick: a second pass finds
    /// every crossed wall already separating.
    #[test]
    fn wall_resolution_is_idempotent(
        x in -50.0f32..650.0,
        y in -50.0f32..450.0,
        vx in -10.0f32..10.0,
        vy in -10.0f32..10.0,
    ) {
        let arena = Arena::new(600.0, 400.0);
        let mut b = body(1, Vec2::new(x, y), Vec2::new(vx, vy), 25.0);

        resolve_walls(&mut b, &arena);
        let settled = b.vel;
        resolve_walls(&mut b, &arena);

        prop_assert_eq!(b.vel, settled);
    }

    /// When the pair responds, total momentum and kinetic energy are
    /// conserved (equal unit masses, fully elastic).
    #[test]
    fn pair_response_conserves_momentum_and_energy(
        ax in 0.0f32..100.0,
        ay in 0.0f32..100.0,
        // Offset keeps the centers overlapping but never coincident
        dx in 5.0f32..35.0,
        dy in -20.0f32..20.0,
        avx in -10.0f32..10.0,
        avy in -10.0f32..10.0,
        bvx in -10.0f32..10.0,
        bvy in -10.0f32..10.0,
    ) {
        let a_pos = Vec2::new(ax, ay);
        let b_pos = a_pos + Vec2::new(dx, dy);
        prop_assume!(a_pos.distance(b_pos) < 40.0);

        let mut a = body(1, a_pos, Vec2::new(avx, avy), 20.0);
        let mut b = body(2, b_pos, Vec2::new(bvx, bvy), 20.0);
        let momentum_before = a.vel + b.vel;
        let energy_before = a.vel.length_squared() + b.vel.length_squared();

        if let Some(impact) = resolve_pair(&mut a, &mut b) {
            let momentum_after = a.vel + b.vel;
            let energy_after = a.vel.length_squared() + b.vel.length_squared();
            prop_assert!((momentum_after - momentum_before).length() < 1e-3);
            prop_assert!((energy_after - energy_before).abs() < 1e-1);
            // Correction separates the centers to exactly the radii sum
            prop_assert!((a.pos.distance(b.pos) - 40.0).abs() < 1e-3);
            prop_assert!(impact.overlap > 0.0);
        } else {
            // Skipped pairs are left completely untouched
            prop_assert_eq!(a.pos, a_pos);
            prop_assert_eq!(b.pos, b_pos);
            prop_assert_eq!(a.vel, Vec2::new(avx, avy));
            prop_assert_eq!(b.vel, Vec2::new(bvx, bvy));
        }
    }
}
