//! Particle kinematics: force integration, speed capping, edge bounces,
//! and the bounded position history used for trail rendering.

use crate::prng::SplitMix64;
use glam::DVec2;
use std::collections::VecDeque;

/// Maximum particle speed in canvas units per step.
pub const MAX_SPEED: f64 = 2.0;
/// Fixed force-to-acceleration gain applied each update.
pub const FORCE_GAIN: f64 = 0.3;
/// Distance from the canvas edge at which particles bounce.
pub const EDGE_MARGIN: f64 = 2.0;
/// Fraction of velocity retained along the reflected axis after a bounce.
pub const BOUNCE_DAMPING: f64 = 0.7;
/// Maximum number of past positions kept for trail rendering.
pub const MAX_HISTORY: usize = 20;
/// Inset from the canvas edges for random spawn positions.
pub const SPAWN_INSET: f64 = 50.0;
/// Upper end of the hue range mapped from the speed ratio.
pub const HUE_RANGE: f64 = 120.0;

/// A single particle driven by an external force field.
///
/// The particle owns its position, velocity, canvas bounds, a bounded
/// history of recent positions (most-recent-last), and a hue hint derived
/// from its speed. [`Particle::update`] is the sole per-frame mutator.
#[derive(Debug, Clone)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    bounds: DVec2,
    history: VecDeque<DVec2>,
    color_hint: f64,
}

impl Particle {
    /// Creates a particle at a random position inside the spawn inset,
    /// with zero velocity and an empty history.
    pub fn new(width: f64, height: f64, rng: &mut SplitMix64) -> Self {
        Self {
            position: spawn_position(width, height, rng),
            velocity: DVec2::ZERO,
            bounds: DVec2::new(width, height),
            history: VecDeque::with_capacity(MAX_HISTORY),
            color_hint: 0.0,
        }
    }

    /// Creates a particle at an explicit position.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::ZERO,
            bounds: DVec2::new(width, height),
            history: VecDeque::with_capacity(MAX_HISTORY),
            color_hint: 0.0,
        }
    }

    /// Advances the particle one step under `force`.
    ///
    /// Integrates the force into velocity at a fixed gain, caps speed,
    /// records the pre-move position in the history, moves, then resolves
    /// edge collisions per axis: the position is clamped to the margin and
    /// the corresponding velocity component is reflected with damping. A
    /// bounce clears the history, since the clamp jump would otherwise draw
    /// a trail segment across the canvas.
    pub fn update(&mut self, force: DVec2, speed_multiplier: f64) {
        self.velocity += force * FORCE_GAIN;
        self.velocity = self.velocity.clamp_length_max(MAX_SPEED);

        self.history.push_back(self.position);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }

        self.position += self.velocity * speed_multiplier;

        let mut bounced = false;
        if self.position.x < EDGE_MARGIN {
            self.position.x = EDGE_MARGIN;
            self.velocity.x = -self.velocity.x * BOUNCE_DAMPING;
            bounced = true;
        } else if self.position.x > self.bounds.x - EDGE_MARGIN {
            self.position.x = self.bounds.x - EDGE_MARGIN;
            self.velocity.x = -self.velocity.x * BOUNCE_DAMPING;
            bounced = true;
        }
        if self.position.y < EDGE_MARGIN {
            self.position.y = EDGE_MARGIN;
            self.velocity.y = -self.velocity.y * BOUNCE_DAMPING;
            bounced = true;
        } else if self.position.y > self.bounds.y - EDGE_MARGIN {
            self.position.y = self.bounds.y - EDGE_MARGIN;
            self.velocity.y = -self.velocity.y * BOUNCE_DAMPING;
            bounced = true;
        }

        if bounced {
            self.history.clear();
        }

        self.color_hint = self.velocity.length() / MAX_SPEED * HUE_RANGE;
    }

    /// Reinitializes the particle exactly as construction would: random
    /// inset position, zero velocity, empty history.
    pub fn reset(&mut self, width: f64, height: f64, rng: &mut SplitMix64) {
        self.position = spawn_position(width, height, rng);
        self.velocity = DVec2::ZERO;
        self.bounds = DVec2::new(width, height);
        self.history.clear();
        self.color_hint = 0.0;
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Recent positions, oldest first, most-recent-last. At most
    /// [`MAX_HISTORY`] entries; empty right after a bounce or reset.
    pub fn history(&self) -> &VecDeque<DVec2> {
        &self.history
    }

    /// Hue hint in [0, [`HUE_RANGE`]], proportional to the capped speed.
    pub fn color_hint(&self) -> f64 {
        self.color_hint
    }
}

/// Uniform position inside the spawn inset. Small canvases degrade
/// gracefully: the inset never exceeds the half-dimension.
fn spawn_position(width: f64, height: f64, rng: &mut SplitMix64) -> DVec2 {
    let inset_x = SPAWN_INSET.min(width * 0.5);
    let inset_y = SPAWN_INSET.min(height * 0.5);
    DVec2::new(
        rng.next_range(inset_x, width - inset_x),
        rng.next_range(inset_y, height - inset_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 600.0;

    // -- Construction and spawn --

    #[test]
    fn new_spawns_inside_the_inset_with_zero_velocity() {
        let mut rng = SplitMix64::new(42);
        for _ in 0..1000 {
            let p = Particle::new(W, H, &mut rng);
            let pos = p.position();
            assert!((SPAWN_INSET..=W - SPAWN_INSET).contains(&pos.x), "x = {}", pos.x);
            assert!((SPAWN_INSET..=H - SPAWN_INSET).contains(&pos.y), "y = {}", pos.y);
            assert_eq!(p.velocity(), DVec2::ZERO);
            assert!(p.history().is_empty());
            assert_eq!(p.color_hint(), 0.0);
        }
    }

    #[test]
    fn at_places_particle_exactly() {
        let p = Particle::at(12.5, 99.0, W, H);
        assert_eq!(p.position(), DVec2::new(12.5, 99.0));
    }

    #[test]
    fn spawn_handles_canvases_smaller_than_the_inset() {
        let mut rng = SplitMix64::new(1);
        let p = Particle::new(60.0, 40.0, &mut rng);
        let pos = p.position();
        assert!((0.0..=60.0).contains(&pos.x));
        assert!((0.0..=40.0).contains(&pos.y));
    }

    // -- Force integration and speed cap --

    #[test]
    fn update_integrates_force_at_fixed_gain() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        p.update(DVec2::new(1.0, 0.0), 1.0);
        assert!((p.velocity().x - FORCE_GAIN).abs() < 1e-12);
        assert_eq!(p.velocity().y, 0.0);
        assert!((p.position().x - (400.0 + FORCE_GAIN)).abs() < 1e-12);
    }

    #[test]
    fn speed_is_capped_exactly_at_max_speed() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        // Keep pushing along +x; after a few steps the cap binds.
        for _ in 0..20 {
            p.update(DVec2::new(1.0, 0.0), 0.0);
        }
        assert!((p.velocity().length() - MAX_SPEED).abs() < 1e-12);
        // Direction is preserved by the cap.
        assert!(p.velocity().x > 0.0);
        assert_eq!(p.velocity().y, 0.0);
    }

    #[test]
    fn cap_preserves_direction_for_diagonal_forces() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        for _ in 0..50 {
            p.update(DVec2::new(0.6, 0.8), 0.0);
        }
        let v = p.velocity();
        assert!((v.length() - MAX_SPEED).abs() < 1e-12);
        // Velocity stays parallel to the force.
        assert!((v.y / v.x - 0.8 / 0.6).abs() < 1e-9);
    }

    // -- History --

    #[test]
    fn history_is_bounded_and_ordered() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        for _ in 0..100 {
            p.update(DVec2::new(0.3, 0.1), 1.0);
            assert!(p.history().len() <= MAX_HISTORY);
        }
        assert_eq!(p.history().len(), MAX_HISTORY);
        // Most-recent-last: the back entry is the position recorded just
        // before the last move.
        let back = *p.history().back().unwrap();
        let prev = p.position() - p.velocity() * 1.0;
        assert!((back - prev).length() < 1e-9);
    }

    #[test]
    fn history_records_pre_move_position() {
        let mut p = Particle::at(100.0, 100.0, W, H);
        p.update(DVec2::new(1.0, 0.0), 1.0);
        assert_eq!(p.history().len(), 1);
        assert_eq!(*p.history().front().unwrap(), DVec2::new(100.0, 100.0));
    }

    // -- Boundary collisions --

    #[test]
    fn particle_never_escapes_the_canvas() {
        let mut rng = SplitMix64::new(99);
        let mut p = Particle::new(W, H, &mut rng);
        // Strong swirling forces for many steps.
        for i in 0..5000 {
            let a = i as f64 * 0.13;
            p.update(DVec2::new(a.cos(), a.sin()), 3.0);
            let pos = p.position();
            assert!(
                (EDGE_MARGIN..=W - EDGE_MARGIN).contains(&pos.x),
                "x escaped: {}",
                pos.x
            );
            assert!(
                (EDGE_MARGIN..=H - EDGE_MARGIN).contains(&pos.y),
                "y escaped: {}",
                pos.y
            );
        }
    }

    #[test]
    fn bounce_clamps_reflects_and_damps() {
        let mut p = Particle::at(3.0, 300.0, W, H);
        // Build leftward speed, then cross the margin.
        p.update(DVec2::new(-1.0, 0.0), 0.0);
        let vx_before = p.velocity().x;
        p.update(DVec2::new(-1.0, 0.0), 20.0);
        // Clamped to the margin, velocity reflected with damping.
        assert_eq!(p.position().x, EDGE_MARGIN);
        let expected_vx = -(vx_before - FORCE_GAIN) * BOUNCE_DAMPING;
        assert!(
            (p.velocity().x - expected_vx).abs() < 1e-12,
            "vx = {}, expected {expected_vx}",
            p.velocity().x
        );
        assert!(p.velocity().x > 0.0, "bounce should point back inward");
    }

    #[test]
    fn bounce_clears_history() {
        let mut p = Particle::at(100.0, 300.0, W, H);
        for _ in 0..10 {
            p.update(DVec2::new(-1.0, 0.0), 1.0);
        }
        assert!(!p.history().is_empty());
        // Push hard into the left wall.
        p.update(DVec2::new(-1.0, 0.0), 200.0);
        assert_eq!(p.position().x, EDGE_MARGIN);
        assert!(
            p.history().is_empty(),
            "history must be cleared on a bounce"
        );
    }

    #[test]
    fn corner_bounce_clears_history_once() {
        let mut p = Particle::at(5.0, 5.0, W, H);
        p.update(DVec2::new(-1.0, -1.0), 50.0);
        assert_eq!(p.position(), DVec2::new(EDGE_MARGIN, EDGE_MARGIN));
        assert!(p.history().is_empty());
    }

    // -- Color hint --

    #[test]
    fn color_hint_is_zero_at_rest_and_full_at_max_speed() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        p.update(DVec2::ZERO, 1.0);
        assert_eq!(p.color_hint(), 0.0);
        for _ in 0..30 {
            p.update(DVec2::new(1.0, 0.0), 0.0);
        }
        assert!((p.color_hint() - HUE_RANGE).abs() < 1e-9);
    }

    #[test]
    fn color_hint_scales_linearly_with_speed() {
        let mut p = Particle::at(400.0, 300.0, W, H);
        p.update(DVec2::new(1.0, 0.0), 0.0);
        // One step from rest: speed = FORCE_GAIN, ratio = 0.15.
        let expected = FORCE_GAIN / MAX_SPEED * HUE_RANGE;
        assert!((p.color_hint() - expected).abs() < 1e-12);
    }

    // -- Reset --

    #[test]
    fn reset_restores_construction_state() {
        let mut rng = SplitMix64::new(4);
        let mut p = Particle::new(W, H, &mut rng);
        for _ in 0..50 {
            p.update(DVec2::new(0.9, -0.4), 2.0);
        }
        p.reset(W, H, &mut rng);
        let pos = p.position();
        assert!((SPAWN_INSET..=W - SPAWN_INSET).contains(&pos.x));
        assert!((SPAWN_INSET..=H - SPAWN_INSET).contains(&pos.y));
        assert_eq!(p.velocity(), DVec2::ZERO);
        assert!(p.history().is_empty());
        assert_eq!(p.color_hint(), 0.0);
    }

    #[test]
    fn reset_adopts_new_bounds() {
        let mut rng = SplitMix64::new(4);
        let mut p = Particle::new(W, H, &mut rng);
        p.reset(200.0, 100.0, &mut rng);
        let pos = p.position();
        assert!(pos.x <= 200.0 - SPAWN_INSET);
        assert!(pos.y <= 100.0 - SPAWN_INSET);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_force() -> impl Strategy<Value = (f64, f64)> {
            (-1.0_f64..1.0, -1.0_f64..1.0)
        }

        proptest! {
            #[test]
            fn speed_never_exceeds_the_cap(
                seed: u64,
                forces in prop::collection::vec(any_force(), 1..200),
                multiplier in 0.0_f64..5.0,
            ) {
                let mut rng = SplitMix64::new(seed);
                let mut p = Particle::new(W, H, &mut rng);
                for (fx, fy) in forces {
                    p.update(DVec2::new(fx, fy), multiplier);
                    prop_assert!(
                        p.velocity().length() <= MAX_SPEED + 1e-9,
                        "speed {} above cap", p.velocity().length()
                    );
                }
            }

            #[test]
            fn position_stays_inside_bounds(
                seed: u64,
                forces in prop::collection::vec(any_force(), 1..200),
                multiplier in 0.0_f64..10.0,
            ) {
                let mut rng = SplitMix64::new(seed);
                let mut p = Particle::new(W, H, &mut rng);
                for (fx, fy) in forces {
                    p.update(DVec2::new(fx, fy), multiplier);
                    let pos = p.position();
                    prop_assert!((EDGE_MARGIN..=W - EDGE_MARGIN).contains(&pos.x));
                    prop_assert!((EDGE_MARGIN..=H - EDGE_MARGIN).contains(&pos.y));
                }
            }

            #[test]
            fn history_never_exceeds_capacity(
                seed: u64,
                forces in prop::collection::vec(any_force(), 1..100),
            ) {
                let mut rng = SplitMix64::new(seed);
                let mut p = Particle::new(W, H, &mut rng);
                for (fx, fy) in forces {
                    p.update(DVec2::new(fx, fy), 1.0);
                    prop_assert!(p.history().len() <= MAX_HISTORY);
                }
            }
        }
    }
}
