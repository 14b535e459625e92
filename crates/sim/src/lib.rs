#![deny(unsafe_code)]
//! Frame driver for the driftfield particle system.
//!
//! This crate sits between `driftfield-core` (field and particle math) and
//! the CLI: [`Simulation`] owns a field and its particles and advances them
//! in lockstep, [`Scene`](scene::Scene) describes a reproducible run, and
//! the `pixel`/`snapshot` modules turn particle trails into pixels.

pub mod pixel;
pub mod scene;

#[cfg(feature = "png")]
pub mod snapshot;

use driftfield_core::{NoiseField, Particle, SimConfig, SimError, SplitMix64};
use crate::scene::Scene;

/// A running simulation: one noise field plus its particle population.
///
/// Each [`Simulation::step`] advances the field clock once, then moves every
/// particle under the field vector sampled at that particle's position,
/// strictly sequentially, matching the single-threaded frame-loop model.
#[derive(Debug, Clone)]
pub struct Simulation {
    field: NoiseField,
    particles: Vec<Particle>,
    config: SimConfig,
    rng: SplitMix64,
    width: usize,
    height: usize,
    steps: u64,
}

impl Simulation {
    /// Builds a simulation from a validated scene.
    ///
    /// The scene seed drives both the noise table and particle placement,
    /// so equal scenes produce bit-identical runs.
    pub fn new(scene: &Scene) -> Result<Self, SimError> {
        scene.validate()?;
        let width = scene.width as f64;
        let height = scene.height as f64;

        let mut field = NoiseField::new(width, height, scene.mode, scene.seed)?;
        field.set_scale(scene.config.noise_scale);
        field.set_pointer_radius(scene.config.pointer_radius);
        field.set_pointer_strength(scene.config.pointer_strength);

        let mut rng = SplitMix64::new(scene.seed);
        let particles = (0..scene.config.particle_count)
            .map(|_| Particle::new(width, height, &mut rng))
            .collect();

        Ok(Self {
            field,
            particles,
            config: scene.config.clone(),
            rng,
            width: scene.width,
            height: scene.height,
            steps: 0,
        })
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self) {
        self.field.update();
        let speed = self.config.speed_multiplier;
        for particle in &mut self.particles {
            let pos = particle.position();
            let force = self.field.sample(pos.x, pos.y);
            particle.update(force, speed);
        }
        self.steps += 1;
    }

    /// Runs `steps` frames back to back.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Resizes the canvas: the field keeps its noise tables and recenters
    /// its pointer, and every particle respawns inside the new bounds.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), SimError> {
        let w = width as f64;
        let h = height as f64;
        self.field.resize(w, h)?;
        for particle in &mut self.particles {
            particle.reset(w, h, &mut self.rng);
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Switches the field mode mid-run.
    pub fn set_mode(&mut self, mode: driftfield_core::FieldMode) {
        self.field.set_mode(mode);
    }

    /// Moves the interaction pointer.
    pub fn set_pointer_position(&mut self, x: f64, y: f64) {
        self.field.set_pointer_position(x, y);
    }

    /// Enables or disables pointer influence.
    pub fn set_pointer_active(&mut self, active: bool) {
        self.field.set_pointer_active(active);
    }

    /// Changes the global speed multiplier.
    pub fn set_speed_multiplier(&mut self, speed: f64) {
        self.config.speed_multiplier = speed;
    }

    /// The particle population, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The underlying field.
    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Current configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames advanced so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
