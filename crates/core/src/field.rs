//! The mode-driven direction field that steers particles.
//!
//! A [`NoiseField`] maps any point (and its own internal time) to a unit
//! direction vector. Four [`FieldMode`]s select the angle formula; an
//! optional pointer repulsor bends nearby directions away from the pointer.
//! Sampling is read-only; [`NoiseField::update`] is the only mutator of the
//! field clock.

use crate::error::SimError;
use crate::mode::FieldMode;
use crate::noise::Perlin2;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Default spatial frequency divisor for noise sampling.
pub const DEFAULT_NOISE_SCALE: f64 = 100.0;
/// Default pointer influence radius in canvas units.
pub const DEFAULT_POINTER_RADIUS: f64 = 150.0;
/// Default pointer influence strength in [0, 1].
pub const DEFAULT_POINTER_STRENGTH: f64 = 0.5;

/// Galaxy: radians of extra rotation per unit distance from the center.
const GALAXY_TWIST: f64 = 0.01;
/// Galaxy: amplitude of the static spatial jitter term.
const GALAXY_JITTER: f64 = 0.5;
/// Vortex: radians of extra swirl per unit distance from the center.
const VORTEX_TWIST: f64 = 0.005;
/// Vortex: amplitude of the time-shifted noise perturbation.
const VORTEX_JITTER: f64 = 1.5;

/// Interactive pointer state: a repulsor the input layer drags around.
///
/// Written only by the input-side setters on [`NoiseField`]; sampling reads
/// it and never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    /// Pointer position in canvas coordinates.
    pub position: DVec2,
    /// Influence radius; directions further away are untouched.
    pub radius: f64,
    /// Blend strength in [0, 1] at the pointer center.
    pub strength: f64,
    /// Whether the pointer currently influences the field.
    pub active: bool,
}

/// A time-varying direction field over the canvas.
#[derive(Debug, Clone)]
pub struct NoiseField {
    width: f64,
    height: f64,
    mode: FieldMode,
    time: f64,
    time_rate: f64,
    scale: f64,
    noise: Perlin2,
    pointer: Pointer,
}

impl NoiseField {
    /// Creates a field with a seeded noise table and the mode's default
    /// time rate. The pointer starts inactive at the canvas center.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero,
    /// negative, or non-finite.
    pub fn new(width: f64, height: f64, mode: FieldMode, seed: u64) -> Result<Self, SimError> {
        Self::with_noise(width, height, mode, Perlin2::new(seed))
    }

    /// Creates a field over an explicit noise generator.
    ///
    /// Used by tests that pin the permutation table; behavior is otherwise
    /// identical to [`NoiseField::new`].
    pub fn with_noise(
        width: f64,
        height: f64,
        mode: FieldMode,
        noise: Perlin2,
    ) -> Result<Self, SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            mode,
            time: 0.0,
            time_rate: mode.time_rate(),
            scale: DEFAULT_NOISE_SCALE,
            noise,
            pointer: Pointer {
                position: DVec2::new(width * 0.5, height * 0.5),
                radius: DEFAULT_POINTER_RADIUS,
                strength: DEFAULT_POINTER_STRENGTH,
                active: false,
            },
        })
    }

    /// Samples the field direction at `(x, y)`. Always unit length.
    ///
    /// Out-of-canvas coordinates are valid: the center math is well-defined
    /// everywhere and lattice indices wrap. When the pointer is active and
    /// within range, the mode angle is blended toward the repulsion angle by
    /// a straight lerp on raw angles; when the two angles are close to π
    /// apart the blend can swing the long way around. That artifact is part
    /// of the field's look and is deliberately not corrected to a
    /// shortest-arc interpolation.
    pub fn sample(&self, x: f64, y: f64) -> DVec2 {
        let mut angle = self.mode_angle(x, y);

        if self.pointer.active {
            let offset = DVec2::new(x, y) - self.pointer.position;
            let dist = offset.length();
            if dist < self.pointer.radius {
                // Linear falloff: 1 at the pointer center, 0 at the edge.
                let influence = 1.0 - dist / self.pointer.radius;
                let repulsion = offset.y.atan2(offset.x) + PI;
                let mix = influence * self.pointer.strength;
                angle = angle * (1.0 - mix) + repulsion * mix;
            }
        }

        DVec2::new(angle.cos(), angle.sin())
    }

    /// The raw mode angle before any pointer influence.
    fn mode_angle(&self, x: f64, y: f64) -> f64 {
        let s = self.scale;
        match self.mode {
            FieldMode::Flow => self.noise.noise2(x / s, y / s + self.time) * TAU,
            FieldMode::Galaxy => {
                let offset = DVec2::new(x, y) - self.center();
                let dist = offset.length();
                offset.y.atan2(offset.x)
                    + dist * GALAXY_TWIST
                    + self.noise.noise2(x / s, y / s) * GALAXY_JITTER
            }
            FieldMode::Vortex => {
                let offset = DVec2::new(x, y) - self.center();
                let dist = offset.length();
                // Perturbation at half spatial frequency, time-shifted in y.
                offset.y.atan2(offset.x)
                    + FRAC_PI_2
                    + dist * VORTEX_TWIST
                    + self.noise.noise2(x / (s * 2.0), y / (s * 2.0) + self.time) * VORTEX_JITTER
            }
            FieldMode::Chaos => {
                // Two octaves at different spatial and temporal frequencies.
                self.noise
                    .noise2(x / (s * 0.3), y / (s * 0.3) + self.time * 2.0)
                    * (2.0 * TAU)
                    + self.noise.noise2(x / (s * 0.5), y / (s * 0.5) - self.time) * TAU
            }
        }
    }

    /// Advances the field clock by the current time rate.
    pub fn update(&mut self) {
        self.time += self.time_rate;
    }

    /// Switches the angle formula and resets the time rate to the new
    /// mode's default.
    pub fn set_mode(&mut self, mode: FieldMode) {
        self.mode = mode;
        self.time_rate = mode.time_rate();
    }

    /// Updates the canvas dimensions and recenters the pointer.
    ///
    /// The noise tables are not rebuilt; the field keeps its texture across
    /// resizes. Returns `SimError::InvalidDimensions` for degenerate input.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidDimensions);
        }
        self.width = width;
        self.height = height;
        self.pointer.position = DVec2::new(width * 0.5, height * 0.5);
        Ok(())
    }

    /// Moves the pointer.
    pub fn set_pointer_position(&mut self, x: f64, y: f64) {
        self.pointer.position = DVec2::new(x, y);
    }

    /// Enables or disables pointer influence.
    pub fn set_pointer_active(&mut self, active: bool) {
        self.pointer.active = active;
    }

    /// Sets the pointer influence radius.
    pub fn set_pointer_radius(&mut self, radius: f64) {
        self.pointer.radius = radius;
    }

    /// Sets the pointer influence strength.
    pub fn set_pointer_strength(&mut self, strength: f64) {
        self.pointer.strength = strength;
    }

    /// Sets the spatial frequency divisor.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Canvas center, the geometric anchor of galaxy and vortex.
    fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Current mode.
    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// Current field clock value.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current per-tick time advance.
    pub fn time_rate(&self) -> f64 {
        self.time_rate
    }

    /// Current spatial frequency divisor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canvas width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current pointer state.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// The underlying noise generator.
    pub fn noise(&self) -> &Perlin2 {
        &self.noise
    }
}
