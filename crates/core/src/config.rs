//! Typed simulation configuration.
//!
//! [`SimConfig`] bundles the tunables the driver and rendering layers
//! consume. Every field has a default, and deserialization fills missing
//! keys from those defaults, so a partial JSON object like
//! `{"particle_count": 2000}` is a complete configuration.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Default number of particles in a simulation.
pub const DEFAULT_PARTICLE_COUNT: usize = 500;
/// Default global speed multiplier.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;
/// Default per-age trail fade coefficient (rendering only).
pub const DEFAULT_TRAIL_FADE: f64 = 0.05;

/// Tunables for a particle simulation.
///
/// `trail_fade` is consumed only by the rendering layer; the kinematics
/// never read it. `noise_scale`, `pointer_radius`, and `pointer_strength`
/// are forwarded to the field at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of particles to spawn.
    pub particle_count: usize,
    /// Global speed multiplier applied to every position integration.
    pub speed_multiplier: f64,
    /// Per-age trail intensity falloff in [0, 1].
    pub trail_fade: f64,
    /// Spatial frequency divisor for the noise field.
    pub noise_scale: f64,
    /// Pointer influence radius in canvas units.
    pub pointer_radius: f64,
    /// Pointer influence strength in [0, 1].
    pub pointer_strength: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            trail_fade: DEFAULT_TRAIL_FADE,
            noise_scale: crate::field::DEFAULT_NOISE_SCALE,
            pointer_radius: crate::field::DEFAULT_POINTER_RADIUS,
            pointer_strength: crate::field::DEFAULT_POINTER_STRENGTH,
        }
    }
}

impl SimConfig {
    /// Checks the configuration at the boundary so the per-frame hot path
    /// can stay unvalidated.
    ///
    /// Rejects NaN/infinite values, a non-positive noise scale (a zero
    /// divisor would poison every sample), and a trail fade outside [0, 1].
    pub fn validate(&self) -> Result<(), SimError> {
        let named = [
            ("speed_multiplier", self.speed_multiplier),
            ("trail_fade", self.trail_fade),
            ("noise_scale", self.noise_scale),
            ("pointer_radius", self.pointer_radius),
            ("pointer_strength", self.pointer_strength),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(SimError::NonFinite {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if self.noise_scale <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "noise_scale must be positive, got {}",
                self.noise_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.trail_fade) {
            return Err(SimError::InvalidConfig(format!(
                "trail_fade must lie in [0, 1], got {}",
                self.trail_fade
            )));
        }
        Ok(())
    }
}
