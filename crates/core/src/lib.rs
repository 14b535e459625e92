#![deny(unsafe_code)]
//! Core types for the driftfield particle system.
//!
//! Provides the seeded gradient-noise primitive (`Perlin2`), the mode-driven
//! direction field (`NoiseField` with `FieldMode` and pointer interaction),
//! particle kinematics (`Particle`), the `SplitMix64` PRNG, the typed
//! `SimConfig`, and `SimError`.

pub mod config;
pub mod error;
pub mod field;
pub mod mode;
pub mod noise;
pub mod particle;
pub mod prng;

pub use config::SimConfig;
pub use error::SimError;
pub use field::{NoiseField, Pointer};
pub use mode::FieldMode;
pub use noise::Perlin2;
pub use particle::Particle;
pub use prng::SplitMix64;
