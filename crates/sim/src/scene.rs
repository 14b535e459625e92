//! Reproducible description of a simulation run.
//!
//! A [`Scene`] captures everything needed to recreate a run: field mode,
//! canvas dimensions, configuration, PRNG seed, and step count. Two
//! identical scenes fed to the same binary produce bit-identical
//! simulations.

use driftfield_core::{FieldMode, SimConfig, SimError};
use serde::{Deserialize, Serialize};

/// Reproducible specification for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Field mode driving the particles.
    pub mode: FieldMode,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Simulation tunables; missing keys deserialize to defaults.
    #[serde(default)]
    pub config: SimConfig,
    /// PRNG seed for the noise table and particle placement.
    pub seed: u64,
    /// Number of steps to run before a snapshot.
    #[serde(default)]
    pub steps: usize,
}

impl Scene {
    /// Creates a scene with the default config and zero steps.
    pub fn new(mode: FieldMode, width: usize, height: usize, seed: u64) -> Self {
        Self {
            mode,
            width,
            height,
            config: SimConfig::default(),
            seed,
            steps: 0,
        }
    }

    /// Validates dimensions and configuration.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SimError::InvalidDimensions)?;
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_scene_with_defaults() {
        let scene = Scene::new(FieldMode::Flow, 800, 600, 42);
        assert_eq!(scene.mode, FieldMode::Flow);
        assert_eq!(scene.width, 800);
        assert_eq!(scene.height, 600);
        assert_eq!(scene.seed, 42);
        assert_eq!(scene.steps, 0);
        assert_eq!(scene.config, SimConfig::default());
    }

    #[test]
    fn json_round_trip_with_defaults() {
        let original = Scene::new(FieldMode::Vortex, 1024, 768, 8_675_309);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn json_round_trip_with_custom_config() {
        let mut scene = Scene::new(FieldMode::Chaos, 256, 256, 99);
        scene.config.particle_count = 2048;
        scene.config.speed_multiplier = 1.8;
        scene.steps = 5000;

        let json = serde_json::to_string_pretty(&scene).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, restored);
    }

    #[test]
    fn missing_config_deserializes_to_defaults() {
        let json = r#"{"mode": "galaxy", "width": 640, "height": 480, "seed": 7}"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.mode, FieldMode::Galaxy);
        assert_eq!(scene.config, SimConfig::default());
        assert_eq!(scene.steps, 0);
    }

    #[test]
    fn validate_succeeds_for_valid_scene() {
        assert!(Scene::new(FieldMode::Flow, 800, 600, 42).validate().is_ok());
    }

    #[test]
    fn validate_fails_for_zero_dimension() {
        assert!(Scene::new(FieldMode::Flow, 0, 600, 42).validate().is_err());
        assert!(Scene::new(FieldMode::Flow, 800, 0, 42).validate().is_err());
    }

    #[test]
    fn validate_fails_for_overflowing_dimensions() {
        let scene = Scene::new(FieldMode::Flow, usize::MAX, 2, 42);
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_fails_for_bad_config() {
        let mut scene = Scene::new(FieldMode::Flow, 800, 600, 42);
        scene.config.noise_scale = 0.0;
        assert!(scene.validate().is_err());
    }
}
