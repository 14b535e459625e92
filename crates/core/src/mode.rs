//! Field modes: the qualitative behaviors a direction field can take.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// All recognized mode names, in display order.
const MODE_NAMES: &[&str] = &["flow", "galaxy", "vortex", "chaos"];

/// Qualitative behavior of a [`NoiseField`](crate::field::NoiseField).
///
/// Each mode selects an angle formula and a default time-advance rate.
/// Construction from user input goes through [`FieldMode::from_name`], which
/// rejects unrecognized names instead of falling back to a degenerate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMode {
    /// Smoothly drifting directions straight from the noise value.
    Flow,
    /// Quasi-static rotation around the canvas center with spatial jitter.
    Galaxy,
    /// Swirl perpendicular to the center direction, twisting with distance.
    Vortex,
    /// Two noise octaves at high amplitude; turbulent, fast-changing.
    Chaos,
}

impl FieldMode {
    /// Parses a mode from its lowercase name.
    ///
    /// Returns `SimError::UnknownMode` for anything else.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "flow" => Ok(FieldMode::Flow),
            "galaxy" => Ok(FieldMode::Galaxy),
            "vortex" => Ok(FieldMode::Vortex),
            "chaos" => Ok(FieldMode::Chaos),
            _ => Err(SimError::UnknownMode(name.to_string())),
        }
    }

    /// The lowercase name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            FieldMode::Flow => "flow",
            FieldMode::Galaxy => "galaxy",
            FieldMode::Vortex => "vortex",
            FieldMode::Chaos => "chaos",
        }
    }

    /// Returns a slice of all recognized mode names.
    pub fn list_names() -> &'static [&'static str] {
        MODE_NAMES
    }

    /// Default time advance applied by each field update tick.
    ///
    /// Galaxy barely moves (its formula is time-free), chaos churns an order
    /// of magnitude faster than flow.
    pub fn time_rate(self) -> f64 {
        match self {
            FieldMode::Flow => 0.0003,
            FieldMode::Galaxy => 0.0001,
            FieldMode::Vortex => 0.0005,
            FieldMode::Chaos => 0.001,
        }
    }
}
