//! CPU-side PNG snapshots of a running simulation.
//!
//! Feature-gated behind `png` (default on) so embedding front ends can
//! depend on this crate without pulling in the `image` crate. The pixel
//! buffer conversion itself lives in [`crate::pixel`] (always available).

use crate::pixel::render_rgba;
use crate::Simulation;
use driftfield_core::SimError;
use std::path::Path;

/// Writes the current simulation state as a PNG image.
///
/// Returns `SimError::InvalidDimensions` if the canvas dimensions overflow
/// `u32`, or `SimError::Io` on write failure.
pub fn write_png(sim: &Simulation, path: &Path) -> Result<(), SimError> {
    let rgba = render_rgba(sim);
    let w = u32::try_from(sim.width()).map_err(|_| SimError::InvalidDimensions)?;
    let h = u32::try_from(sim.height()).map_err(|_| SimError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SimError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SimError::Io(e.to_string()))
}
