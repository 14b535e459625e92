//! Pure-computation trail rasterization.
//!
//! This module is always available (no feature gate) so that the `png`
//! snapshot path and any embedding front end can share the same conversion.
//! Each particle is plotted as its history (oldest dimmest) plus its head,
//! colored by the particle's speed-derived hue hint.

use crate::Simulation;
use glam::DVec2;

/// Renders the current simulation state into an RGBA8 buffer of
/// `width * height * 4` bytes over an opaque black background.
///
/// Trail samples decay by `(1 - trail_fade)^age`, where age counts back
/// from the particle head; overlapping plots keep the brighter channel
/// value, so crossing trails lighten instead of overwriting each other.
pub fn render_rgba(sim: &Simulation) -> Vec<u8> {
    let width = sim.width();
    let height = sim.height();
    let mut buf = vec![0u8; width * height * 4];
    for px in buf.chunks_exact_mut(4) {
        px[3] = 255;
    }

    let keep = 1.0 - sim.config().trail_fade;
    for particle in sim.particles() {
        let rgb = hue_to_rgb(particle.color_hint());
        let len = particle.history().len();
        for (i, pos) in particle.history().iter().enumerate() {
            let age = (len - i) as i32;
            plot(&mut buf, width, height, *pos, rgb, keep.powi(age));
        }
        plot(&mut buf, width, height, particle.position(), rgb, 1.0);
    }
    buf
}

/// Converts a hue in degrees to RGB components in [0, 1] at full
/// saturation and value.
pub fn hue_to_rgb(hue: f64) -> [f64; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}

/// Writes one sample into the buffer with a lighten blend. Positions
/// outside the canvas (or non-finite) are skipped.
fn plot(buf: &mut [u8], width: usize, height: usize, pos: DVec2, rgb: [f64; 3], intensity: f64) {
    if !(pos.x.is_finite() && pos.y.is_finite()) {
        return;
    }
    let x = pos.x.floor() as i64;
    let y = pos.y.floor() as i64;
    if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
        return;
    }
    let idx = (y as usize * width + x as usize) * 4;
    for (c, &component) in rgb.iter().enumerate() {
        let value = (component * intensity * 255.0).round() as u8;
        buf[idx + c] = buf[idx + c].max(value);
    }
}
