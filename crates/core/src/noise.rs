//! Seedable 2D gradient noise over a classic permutation table.
//!
//! [`Perlin2`] evaluates smooth pseudo-random values in [-1, 1] by hashing
//! integer lattice corners through a duplicated 512-entry permutation table
//! and interpolating corner gradient products with a quintic fade. All
//! evaluation is deterministic: the same table produces bit-identical values
//! for the same coordinates, which is what makes scenes replayable.
//!
//! The permutation is built once at construction (Fisher–Yates over
//! `[0, 256)` driven by [`SplitMix64`]) and never mutated afterwards.

use crate::prng::SplitMix64;

/// Lattice hash period. Coordinates wrap through `& (LATTICE_PERIOD - 1)`.
const LATTICE_PERIOD: usize = 256;

/// The 12 gradient directions of improved gradient noise: the midpoints of
/// a cube's edges, so no axis is favored.
const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Seedable 2D gradient noise generator.
///
/// Holds a 256-entry permutation duplicated to 512 entries so the chained
/// corner lookups never need an explicit wrap, plus the gradient direction
/// assigned to each table entry. Both tables are read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct Perlin2 {
    /// Duplicated permutation: `perm[i] == perm[i + 256]`, entries in [0, 256).
    perm: [u8; 2 * LATTICE_PERIOD],
    /// Gradient direction per table entry, selected by `perm[i] % 12`.
    grads: Vec<[f64; 3]>,
}

impl Perlin2 {
    /// Creates a generator whose permutation is a seeded random shuffle of
    /// `[0, 256)`.
    pub fn new(seed: u64) -> Self {
        let mut base: [u8; LATTICE_PERIOD] = std::array::from_fn(|i| i as u8);
        SplitMix64::new(seed).shuffle(&mut base);
        Self::from_permutation(base)
    }

    /// Creates a generator from an explicit 256-entry base permutation.
    ///
    /// The base is duplicated into the 512-entry table. Passing the identity
    /// permutation `[0, 1, …, 255]` gives the reference table used by the
    /// pinned-value tests.
    pub fn from_permutation(base: [u8; LATTICE_PERIOD]) -> Self {
        let mut perm = [0u8; 2 * LATTICE_PERIOD];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = base[i % LATTICE_PERIOD];
        }
        let grads = perm
            .iter()
            .map(|&p| GRADIENTS[p as usize % GRADIENTS.len()])
            .collect();
        Self { perm, grads }
    }

    /// Evaluates the noise at `(x, y)`. Output lies in [-1, 1].
    ///
    /// Any finite coordinates are valid; lattice indices wrap modulo 256.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let xf = x.floor();
        let yf = y.floor();
        let xi = (xf as i64 & 255) as usize;
        let yi = (yf as i64 & 255) as usize;
        let dx = x - xf;
        let dy = y - yf;

        let u = fade(dx);
        let v = fade(dy);

        // Corner hashes: two chained lookups per corner.
        let aa = self.perm[self.perm[xi] as usize + yi];
        let ab = self.perm[self.perm[xi] as usize + yi + 1];
        let ba = self.perm[self.perm[xi + 1] as usize + yi];
        let bb = self.perm[self.perm[xi + 1] as usize + yi + 1];

        // Lerp along x first, then y.
        let x1 = lerp(grad(aa, dx, dy), grad(ba, dx - 1.0, dy), u);
        let x2 = lerp(grad(ab, dx, dy - 1.0), grad(bb, dx - 1.0, dy - 1.0), u);
        lerp(x1, x2, v)
    }

    /// Read-only access to the duplicated permutation table.
    pub fn permutation(&self) -> &[u8] {
        &self.perm
    }

    /// Read-only access to the gradient direction table.
    pub fn gradients(&self) -> &[[f64; 3]] {
        &self.grads
    }
}

/// Quintic smoothing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at t=0 and t=1, so cell boundaries
/// stay artifact-free.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Corner gradient product: the low 2 bits of `hash` select the sign of
/// `dx` and `dy` in the sum, giving the four diagonal directions.
fn grad(hash: u8, dx: f64, dy: f64) -> f64 {
    let gx = if hash & 1 == 0 { dx } else { -dx };
    let gy = if hash & 2 == 0 { dy } else { -dy };
    gx + gy
}
