//! Seeded lattice gradient noise.
//!
//! The engine owns a 512-entry permutation table built from a 32-bit seed. Sampling is a pure
//! function of the table and the coordinates, so two engines reseeded with the same seed produce
//! bit-identical noise. The engine implements the `noise` crate's `NoiseFn` and `Seedable` traits
//! and can stand in wherever a `noise::Perlin` would be sampled.

use noise::{NoiseFn, Seedable};

/// Number of distinct lattice hashes (the permutation period)
pub const PERMUTATION_SIZE: usize = 256;

/// Length of the doubled permutation table
pub const TABLE_SIZE: usize = PERMUTATION_SIZE * 2;

// LCG constants (Numerical Recipes)
const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Linear congruential generator driving the permutation shuffle.
struct Lcg {
    state: u32,
}

impl Lcg {
    fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return a uniform value in [0, 1).
    fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state as f64 / LCG_MODULUS
    }
}

/// Seed-controlled 2D gradient noise source.
#[derive(Clone)]
pub struct NoiseEngine {
    seed: u32,
    perm: [u8; TABLE_SIZE],
}

impl NoiseEngine {
    /// Create an engine with its permutation table built from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            seed,
            perm: [0; TABLE_SIZE],
        };
        engine.reseed(seed);
        engine
    }

    /// Rebuild the permutation table from scratch.
    ///
    /// Runs a reverse Fisher-Yates shuffle of `0..=255` driven by the LCG, then duplicates the
    /// result so lookups at `i` and `i + 256` agree.
    pub fn reseed(&mut self, seed: u32) {
        let mut permutation: [u8; PERMUTATION_SIZE] = std::array::from_fn(|i| i as u8);
        let mut rng = Lcg::new(seed);

        for i in (1..PERMUTATION_SIZE).rev() {
            let j = (rng.next_unit() * (i + 1) as f64).floor() as usize;
            permutation.swap(i, j);
        }

        for (i, slot) in self.perm.iter_mut().enumerate() {
            *slot = permutation[i % PERMUTATION_SIZE];
        }
        self.seed = seed;
    }

    /// The seed the current table was built from.
    pub fn current_seed(&self) -> u32 {
        self.seed
    }

    /// Read-only view of the doubled permutation table.
    pub fn permutation(&self) -> &[u8; TABLE_SIZE] {
        &self.perm
    }

    /// Single-octave gradient noise, approximately in [-1, 1].
    ///
    /// Zero at every integer lattice point. The lattice repeats every 256 cells.
    pub fn gradient_noise(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        let xi = (x_floor as i64 & 255) as usize;
        let yi = (y_floor as i64 & 255) as usize;

        let xf = x - x_floor;
        let yf = y - y_floor;

        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a];
        let ab = p[a + 1];
        let b = p[xi + 1] as usize + yi;
        let ba = p[b];
        let bb = p[b + 1];

        lerp(
            v,
            lerp(u, grad(p[aa as usize], xf, yf), grad(p[ba as usize], xf - 1.0, yf)),
            lerp(
                u,
                grad(p[ab as usize], xf, yf - 1.0),
                grad(p[bb as usize], xf - 1.0, yf - 1.0),
            ),
        )
    }

    /// Multi-octave noise normalized to [0, 1]. See [`fractal_noise`].
    pub fn fractal(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        fractal_noise(self, x, y, octaves, persistence, lacunarity)
    }
}

impl Default for NoiseEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for NoiseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseEngine")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl NoiseFn<f64, 2> for NoiseEngine {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.gradient_noise(point[0], point[1])
    }
}

impl Seedable for NoiseEngine {
    fn set_seed(mut self, seed: u32) -> Self {
        self.reseed(seed);
        self
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

/// Sum `octaves` samples of `noise`, each at `lacunarity^i` frequency and `persistence^i`
/// amplitude, and map the amplitude-normalized sum from [-1, 1] into [0, 1].
///
/// With no octaves there is no signal and the midpoint 0.5 is returned.
pub fn fractal_noise<N>(
    noise: &N,
    x: f64,
    y: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
) -> f64
where
    N: NoiseFn<f64, 2> + ?Sized,
{
    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += noise.get([x * frequency, y * frequency]) * amplitude;
        max_value += amplitude;
        amplitude *= persistence;
        frequency *= lacunarity;
    }

    if max_value == 0.0 {
        return 0.5;
    }

    (total / max_value + 1.0) / 2.0
}

/// Quintic fade curve 6t^5 - 15t^4 + 10t^3
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Pseudo-gradient dot product selected by the low 4 bits of the hash.
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
