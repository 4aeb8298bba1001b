//! Noise passes over the terrain grid.
//!
//! Each pass reseeds the engine before sampling, so it is reproducible from the seed alone no
//! matter what the engine sampled before. The civilization pass uses fixed low-frequency
//! parameters. The height pass uses the settings' fractal parameters.

use crate::noise_engine::NoiseEngine;
use crate::settings::TerrainSettings;
use crate::structures::placement::{
    CIVILIZATION_LACUNARITY, CIVILIZATION_OCTAVES, CIVILIZATION_PERSISTENCE, CIVILIZATION_SCALE,
};
use crate::tilemap::Tilemap;

/// Sample the coarse settlement-suitability field, values in [0, 1].
pub fn generate_civilization_map(engine: &mut NoiseEngine, seed: u32, size: usize) -> Tilemap<f32> {
    engine.reseed(seed);
    Tilemap::from_fn(size, |x, y| {
        engine.fractal(
            x as f64 / CIVILIZATION_SCALE,
            y as f64 / CIVILIZATION_SCALE,
            CIVILIZATION_OCTAVES,
            CIVILIZATION_PERSISTENCE,
            CIVILIZATION_LACUNARITY,
        ) as f32
    })
}

/// Sample the terrain height field, values in [0, 1].
pub fn generate_heightmap(
    engine: &mut NoiseEngine,
    settings: &TerrainSettings,
    size: usize,
) -> Tilemap<f32> {
    engine.reseed(settings.seed);
    Tilemap::from_fn(size, |x, y| {
        let raw = engine.fractal(
            x as f64 / settings.scale,
            y as f64 / settings.scale,
            settings.octaves,
            settings.persistence,
            settings.lacunarity,
        );
        shape_height(raw, settings.height_multiplier)
    })
}

/// Raise a normalized height to `exponent` and clamp into [0, 1].
///
/// Exponents above 1 deepen the lowlands, below 1 lift the median terrain.
pub fn shape_height(raw: f64, exponent: f64) -> f32 {
    raw.powf(exponent).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_height() {
        assert_eq!(shape_height(0.25, 1.0), 0.25);
        assert_eq!(shape_height(0.25, 2.0), 0.0625);
        assert_eq!(shape_height(0.25, 0.5), 0.5);
        assert_eq!(shape_height(1.2, 1.0), 1.0);
        assert_eq!(shape_height(0.0, 0.9), 0.0);
        assert!(shape_height(0.6, 2.0) < 0.6);
        assert!(shape_height(0.6, 0.5) > 0.6);
    }

    #[test]
    fn test_passes_ignore_prior_engine_state() {
        let settings = TerrainSettings::with_seed(42);

        let mut fresh = NoiseEngine::new(42);
        let expected = generate_heightmap(&mut fresh, &settings, 16);

        let mut used = NoiseEngine::new(9001);
        let _ = generate_civilization_map(&mut used, 17, 16);
        let heights = generate_heightmap(&mut used, &settings, 16);

        assert_eq!(heights, expected);
        assert_eq!(used.current_seed(), 42);
    }

    #[test]
    fn test_civilization_map_known_values() {
        let mut engine = NoiseEngine::default();
        let civ = generate_civilization_map(&mut engine, 42, 64);

        // Lattice points of the coarse field sit at the noise midpoint
        assert_eq!(*civ.get(0, 0), 0.5);
        assert_eq!(*civ.get(40, 40), 0.5);
        assert!(civ.iter().all(|(_, _, &v)| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_civilization_map_ignores_terrain_parameters() {
        let mut engine = NoiseEngine::default();
        let a = generate_civilization_map(&mut engine, 5, 20);
        let b = generate_civilization_map(&mut engine, 5, 20);
        let c = generate_civilization_map(&mut engine, 6, 20);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
