//! Memoized terrain generation.
//!
//! Generation is a pure function of the settings, so the last grid can be reused until the
//! settings change by value. Any change regenerates the whole grid.

use crate::settings::TerrainSettings;
use crate::world::{TerrainGrid, TerrainSynthesizer};

/// Cache statistics for monitoring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cached grid
    pub hits: usize,
    /// Requests that regenerated the grid
    pub misses: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    /// Format as human-readable string
    pub fn summary(&self) -> String {
        format!(
            "Hits: {} | Misses: {} | Rate: {:.1}%",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0
        )
    }
}

/// Keeps the most recent grid and regenerates only when the settings differ.
#[derive(Debug, Default)]
pub struct TerrainCache {
    synthesizer: TerrainSynthesizer,
    current: Option<TerrainGrid>,
    stats: CacheStats,
}

impl TerrainCache {
    pub fn new(synthesizer: TerrainSynthesizer) -> Self {
        Self {
            synthesizer,
            current: None,
            stats: CacheStats::default(),
        }
    }

    /// Grid for `settings`, regenerated only if they differ from the cached grid's settings.
    pub fn get(&mut self, settings: &TerrainSettings) -> &TerrainGrid {
        let grid = match self.current.take() {
            Some(grid) if grid.settings == *settings => {
                self.stats.hits += 1;
                grid
            }
            _ => {
                log::info!("settings changed, regenerating grid (seed {})", settings.seed);
                self.stats.misses += 1;
                self.synthesizer.synthesize(settings)
            }
        };

        self.current.insert(grid)
    }

    /// The cached grid, if any.
    pub fn current(&self) -> Option<&TerrainGrid> {
        self.current.as_ref()
    }

    /// Drop the cached grid.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_grid_for_equal_settings() {
        let mut cache = TerrainCache::new(TerrainSynthesizer::new(16));
        let settings = TerrainSettings::with_seed(3);

        let first = cache.get(&settings).clone();
        let second = cache.get(&settings.clone()).clone();
        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.stats().hit_rate(), 0.5);
    }

    #[test]
    fn test_regenerates_on_any_change() {
        let mut cache = TerrainCache::new(TerrainSynthesizer::new(16));
        let settings = TerrainSettings::with_seed(3);
        let _ = cache.get(&settings);

        let changed = TerrainSettings { tree_density: 0.9, ..settings.clone() };
        let grid = cache.get(&changed);
        assert_eq!(grid.settings, changed);

        let reseeded = TerrainSettings { seed: 4, ..settings };
        let grid = cache.get(&reseeded);
        assert_eq!(grid.settings.seed, 4);

        assert_eq!(cache.stats().misses, 3);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cached_grid_matches_direct_generation() {
        let settings = TerrainSettings::with_seed(88);
        let expected = TerrainSynthesizer::new(16).synthesize(&settings);

        let mut cache = TerrainCache::new(TerrainSynthesizer::new(16));
        assert_eq!(cache.get(&settings), &expected);

        cache.clear();
        assert!(cache.current().is_none());
        assert_eq!(cache.get(&settings), &expected);
        assert_eq!(cache.stats().misses, 2);
    }
}
