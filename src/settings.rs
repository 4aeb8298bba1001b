//! Terrain generation settings
//!
//! Settings are an immutable value: a change produces a new `TerrainSettings` and the whole grid
//! is regenerated from it. Validation happens here, at the boundary, so the synthesizer can assume
//! well-formed input.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound (exclusive) for seeds picked at startup
pub const DEFAULT_SEED_RANGE: u32 = 100_000;

/// Upper bound (exclusive) for seeds picked by [`TerrainSettings::randomize_seed`]
pub const RANDOMIZE_SEED_RANGE: u32 = 1_000_000;

/// Parameters for one terrain grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerrainSettings {
    /// Seed for the permutation table and the structure hash
    pub seed: u32,
    /// Cell-space divisor for the height noise (larger = broader features)
    pub scale: f64,
    /// Number of noise octaves
    pub octaves: u32,
    /// Amplitude decay per octave
    pub persistence: f64,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
    /// Exponent applied to the normalized height
    pub height_multiplier: f64,
    /// Tree density on open grassland (0.0-1.0)
    pub tree_density: f64,
    /// Building density inside village territory (0.0-1.0)
    pub village_density: f64,
    /// Place trees and settlements
    pub show_structures: bool,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            seed: rand::thread_rng().gen_range(0..DEFAULT_SEED_RANGE),
            scale: 30.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            height_multiplier: 0.9,
            tree_density: 0.2,
            village_density: 0.2,
            show_structures: true,
        }
    }
}

/// Reasons a settings value is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("scale must be a finite number greater than zero, got {0}")]
    InvalidScale(f64),

    #[error("octaves must be at least 1")]
    NoOctaves,

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be within [0, 1], got {value}")]
    DensityOutOfRange { field: &'static str, value: f64 },
}

impl TerrainSettings {
    /// Default settings with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// A copy of these settings with a freshly drawn seed.
    pub fn randomize_seed(&self) -> Self {
        Self {
            seed: rand::thread_rng().gen_range(0..RANDOMIZE_SEED_RANGE),
            ..self.clone()
        }
    }

    /// A copy of these settings with structures switched on or off.
    pub fn with_structures(&self, show_structures: bool) -> Self {
        Self {
            show_structures,
            ..self.clone()
        }
    }

    /// Check the invariants the synthesizer relies on.
    pub fn validate(&self) -> std::result::Result<(), SettingsError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SettingsError::InvalidScale(self.scale));
        }
        if self.octaves < 1 {
            return Err(SettingsError::NoOctaves);
        }

        for (field, value) in [
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
            ("heightMultiplier", self.height_multiplier),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("treeDensity", self.tree_density),
            ("villageDensity", self.village_density),
        ] {
            // NaN fails the range check
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::DensityOutOfRange { field, value });
            }
        }

        Ok(())
    }

    /// Parse settings from JSON and validate them. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: TerrainSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file without validating them.
    ///
    /// For callers that layer further overrides on top and validate the final value.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Self::read(path)?;
        settings.validate()?;
        Ok(settings)
    }
}
