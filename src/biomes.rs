//! Height-banded biome table.
//!
//! Biomes are classified purely by elevation. The table is ordered by ascending upper threshold
//! and is shared read-only with renderers, which map each entry to its display color.

use serde::{Deserialize, Serialize};

/// Biome tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiomeType {
    DeepOcean,
    Ocean,
    Beach,
    Grassland,
    Forest,
    Mountain,
    Snow,
}

/// One row of the biome table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BiomeInfo {
    pub biome: BiomeType,
    /// Display color (RGB)
    pub color: [u8; 3],
    /// Inclusive upper height bound of this band
    pub threshold: f64,
    pub label: &'static str,
}

impl BiomeInfo {
    /// Color as a `#rrggbb` string.
    pub fn hex_color(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Number of biomes in the table
pub const BIOME_COUNT: usize = 7;

/// All biomes, ascending by threshold.
///
/// Labels are English display names only. Classification depends on the thresholds and their
/// order, never on the label text.
#[rustfmt::skip]
pub static BIOMES: [BiomeInfo; BIOME_COUNT] = [
    BiomeInfo { biome: BiomeType::DeepOcean, color: [0x1e, 0x3a, 0x8a], threshold: 0.30, label: "Deep Ocean" },
    BiomeInfo { biome: BiomeType::Ocean,     color: [0x3b, 0x82, 0xf6], threshold: 0.45, label: "Ocean" },
    BiomeInfo { biome: BiomeType::Beach,     color: [0xfd, 0xe0, 0x47], threshold: 0.50, label: "Beach" },
    BiomeInfo { biome: BiomeType::Grassland, color: [0x22, 0xc5, 0x5e], threshold: 0.70, label: "Grassland" },
    BiomeInfo { biome: BiomeType::Forest,    color: [0x16, 0x65, 0x34], threshold: 0.82, label: "Forest" },
    BiomeInfo { biome: BiomeType::Mountain,  color: [0x4b, 0x55, 0x63], threshold: 0.92, label: "Mountain" },
    BiomeInfo { biome: BiomeType::Snow,      color: [0xff, 0xff, 0xff], threshold: 1.00, label: "Snow" },
];

/// Classify a height: the first biome whose threshold is >= `height`, else the last biome.
///
/// The fallback covers heights above 1.0 and NaN.
pub fn biome_for_height(height: f64) -> &'static BiomeInfo {
    BIOMES
        .iter()
        .find(|b| height <= b.threshold)
        .unwrap_or(&BIOMES[BIOMES.len() - 1])
}

impl BiomeType {
    /// Position in [`BIOMES`]
    pub fn index(self) -> usize {
        match self {
            BiomeType::DeepOcean => 0,
            BiomeType::Ocean => 1,
            BiomeType::Beach => 2,
            BiomeType::Grassland => 3,
            BiomeType::Forest => 4,
            BiomeType::Mountain => 5,
            BiomeType::Snow => 6,
        }
    }

    pub fn info(self) -> &'static BiomeInfo {
        &BIOMES[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Biomes that can host settlements
    pub fn is_settleable(self) -> bool {
        matches!(self, BiomeType::Grassland | BiomeType::Beach)
    }

    pub fn all() -> impl Iterator<Item = BiomeType> {
        BIOMES.iter().map(|b| b.biome)
    }
}

impl std::fmt::Display for BiomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
