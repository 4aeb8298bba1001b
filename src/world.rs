//! Terrain grid container and synthesizer
//!
//! Bundles the three generated fields into a single struct and drives the generation protocol:
//! reseed and sample the civilization field, reseed and sample the height field, then classify
//! biomes and place structures cell by cell.

use std::time::Instant;

use serde::Serialize;

use crate::biomes::{biome_for_height, BiomeInfo, BiomeType};
use crate::heightmap::{generate_civilization_map, generate_heightmap};
use crate::noise_engine::NoiseEngine;
use crate::settings::TerrainSettings;
use crate::structures::{place_structure, tile_random, StructureType};
use crate::tilemap::Tilemap;

/// Reference grid dimension (cells per side)
pub const GRID_SIZE: usize = 100;

/// All generated terrain data for one settings value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerrainGrid {
    /// Settings the grid was generated from
    pub settings: TerrainSettings,
    /// Cells per side
    pub size: usize,
    /// Normalized elevation (0.0-1.0)
    pub heightmap: Tilemap<f32>,
    /// Structure standing on each cell
    pub structure_map: Tilemap<StructureType>,
    /// Settlement territory, independent of whether anything was built
    pub village_map: Tilemap<bool>,
}

/// Everything known about one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileInfo {
    pub x: usize,
    pub y: usize,
    pub height: f32,
    pub biome: BiomeType,
    pub structure: StructureType,
    pub village: bool,
}

/// Flat row-major export of a grid for external consumers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridExport<'a> {
    settings: &'a TerrainSettings,
    size: usize,
    heights: &'a [f32],
    structures: Vec<u8>,
    village_mask: &'a [bool],
}

impl TerrainGrid {
    /// Height field, row-major (`y * size + x`).
    pub fn heights(&self) -> &[f32] {
        self.heightmap.as_slice()
    }

    /// Structure field, row-major.
    pub fn structures(&self) -> &[StructureType] {
        self.structure_map.as_slice()
    }

    /// Village mask, row-major.
    pub fn village_mask(&self) -> &[bool] {
        self.village_map.as_slice()
    }

    pub fn height_at(&self, x: usize, y: usize) -> f32 {
        *self.heightmap.get(x, y)
    }

    pub fn structure_at(&self, x: usize, y: usize) -> StructureType {
        *self.structure_map.get(x, y)
    }

    pub fn is_village(&self, x: usize, y: usize) -> bool {
        *self.village_map.get(x, y)
    }

    pub fn biome_at(&self, x: usize, y: usize) -> &'static BiomeInfo {
        biome_for_height(f64::from(self.height_at(x, y)))
    }

    /// Biome classification of every cell.
    pub fn biome_map(&self) -> Tilemap<BiomeType> {
        Tilemap::from_fn(self.size, |x, y| self.biome_at(x, y).biome)
    }

    pub fn get_tile_info(&self, x: usize, y: usize) -> TileInfo {
        TileInfo {
            x,
            y,
            height: self.height_at(x, y),
            biome: self.biome_at(x, y).biome,
            structure: self.structure_at(x, y),
            village: self.is_village(x, y),
        }
    }

    /// Serialize as flat row-major arrays, structures as their numeric tags.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let export = GridExport {
            settings: &self.settings,
            size: self.size,
            heights: self.heights(),
            structures: self.structures().iter().map(|&s| u8::from(s)).collect(),
            village_mask: self.village_mask(),
        };
        serde_json::to_string(&export)
    }
}

/// Generates terrain grids. Owns its noise engine, so each synthesizer serves one caller at a time.
#[derive(Debug)]
pub struct TerrainSynthesizer {
    engine: NoiseEngine,
    size: usize,
}

impl Default for TerrainSynthesizer {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl TerrainSynthesizer {
    pub fn new(size: usize) -> Self {
        Self::with_engine(NoiseEngine::default(), size)
    }

    /// Use an existing engine. Its current table does not matter; every pass reseeds.
    pub fn with_engine(engine: NoiseEngine, size: usize) -> Self {
        Self { engine, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate every field from scratch. Settings are expected to be validated.
    pub fn synthesize(&mut self, settings: &TerrainSettings) -> TerrainGrid {
        let size = self.size;
        let start = Instant::now();

        let civilization = generate_civilization_map(&mut self.engine, settings.seed, size);
        log::debug!("civilization pass: {} cells in {:?}", civilization.len(), start.elapsed());

        let heightmap = generate_heightmap(&mut self.engine, settings, size);
        log::debug!("height pass done at {:?}", start.elapsed());

        let mut structure_map = Tilemap::new(size, size);
        let mut village_map = Tilemap::new(size, size);

        if settings.show_structures {
            for (x, y, &height) in heightmap.iter() {
                let biome = biome_for_height(f64::from(height)).biome;
                let placement = place_structure(
                    biome,
                    *civilization.get(x, y),
                    tile_random(x, y, settings.seed),
                    settings.tree_density,
                    settings.village_density,
                );
                structure_map.set(x, y, placement.structure);
                village_map.set(x, y, placement.village);
            }
        }

        log::debug!(
            "synthesized {}x{} grid for seed {} in {:?}",
            size,
            size,
            settings.seed,
            start.elapsed()
        );

        TerrainGrid {
            settings: settings.clone(),
            size,
            heightmap,
            structure_map,
            village_map,
        }
    }
}

/// Generate a reference-sized grid with a private engine.
pub fn synthesize(settings: &TerrainSettings) -> TerrainGrid {
    TerrainSynthesizer::default().synthesize(settings)
}
