//! Seeded noise terrain generation library
//!
//! Builds a square height field from fractal gradient noise, classifies biomes by height and
//! scatters trees and village structures over it. Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod cache;
pub mod error;
pub mod heightmap;
pub mod noise_engine;
pub mod settings;
pub mod stats;
pub mod structures;
pub mod tilemap;
pub mod world;

pub use biomes::{biome_for_height, BiomeInfo, BiomeType, BIOMES};
pub use cache::TerrainCache;
pub use error::{Error, Result};
pub use noise_engine::NoiseEngine;
pub use settings::{SettingsError, TerrainSettings};
pub use structures::StructureType;
pub use world::{synthesize, TerrainGrid, TerrainSynthesizer, GRID_SIZE};
