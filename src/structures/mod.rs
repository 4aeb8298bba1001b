//! Settlement and vegetation structures
//!
//! Structures are overlaid on the height field after biome classification:
//! - Villages grow where the coarse civilization noise is high on grassland or beach
//! - Inside villages, buildings appear at the village density, with rare towers
//! - Trees are scattered over the remaining grassland

pub mod placement;
pub mod types;

pub use placement::{place_structure, tile_random, Placement};
pub use types::StructureType;
