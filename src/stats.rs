//! Summary statistics over a terrain grid.

use crate::biomes::{BiomeType, BIOMES, BIOME_COUNT};
use crate::structures::StructureType;
use crate::world::TerrainGrid;

/// Cell counts and height range for one grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridStats {
    /// Cells per biome, indexed like [`BIOMES`]
    pub biome_counts: [usize; BIOME_COUNT],
    /// Cells per structure type, indexed by the structure tag
    pub structure_counts: [usize; 4],
    pub village_cells: usize,
    pub min_height: f32,
    pub max_height: f32,
    pub mean_height: f32,
    pub total_cells: usize,
}

impl GridStats {
    pub fn from_grid(grid: &TerrainGrid) -> Self {
        let mut stats = GridStats {
            min_height: f32::MAX,
            max_height: f32::MIN,
            total_cells: grid.heights().len(),
            ..Default::default()
        };
        let mut height_sum = 0.0f64;

        for (x, y, &h) in grid.heightmap.iter() {
            stats.min_height = stats.min_height.min(h);
            stats.max_height = stats.max_height.max(h);
            height_sum += h as f64;

            stats.biome_counts[grid.biome_at(x, y).biome.index()] += 1;
            stats.structure_counts[u8::from(grid.structure_at(x, y)) as usize] += 1;
            if grid.is_village(x, y) {
                stats.village_cells += 1;
            }
        }

        if stats.total_cells == 0 {
            stats.min_height = 0.0;
            stats.max_height = 0.0;
        } else {
            stats.mean_height = (height_sum / stats.total_cells as f64) as f32;
        }

        stats
    }

    pub fn biome_count(&self, biome: BiomeType) -> usize {
        self.biome_counts[biome.index()]
    }

    pub fn structure_count(&self, structure: StructureType) -> usize {
        self.structure_counts[u8::from(structure) as usize]
    }

    /// Fraction of cells covered by a biome (0.0-1.0)
    pub fn coverage(&self, biome: BiomeType) -> f32 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.biome_count(biome) as f32 / self.total_cells as f32
        }
    }

    /// Multi-line human-readable summary
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Height range: {:.3} to {:.3} (mean {:.3})\n",
            self.min_height, self.max_height, self.mean_height
        );
        for info in BIOMES.iter() {
            out.push_str(&format!(
                "  {:<10} {:>6} cells ({:.1}%)\n",
                info.label,
                self.biome_count(info.biome),
                self.coverage(info.biome) * 100.0
            ));
        }
        out.push_str(&format!(
            "Structures: {} trees, {} buildings, {} towers ({} village cells)\n",
            self.structure_count(StructureType::Tree),
            self.structure_count(StructureType::Building),
            self.structure_count(StructureType::Tower),
            self.village_cells
        ));
        out
    }
}
