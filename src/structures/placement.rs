//! Per-cell structure placement rules.
//!
//! Placement is driven by two independent sources: the civilization noise value sampled for the
//! cell (settlement territory) and a sine hash of the cell coordinates and seed (the dice roll).
//! Neither touches the noise engine, so toggling structures never changes the height field.

use crate::biomes::BiomeType;
use super::types::StructureType;

/// Civilization noise is sampled at `(x / 40, y / 40)`
pub const CIVILIZATION_SCALE: f64 = 40.0;
pub const CIVILIZATION_OCTAVES: u32 = 2;
pub const CIVILIZATION_PERSISTENCE: f64 = 0.5;
pub const CIVILIZATION_LACUNARITY: f64 = 2.0;

/// Civilization value above which settleable land becomes village territory
pub const VILLAGE_THRESHOLD: f64 = 0.68;

/// Rolls below this inside a village produce a tower instead of a building
pub const TOWER_ROLL: f64 = 0.05;

/// Tree density is scaled by this factor before comparing against the roll
pub const TREE_DENSITY_FACTOR: f64 = 0.4;

/// Outcome of placement for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub structure: StructureType,
    /// Cell lies inside settlement territory, whether or not anything was built
    pub village: bool,
}

/// Deterministic per-cell roll in [0, 1): `|frac(sin(x*12.9898 + y*78.233 + seed) * 43758.5453)|`.
///
/// `frac` truncates toward zero, so negative products are folded back with `abs`.
pub fn tile_random(x: usize, y: usize, seed: u32) -> f64 {
    let v = (x as f64 * 12.9898 + y as f64 * 78.233 + seed as f64).sin() * 43758.5453;
    (v % 1.0).abs()
}

/// True when a cell qualifies as settlement territory.
pub fn is_village_territory(civ_value: f32, biome: BiomeType) -> bool {
    f64::from(civ_value) > VILLAGE_THRESHOLD && biome.is_settleable()
}

/// Decide what stands on a cell.
pub fn place_structure(
    biome: BiomeType,
    civ_value: f32,
    roll: f64,
    tree_density: f64,
    village_density: f64,
) -> Placement {
    if is_village_territory(civ_value, biome) {
        let structure = if roll < village_density {
            if roll < TOWER_ROLL {
                StructureType::Tower
            } else {
                StructureType::Building
            }
        } else {
            StructureType::None
        };
        return Placement { structure, village: true };
    }

    if biome == BiomeType::Grassland && roll < tree_density * TREE_DENSITY_FACTOR {
        return Placement { structure: StructureType::Tree, village: false };
    }

    Placement::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_random_range_and_determinism() {
        for y in 0..50 {
            for x in 0..50 {
                let r = tile_random(x, y, 42);
                assert!((0.0..1.0).contains(&r));
                assert_eq!(r.to_bits(), tile_random(x, y, 42).to_bits());
            }
        }
        assert_ne!(tile_random(3, 4, 1), tile_random(3, 4, 2));
    }

    #[test]
    fn test_village_building_and_tower_bands() {
        let civ = 0.9;
        let placed = place_structure(BiomeType::Grassland, civ, 0.10, 0.0, 0.2);
        assert_eq!(placed, Placement { structure: StructureType::Building, village: true });

        let placed = place_structure(BiomeType::Beach, civ, 0.01, 0.0, 0.2);
        assert_eq!(placed, Placement { structure: StructureType::Tower, village: true });

        // Tower band is absolute, not a fraction of the village density
        let placed = place_structure(BiomeType::Beach, civ, 0.04, 0.0, 0.045);
        assert_eq!(placed.structure, StructureType::Tower);
    }

    #[test]
    fn test_village_territory_without_structure() {
        let placed = place_structure(BiomeType::Grassland, 0.9, 0.5, 1.0, 0.2);
        assert_eq!(placed, Placement { structure: StructureType::None, village: true });

        let placed = place_structure(BiomeType::Grassland, 0.9, 0.0, 1.0, 0.0);
        assert_eq!(placed, Placement { structure: StructureType::None, village: true });
    }

    #[test]
    fn test_village_requires_settleable_biome_and_strict_threshold() {
        assert!(!is_village_territory(0.9, BiomeType::Forest));
        assert!(!is_village_territory(0.9, BiomeType::Ocean));
        assert!(!is_village_territory(0.5, BiomeType::Grassland));
        assert!(is_village_territory(0.69, BiomeType::Grassland));
    }

    #[test]
    fn test_trees_only_on_grassland_outside_villages() {
        let placed = place_structure(BiomeType::Grassland, 0.1, 0.07, 0.2, 0.2);
        assert_eq!(placed, Placement { structure: StructureType::Tree, village: false });

        // Dampened: 0.2 * 0.4 = 0.08
        let placed = place_structure(BiomeType::Grassland, 0.1, 0.09, 0.2, 0.2);
        assert_eq!(placed, Placement::default());

        let placed = place_structure(BiomeType::Forest, 0.1, 0.0, 1.0, 1.0);
        assert_eq!(placed, Placement::default());

        let placed = place_structure(BiomeType::Beach, 0.1, 0.0, 1.0, 1.0);
        assert_eq!(placed, Placement::default());
    }

    #[test]
    fn test_zero_densities_place_nothing() {
        for i in 0..100 {
            let roll = i as f64 / 100.0;
            let no_village = place_structure(BiomeType::Grassland, 0.9, roll, 1.0, 0.0);
            assert!(!no_village.structure.is_settlement());

            let no_trees = place_structure(BiomeType::Grassland, 0.1, roll, 0.0, 1.0);
            assert_ne!(no_trees.structure, StructureType::Tree);
        }
    }
}
