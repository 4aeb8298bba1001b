//! Structure types placed on the terrain grid.

use serde::{Deserialize, Serialize};

/// What stands on a cell. The discriminants are stable and shared with renderers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StructureType {
    #[default]
    None = 0,
    /// Lone tree on open grassland
    Tree = 1,
    /// Settlement house
    Building = 2,
    /// Rare settlement landmark
    Tower = 3,
}

impl StructureType {
    pub fn display_name(&self) -> &'static str {
        match self {
            StructureType::None => "None",
            StructureType::Tree => "Tree",
            StructureType::Building => "Building",
            StructureType::Tower => "Tower",
        }
    }

    /// True for settlement structures (buildings and towers).
    pub fn is_settlement(&self) -> bool {
        matches!(self, StructureType::Building | StructureType::Tower)
    }

    pub fn all() -> &'static [StructureType] {
        &[
            StructureType::None,
            StructureType::Tree,
            StructureType::Building,
            StructureType::Tower,
        ]
    }
}

impl From<StructureType> for u8 {
    fn from(structure: StructureType) -> u8 {
        structure as u8
    }
}

impl TryFrom<u8> for StructureType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StructureType::None),
            1 => Ok(StructureType::Tree),
            2 => Ok(StructureType::Building),
            3 => Ok(StructureType::Tower),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for StructureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
